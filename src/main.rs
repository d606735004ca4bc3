// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the collector from the library
// 3. Print the collected links (plain listing or JSON report)
// 4. Exit with proper code (0 = success, 1 = some pages failed, 2 = error)
//
// The collector itself never fails - a page that can't be fetched simply
// contributes nothing - so the binary's job is presentation: it surfaces the
// per-page failure diagnostics the library keeps quiet about.
// =============================================================================

// Module declaration - the CLI definition lives next to the binary
mod cli;

use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method

// Everything else comes from the library crate
use link_harvester::{build_client, collect_concurrent, collect_with_diagnostics, FetchFailure};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The JSON report we emit with --json
//
// Failures are included so a caller CAN distinguish "no links" from
// "the fetch failed", which the plain link list deliberately does not show.
#[derive(Debug, Serialize)]
struct Report {
    start_url: String,
    depth: usize,
    links: Vec<String>,
    failures: Vec<FetchFailure>,
}

// This is the main application logic
// Returns:
//   Ok(0) = traversal completed, every attempted page fetched
//   Ok(1) = traversal completed, but some pages failed to fetch
//   Err = unexpected error (mapped to exit code 2 in main)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let args = Cli::parse();

    eprintln!("🔍 Collecting links from: {}", args.url);
    eprintln!("📊 Depth budget: {}", args.depth);

    let client = build_client();

    // The sequential walk is the reference behavior; --concurrency > 1 opts
    // into parallel sibling fetches (same output, fewer diagnostics - the
    // concurrent variant stays silent about failures)
    let (links, failures) = if args.concurrency > 1 {
        let links = collect_concurrent(&client, &args.url, args.depth, args.concurrency).await;
        (links, Vec::new())
    } else {
        collect_with_diagnostics(&client, &args.url, args.depth).await
    };

    let report = Report {
        start_url: args.url,
        depth: args.depth,
        links,
        failures,
    };

    print_report(&report, args.json)?;

    if report.failures.is_empty() {
        Ok(0) // Exit code 0 = all attempted pages fetched
    } else {
        Ok(1) // Exit code 1 = some pages contributed nothing
    }
}

// Prints the report either as a plain listing or JSON
fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        // Plain listing: one link per line, in discovery order, on stdout.
        // Progress and warnings go to stderr so the listing stays pipeable.
        for link in &report.links {
            println!("{}", link);
        }

        eprintln!();
        eprintln!("📋 {} link(s) collected", report.links.len());

        if !report.failures.is_empty() {
            eprintln!("⚠️  {} page(s) failed to fetch:", report.failures.len());
            for failure in &report.failures {
                eprintln!("   [depth {}] {}: {}", failure.depth, failure.url, failure.message);
            }
        }
    }
    Ok(())
}
