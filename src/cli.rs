// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// link-harvester has a single job, so there are no subcommands - just a
// positional URL and a few flags.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version = "0.1.0",
    about = "Recursively collect hyperlinks from a web page to a bounded depth",
    long_about = "link-harvester fetches a starting page, extracts its outbound http(s) links, \
                  and follows each one recursively until the depth budget runs out. The result \
                  is the flat, ordered list of every link discovered along the way."
)]
pub struct Cli {
    /// Starting page URL (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed).
    /// It is passed to the transport as-is, without validation.
    pub url: String,

    /// Depth budget: how many levels of pages get fetched
    ///
    /// Depth 0 = fetch nothing, return nothing
    /// Depth 1 = fetch the starting page, return its links
    /// Depth 2 = ... and also fetch each of those links for their links
    /// etc.
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Output a JSON report instead of a plain listing
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Maximum in-flight requests for sibling links
    ///
    /// 1 (the default) keeps the reference strictly-sequential traversal.
    /// Higher values fetch sibling pages in parallel; the output order is
    /// the same either way.
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,
}
