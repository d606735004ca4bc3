// src/collector/fetch.rs
// =============================================================================
// This module is the HTTP transport: it turns a URL string into a page body.
//
// Key behavior:
// - Plain GET request, default redirect handling, no custom headers
// - A non-success status code is an error, same as any transport failure
// - The URL string is handed to reqwest as-is, with no validation of our own;
//   a malformed URL simply fails the request like any other error
//
// The traversal in walk.rs treats every error from here identically, so this
// module doesn't need to distinguish DNS from TLS from timeouts - it just
// propagates whatever went wrong with `?`.
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

// Builds the HTTP client used for all fetches in one traversal.
//
// We create the client once and reuse it for every request (connection
// pooling). The 10 second timeout puts an upper bound on how long a single
// slow page can stall the traversal.
pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        // Building can only fail on invalid builder settings, which are
        // constant here, so this is a programmer error if it ever triggers
        .expect("Failed to create HTTP client")
}

// Fetches a web page and returns its body text.
//
// Parameters:
//   client: reqwest HTTP client (borrowed, shared across the traversal)
//   url: the URL to fetch, passed through unvalidated
//
// Returns: the body as a String, or an error for any failure at all -
// connect, DNS, TLS, timeout, bad URL, non-success HTTP status, body read.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    let body = response.text().await?;
    Ok(body)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why no URL parsing before the request?
//    - The collector's contract is to pass the string straight to the
//      transport; reqwest reports malformed URLs as request errors, and the
//      traversal already contains those. Validating up front would just
//      duplicate the failure path.
//
// 2. Why is a 404 an error here?
//    - The traversal doesn't distinguish "page missing" from "network down";
//      both mean this page contributes no links. Folding status failures into
//      the same Result keeps walk.rs to a single containment point.
// -----------------------------------------------------------------------------
