// src/collector/walk.rs
// =============================================================================
// This module drives the bounded-depth traversal over pages.
//
// How it works:
// 1. Start with the initial URL and the full depth budget
// 2. Fetch the page and extract its hyperlinks (fetch.rs + extract.rs)
// 3. For each kept link, in document order: record the link, then expand it
//    with depth - 1, then move on to the next sibling (depth-first)
// 4. depth 0 is the base case: no fetch, no contribution
//
// Ordering contract (the output IS the ordering):
//   each link is immediately followed by everything transitively discovered
//   through it, before the next sibling link appears. For a page [A, B]
//   where B leads to [C], the result is exactly [A, B, C].
//
// Failure containment:
//   any failure while fetching or reading one page (bad URL, DNS, timeout,
//   HTTP error status, ...) removes only that page's contribution. Siblings
//   and ancestors keep whatever they already accumulated. The default entry
//   point stays silent about failures; collect_with_diagnostics reports them.
//
// Termination:
//   the depth budget is the only termination guarantee. There is NO visited
//   set and NO deduplication - a page that links to itself is re-fetched at
//   every level until the budget runs out. Callers rely on the repeats, so
//   don't add dedup here.
//
// Rust concepts:
// - Explicit work-list: we drive the depth-first walk with our own Vec-based
//   stack instead of native recursion, so a hostile depth/fanout combination
//   can't overflow the call stack
// - BoxFuture: for the recursive async variant in collect_concurrent
// =============================================================================

use anyhow::Result;
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::extract::extract_links;
use super::fetch::fetch_page;

// Describes one page whose fetch-and-extract step failed.
//
// #[derive(Serialize, Deserialize)] lets us include failures in JSON reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchFailure {
    /// The URL of the page that failed
    pub url: String,
    /// The depth budget remaining when the fetch was attempted
    pub depth: usize,
    /// Human-readable description of what went wrong
    pub message: String,
}

// One pending entry in the traversal frontier.
//
// `emit` distinguishes the starting URL (which is expanded but never appears
// in the output) from discovered links (which are emitted, then expanded).
struct Frame {
    url: String,
    depth: usize,
    emit: bool,
}

// Collects hyperlinks reachable from `url` within `depth` levels of fetching.
//
// Parameters:
//   client: reqwest HTTP client (create one with build_client())
//   url: starting page URL, passed to the transport unvalidated
//   depth: recursion budget; 0 means no network access at all
//
// Returns: the flat, ordered, non-deduplicated link sequence. This function
// never fails - on any failure path it degrades to whatever was accumulated
// before the failure, which for a failed starting page is the empty Vec.
pub async fn collect(client: &Client, url: &str, depth: usize) -> Vec<String> {
    let (links, _failures) = collect_with_diagnostics(client, url, depth).await;
    links
}

// Same traversal as collect(), but also reports which pages failed.
//
// The link sequence is identical to what collect() returns for the same
// inputs; the failures are extra information the caller may discard.
// Failures appear in the order they were encountered during the walk.
pub async fn collect_with_diagnostics(
    client: &Client,
    url: &str,
    depth: usize,
) -> (Vec<String>, Vec<FetchFailure>) {
    let mut links = Vec::new();
    let mut failures = Vec::new();

    // LIFO frontier of pages to process. Popping the most recently pushed
    // entry first is what makes the walk depth-first.
    let mut frontier = vec![Frame {
        url: url.to_string(),
        depth,
        emit: false,
    }];

    while let Some(frame) = frontier.pop() {
        // Discovered links are recorded before their subtree is expanded
        if frame.emit {
            links.push(frame.url.clone());
        }

        // Base case: budget exhausted, no fetch for this page
        if frame.depth == 0 {
            continue;
        }

        let found = match fetch_and_extract(client, &frame.url).await {
            Ok(found) => found,
            Err(e) => {
                // This page contributes nothing; the rest of the frontier
                // is untouched
                failures.push(FetchFailure {
                    url: frame.url,
                    depth: frame.depth,
                    message: e.to_string(),
                });
                continue;
            }
        };

        // Push in reverse document order so the first link on the page is
        // popped (emitted and expanded) first
        for link in found.into_iter().rev() {
            frontier.push(Frame {
                url: link,
                depth: frame.depth - 1,
                emit: true,
            });
        }
    }

    (links, failures)
}

// Bounded-concurrency variant: sibling links on the same page are fetched
// in parallel, at most `limit` requests in flight at once.
//
// The output is guaranteed to be the exact sequence collect() would produce
// for the same remote documents - subtree results are awaited in document
// order even though their fetches overlap. A limit of 0 is treated as 1.
pub async fn collect_concurrent(
    client: &Client,
    url: &str,
    depth: usize,
    limit: usize,
) -> Vec<String> {
    expand_concurrent(client, url.to_string(), depth, limit.max(1)).await
}

// Recursive worker for collect_concurrent.
//
// Async recursion needs an explicitly boxed future (the compiler can't size
// a self-referential async fn), hence the BoxFuture return type. Call-stack
// depth here is bounded by the depth budget itself.
fn expand_concurrent(
    client: &Client,
    url: String,
    depth: usize,
    limit: usize,
) -> BoxFuture<'_, Vec<String>> {
    Box::pin(async move {
        if depth == 0 {
            return Vec::new();
        }

        let found = match fetch_and_extract(client, &url).await {
            Ok(found) => found,
            // Same containment as the sequential walk: a failed page
            // contributes nothing, silently
            Err(_) => return Vec::new(),
        };

        // buffered(limit) runs up to `limit` subtree expansions at once but
        // yields their results in submission order, which keeps the output
        // identical to the sequential walk
        let subtrees: Vec<Vec<String>> = stream::iter(
            found
                .iter()
                .cloned()
                .map(|link| expand_concurrent(client, link, depth - 1, limit)),
        )
        .buffered(limit)
        .collect()
        .await;

        // Interleave: each link, then its whole subtree, then the next sibling
        let mut links = Vec::new();
        for (link, subtree) in found.into_iter().zip(subtrees) {
            links.push(link);
            links.extend(subtree);
        }
        links
    })
}

// Fetches one page and extracts its kept links.
//
// This is the typed per-page failure channel: every way a page can fail
// surfaces here as a single Result, and the traversal loops above are the
// only places that decide what a failure means.
async fn fetch_and_extract(client: &Client, url: &str) -> Result<Vec<String>> {
    let body = fetch_page(client, url).await?;
    Ok(extract_links(&body))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a Vec-based frontier instead of plain recursion?
//    - Each page can carry an unbounded number of links, and recursion would
//      tie stack growth to the walk. The explicit stack keeps per-level cost
//      at one Frame and reproduces the recursive ordering exactly: pushing a
//      page's links in reverse means "first link, its subtree, next link".
//
// 2. Why is `depth` usize?
//    - The budget only ever counts down from a caller-supplied starting
//      value, and 0 is the base case. Making it unsigned removes the
//      "what does a negative budget mean" question entirely.
//
// 3. Why does the starting URL never appear in the output?
//    - The result is the sequence of DISCOVERED links. The root is input,
//      not a discovery; a link back to the root, however, is discovered and
//      recorded like any other.
// -----------------------------------------------------------------------------
