// src/lib.rs
// =============================================================================
// Library root for link-harvester.
//
// The collector lives in the library so that both the CLI binary and
// integration tests (and any other caller) can drive it directly. The binary
// in src/main.rs is just a thin wrapper around this API.
//
// Public surface:
// - collect: the bounded-depth recursive link collector
// - collect_with_diagnostics: same traversal, plus per-page failure reports
// - collect_concurrent: order-preserving variant with parallel sibling fetches
// - build_client: a preconfigured reqwest client to pass to the above
// =============================================================================

pub mod collector;

// Re-export the public API at the crate root so callers can write
// `link_harvester::collect(...)` instead of digging into module paths.
pub use collector::{
    build_client, collect, collect_concurrent, collect_with_diagnostics, FetchFailure,
};
