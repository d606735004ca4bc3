// src/collector/mod.rs
// =============================================================================
// This module contains the whole link collection pipeline.
//
// Submodules:
// - fetch: Makes the HTTP GET requests and returns page bodies
// - extract: Parses HTML and pulls out the hyperlinks we keep
// - walk: Drives the bounded-depth traversal over pages
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of the application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod extract;
mod fetch;
mod walk;

// Re-export public items from submodules
// This lets users write `collector::collect()` instead of
// `collector::walk::collect()`
pub use fetch::build_client;
pub use walk::{collect, collect_concurrent, collect_with_diagnostics, FetchFailure};
