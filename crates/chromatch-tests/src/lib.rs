//! Integration tests for chromatch crates.
//!
//! End-to-end checks across the codec, conversion graph, statistics and
//! merge orchestrator, including round trips through image files.
