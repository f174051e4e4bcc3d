//! Shared test fixtures for sequent crates.
//!
//! This crate provides instrumented and capability-hiding sources for
//! exercising the engine's evaluation paths:
//!
//! - [`probe`] - a source whose traversal lifecycle is observable, for
//!   disposal guarantees
//! - [`opaque`] - a source that hides every capability, forcing the generic
//!   element path for baseline comparisons
//! - [`chunked`] - a sample external container with a provider adapter, for
//!   finder-registry tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sequent-test = { workspace = true }
//! ```

pub mod chunked;
pub mod opaque;
pub mod probe;

// Re-export commonly used types at crate root for convenience
pub use chunked::{chunked_finder, Chunked};
pub use opaque::OpaqueSource;
pub use probe::{ProbeSource, TraversalLog};
