//! Hale KV Library
//!
//! This library contains the core components of Hale KV: a fixed-capacity
//! lookup table mapping string keys to integer counts, with collisions
//! resolved by open addressing and linear probing. The library is designed
//! to be used by the binary crate, but can also be used as a dependency by
//! other projects.
//!
//! # Architecture
//!
//! Hale KV is designed with the following principles in mind:
//! - A pure table abstraction with no global mutable state
//! - A separate, optional CLI driver that seeds and queries a table
//! - Typed errors on every fallible operation
//! - Deterministic hashing and probing, testable slot by slot

// Re-export public modules
pub mod data_structures;
pub mod error;

/// Version information for Hale KV.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::HaleKvResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    Ok(())
}
