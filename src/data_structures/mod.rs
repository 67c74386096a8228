//! Data structures for Hale KV.
//!
//! This module contains the storage structures behind the Hale KV crate.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, flat storage with no hidden indirection
//! - Typed errors on every fallible operation

pub mod hale_probe_table;

// Re-export the primary data structure
pub use hale_probe_table::{HaleProbeTable, HaleProbeTableConfig, HaleProbeTableError, ProbeMode};
