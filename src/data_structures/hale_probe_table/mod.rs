// Copyright (c) 2025 Hale KV Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Hale Probe Table: a fixed-capacity lookup table with linear probing.
//!
//! The table maps string keys to integer counts and resolves hash
//! collisions with open addressing: every entry lives in the table's own
//! slot array, and a colliding entry is relocated by walking one slot at a
//! time from the key's hash index. Capacity is fixed at construction;
//! there is no resizing, rehashing, or deletion.
//!
//! # Features
//!
//! - Deterministic FNV-1a bucket placement, always in range
//! - Linear probe walk with a choice of end-of-table behavior
//! - Typed errors for invalid capacity, probe overrun, and full tables
//! - `Option`-based absence, so any `i64` count (including negatives) is
//!   a legal stored value
//!
//! # Example
//!
//! ```
//! use hale_kv_lib::data_structures::hale_probe_table::{
//!     HaleProbeTable, HaleProbeTableConfig, ProbeMode,
//! };
//!
//! let mut table = HaleProbeTable::new(31).expect("non-zero capacity");
//!
//! table.put("Deadpool".to_string(), 0).unwrap();
//! table.put("Zootopia".to_string(), 4).unwrap();
//!
//! assert_eq!(table.get("Zootopia").unwrap(), Some(4));
//! assert_eq!(table.get("Nonexistent").unwrap(), None);
//!
//! // The wrapping walk is an explicit opt-in: it revisits free slots
//! // before the hash index instead of stopping at the end of the table.
//! let config = HaleProbeTableConfig::new()
//!     .with_capacity(8)
//!     .with_probe_mode(ProbeMode::Wrapping);
//! let wrapped = HaleProbeTable::with_config(config).unwrap();
//! assert_eq!(wrapped.capacity(), 8);
//! ```
//!
//! # Probe walk at the end of the table
//!
//! The default [`ProbeMode::Bounded`] walk advances `start, start+1, ...`
//! and stops at the last slot. A walk that would continue past it reports
//! [`HaleProbeTableError::ProbeOverrun`]: keys hashing near the end of a
//! crowded table can fail to place or find entries even while earlier
//! slots are free. [`ProbeMode::Wrapping`] trades that behavior for a
//! walk that cycles through every slot once, turning capacity exhaustion
//! into [`HaleProbeTableError::TableFull`].

// Module declarations
mod config;
mod error;
mod hash;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::{HaleProbeTableConfig, ProbeMode};
pub use error::{HaleProbeTableError, Result};
pub use table::{Entry, HaleProbeTable};
