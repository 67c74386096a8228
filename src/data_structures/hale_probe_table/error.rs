// Copyright (c) 2025 Hale KV Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Hale Probe Table.

/// Errors that can occur in Hale Probe Table operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HaleProbeTableError {
    /// The requested capacity cannot hold any entry.
    #[error("invalid capacity {0}: a probe table needs at least one slot")]
    InvalidCapacity(usize),

    /// A bounded probe walk ran past the last slot of the table.
    #[error("probe walk starting at slot {start} ran past the last slot {last}")]
    ProbeOverrun {
        /// Slot index where the walk started.
        start: usize,
        /// Last valid slot index of the table.
        last: usize,
    },

    /// Every slot was visited and none could take the entry.
    #[error("table is full: all {capacity} slots are occupied")]
    TableFull {
        /// Total number of slots in the table.
        capacity: usize,
    },
}

/// Result type for Hale Probe Table operations.
pub type Result<T> = std::result::Result<T, HaleProbeTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HaleProbeTableError::InvalidCapacity(0);
        assert_eq!(
            err.to_string(),
            "invalid capacity 0: a probe table needs at least one slot"
        );

        let err = HaleProbeTableError::ProbeOverrun { start: 29, last: 30 };
        assert_eq!(
            err.to_string(),
            "probe walk starting at slot 29 ran past the last slot 30"
        );

        let err = HaleProbeTableError::TableFull { capacity: 31 };
        assert_eq!(err.to_string(), "table is full: all 31 slots are occupied");
    }
}
