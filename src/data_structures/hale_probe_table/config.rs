// Copyright (c) 2025 Hale KV Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration options for the Hale Probe Table.

/// Collision-walk behavior once a probe reaches the last slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// The walk advances one slot at a time and stops at the end of the
    /// table. A walk that would continue past the last slot is reported as
    /// [`HaleProbeTableError::ProbeOverrun`](super::HaleProbeTableError::ProbeOverrun):
    /// free slots before the start index are never revisited.
    #[default]
    Bounded,

    /// The walk wraps around to slot 0 after the last slot and visits every
    /// slot exactly once. Insertion into a full table reports
    /// [`HaleProbeTableError::TableFull`](super::HaleProbeTableError::TableFull)
    /// instead of overrunning. Note that wrapping changes which lookups can
    /// fail near capacity compared to [`ProbeMode::Bounded`].
    Wrapping,
}

/// Configuration for the Hale Probe Table.
#[derive(Debug, Clone)]
pub struct HaleProbeTableConfig {
    /// Number of slots in the table. Fixed for the lifetime of the table;
    /// there is no resizing or rehashing.
    pub capacity: usize,

    /// Collision-walk behavior. See [`ProbeMode`].
    pub probe_mode: ProbeMode,
}

impl HaleProbeTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots in the table.
    ///
    /// Validation happens when the table is constructed, not here; a
    /// capacity of zero is rejected there.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the collision-walk behavior.
    pub fn with_probe_mode(mut self, probe_mode: ProbeMode) -> Self {
        self.probe_mode = probe_mode;
        self
    }
}

impl Default for HaleProbeTableConfig {
    fn default() -> Self {
        Self {
            capacity: 1_024,
            probe_mode: ProbeMode::Bounded,
        }
    }
}
