// Copyright (c) 2025 Hale KV Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Implementation of the Hale Probe Table.
//!
//! The table is a flat, owned array of optional entries. Collisions are
//! resolved by linear probing: the walk starts at the key's hash index and
//! advances one slot per occupied, non-matching slot. How the walk behaves
//! at the last slot is governed by [`ProbeMode`].

use std::ops::Range;

use crate::data_structures::hale_probe_table::config::{HaleProbeTableConfig, ProbeMode};
use crate::data_structures::hale_probe_table::error::{HaleProbeTableError, Result};
use crate::data_structures::hale_probe_table::hash::BucketHasher;

/// A single key/count pair stored in a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lookup key.
    pub key: String,
    /// Stored count. May be negative; absence is signaled through
    /// `Option`, never through a reserved value.
    pub value: i64,
}

/// A fixed-capacity lookup table with open addressing and linear probing.
///
/// The table owns `capacity` slots for its whole lifetime: there is no
/// resizing, rehashing, or deletion. Every key present in the table occupies
/// exactly one slot, reachable by walking the probe sequence from the key's
/// hash index.
///
/// Mutating operations take `&mut self`; the table is meant to be owned by
/// a single caller. Concurrent use needs external synchronization.
///
/// # Examples
///
/// ```
/// use hale_kv_lib::data_structures::hale_probe_table::HaleProbeTable;
///
/// let mut table = HaleProbeTable::new(31).expect("non-zero capacity");
///
/// table.put("Deadpool".to_string(), 0).unwrap();
/// table.put("Zootopia".to_string(), 4).unwrap();
///
/// assert_eq!(table.get("Zootopia").unwrap(), Some(4));
/// assert_eq!(table.get("Nonexistent").unwrap(), None);
///
/// // Overwrite at the same key mutates the one slot it already owns.
/// table.put("Zootopia".to_string(), 3).unwrap();
/// assert_eq!(table.get("Zootopia").unwrap(), Some(3));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HaleProbeTable {
    /// The slot array. `None` marks a slot that has never been occupied.
    slots: Vec<Option<Entry>>,

    /// Number of occupied slots.
    occupied: usize,

    /// The configuration the table was built with.
    config: HaleProbeTableConfig,

    /// Maps keys to starting slot indices.
    hasher: BucketHasher,
}

/// The slot indices a probe walk visits, in order.
///
/// Bounded walks run `start..capacity` and stop; wrapping walks visit every
/// slot exactly once starting from `start`.
enum ProbeSequence {
    Bounded(Range<usize>),
    Wrapping {
        start: usize,
        capacity: usize,
        step: usize,
    },
}

impl ProbeSequence {
    fn new(mode: ProbeMode, capacity: usize, start: usize) -> Self {
        match mode {
            ProbeMode::Bounded => ProbeSequence::Bounded(start..capacity),
            ProbeMode::Wrapping => ProbeSequence::Wrapping {
                start,
                capacity,
                step: 0,
            },
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            ProbeSequence::Bounded(range) => range.next(),
            ProbeSequence::Wrapping {
                start,
                capacity,
                step,
            } => {
                if *step == *capacity {
                    return None;
                }
                let idx = (*start + *step) % *capacity;
                *step += 1;
                Some(idx)
            }
        }
    }
}

impl HaleProbeTable {
    /// Creates a table with `capacity` empty slots and the default
    /// [`ProbeMode::Bounded`] walk.
    ///
    /// # Errors
    ///
    /// Returns [`HaleProbeTableError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(HaleProbeTableConfig::new().with_capacity(capacity))
    }

    /// Creates a table from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HaleProbeTableError::InvalidCapacity`] if the configured
    /// capacity is 0.
    pub fn with_config(config: HaleProbeTableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(HaleProbeTableError::InvalidCapacity(config.capacity));
        }

        Ok(Self {
            slots: vec![None; config.capacity],
            occupied: 0,
            hasher: BucketHasher::new(config.capacity),
            config,
        })
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured collision-walk behavior.
    pub fn probe_mode(&self) -> ProbeMode {
        self.config.probe_mode
    }

    /// Returns the ratio of occupied slots to capacity.
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.capacity() as f64
    }

    /// Looks up the count stored for `key`.
    ///
    /// Walks the probe sequence from the key's hash index past occupied,
    /// non-matching slots. The first empty slot proves the key absent;
    /// a matching slot yields its value. Returns the value most recently
    /// put for `key`.
    ///
    /// # Errors
    ///
    /// In [`ProbeMode::Bounded`], a walk that reaches the end of the table
    /// without hitting an empty or matching slot returns
    /// [`HaleProbeTableError::ProbeOverrun`].
    pub fn get(&self, key: &str) -> Result<Option<i64>> {
        let start = self.hasher.bucket_index(key);

        for idx in self.probe_sequence(start) {
            match &self.slots[idx] {
                Some(entry) if entry.key == key => return Ok(Some(entry.value)),
                Some(_) => continue,
                None => return Ok(None),
            }
        }

        self.walk_exhausted(start).map(|()| None)
    }

    /// Returns whether `key` is present.
    ///
    /// A bounded walk that overruns counts as absent here: the key cannot
    /// be reached by its probe sequence.
    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    /// Inserts or overwrites the count for `key`.
    ///
    /// Walks the same probe sequence as [`get`](Self::get) and writes the
    /// entry into the first empty or same-key slot. Exactly one slot is
    /// mutated; an overwrite never creates a second entry for the key.
    ///
    /// # Errors
    ///
    /// In [`ProbeMode::Bounded`], a walk past the last slot returns
    /// [`HaleProbeTableError::ProbeOverrun`]. In [`ProbeMode::Wrapping`],
    /// a table with no free slot for a new key returns
    /// [`HaleProbeTableError::TableFull`]. The table is unchanged in both
    /// cases.
    pub fn put(&mut self, key: String, value: i64) -> Result<()> {
        let start = self.hasher.bucket_index(key.as_str());

        for idx in self.probe_sequence(start) {
            match &self.slots[idx] {
                Some(entry) if entry.key != key => continue,
                existing => {
                    if existing.is_none() {
                        self.occupied += 1;
                    }
                    self.slots[idx] = Some(Entry { key, value });
                    return Ok(());
                }
            }
        }

        match self.walk_exhausted(start) {
            Err(err) => Err(err),
            Ok(()) => Err(HaleProbeTableError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Renders one line per slot, in index order: either an "empty" notice
    /// or the stored key and count. Pure read, intended for diagnostics.
    pub fn display_info(&self) -> Vec<String> {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| match slot {
                None => format!("Index {idx} is empty"),
                Some(entry) => format!("Index {idx}: {} = {}", entry.key, entry.value),
            })
            .collect()
    }

    /// Iterates over the stored entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|entry| (entry.key.as_str(), entry.value)))
    }

    /// The slot indices a walk from `start` visits, per the configured mode.
    fn probe_sequence(&self, start: usize) -> ProbeSequence {
        ProbeSequence::new(self.config.probe_mode, self.capacity(), start)
    }

    /// Classifies an exhausted walk: a bounded walk ran off the end of the
    /// table (overrun), a wrapping walk visited every slot (not a fault by
    /// itself; callers decide what exhaustion means for them).
    fn walk_exhausted(&self, start: usize) -> Result<()> {
        match self.config.probe_mode {
            ProbeMode::Bounded => Err(HaleProbeTableError::ProbeOverrun {
                start,
                last: self.capacity() - 1,
            }),
            ProbeMode::Wrapping => Ok(()),
        }
    }
}
