// Copyright (c) 2025 Hale KV Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Hashing utilities for the Hale Probe Table.
//!
//! A single FNV-1a hash reduced modulo the table capacity decides where a
//! probe walk begins. The raw hash is carried as an unsigned 64-bit value
//! end to end, so the reduction can never produce an index outside
//! `[0, capacity)` regardless of key content.

use std::hash::{Hash, Hasher};

/// Computes the raw 64-bit FNV-1a hash of a key.
fn raw_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps keys to starting slot indices for a table of a given capacity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BucketHasher {
    capacity: usize,
}

impl BucketHasher {
    /// Creates a hasher for a table with `capacity` slots.
    ///
    /// The capacity must be non-zero; the table constructor validates this
    /// before building the hasher.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity validated at table construction");
        Self { capacity }
    }

    /// Returns the starting slot index for `key`, always in `[0, capacity)`.
    pub fn bucket_index<K: Hash + ?Sized>(&self, key: &K) -> usize {
        (raw_hash(key) % self.capacity as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(31)]
    #[test_case(1_024)]
    fn test_index_in_range(capacity: usize) {
        let hasher = BucketHasher::new(capacity);
        for key in ["", "a", "Deadpool", "Zootopia", "a much longer key with spaces"] {
            assert!(hasher.bucket_index(key) < capacity);
        }
    }

    #[test]
    fn test_hash_stability() {
        let hasher = BucketHasher::new(31);
        assert_eq!(hasher.bucket_index("Deadpool"), hasher.bucket_index("Deadpool"));
        // String and str hash identically, so owned and borrowed lookups agree.
        assert_eq!(
            hasher.bucket_index("Zootopia"),
            hasher.bucket_index(&"Zootopia".to_string())
        );
    }

    #[test]
    fn test_different_keys_spread() {
        let hasher = BucketHasher::new(1_024);
        assert_ne!(hasher.bucket_index("hello"), hasher.bucket_index("world"));
        assert_ne!(raw_hash("key1"), raw_hash("key2"));
    }

    #[test]
    fn test_capacity_one_pins_everything_to_slot_zero() {
        let hasher = BucketHasher::new(1);
        for key in ["alpha", "beta", "gamma"] {
            assert_eq!(hasher.bucket_index(key), 0);
        }
    }
}
