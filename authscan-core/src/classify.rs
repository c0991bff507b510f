//! Threshold classification.

use crate::aggregate::FrequencyMap;
use crate::types::Address;

/// Addresses whose failure count met the threshold.
///
/// Every entry comes from the source `FrequencyMap` with its count unchanged,
/// and entries keep that map's first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousSet {
    threshold: i64,
    entries: Vec<(Address, u64)>,
}

impl SuspiciousSet {
    /// The threshold this set was classified with.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, address: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(addr, _)| addr.as_str() == address)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, u64)> {
        self.entries.iter().map(|(addr, count)| (addr, *count))
    }
}

/// Whether `count` meets `threshold` (inclusive). Any threshold <= 0 admits
/// every count.
pub fn meets_threshold(count: u64, threshold: i64) -> bool {
    threshold <= 0 || count >= threshold as u64
}

/// Select every entry of `map` with count >= `threshold`.
pub fn classify(map: &FrequencyMap, threshold: i64) -> SuspiciousSet {
    let entries = map
        .iter()
        .filter(|(_, count)| meets_threshold(*count, threshold))
        .map(|(addr, count)| (addr.clone(), count))
        .collect();

    SuspiciousSet { threshold, entries }
}
