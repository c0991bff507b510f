//! Per-address failure counting.

use std::collections::HashMap;

use crate::types::Address;

/// Failure counts per address, in first-seen order.
///
/// Entries live in a vector; `index` maps each address to its slot so
/// lookups and increments stay O(1) while iteration stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(Address, u64)>,
    index: HashMap<Address, usize>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more failure for `address`.
    pub fn record(&mut self, address: Address) {
        match self.index.get(&address) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(address.clone(), self.entries.len());
                self.entries.push((address, 1));
            }
        }
    }

    /// Failure count for an address, if it was ever seen.
    pub fn get(&self, address: &str) -> Option<u64> {
        self.index.get(address).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.index.contains_key(address)
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. Equals the number of matched lines.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, u64)> {
        self.entries.iter().map(|(addr, count)| (addr, *count))
    }

    /// The `n` addresses with the highest counts.
    ///
    /// Ties keep first-seen order: the sort is stable over the
    /// insertion-ordered entries.
    pub fn top(&self, n: usize) -> Vec<(&Address, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<Address> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for address in iter {
            map.record(address);
        }
        map
    }
}

/// Count occurrences of each address in the sequence.
pub fn aggregate<I>(addresses: I) -> FrequencyMap
where
    I: IntoIterator<Item = Address>,
{
    addresses.into_iter().collect()
}
