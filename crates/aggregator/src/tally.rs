//! Insertion-ordered counters.
//!
//! A [`Tally`] sums values per key and remembers the order in which keys were
//! first seen, so ranking it with a stable sort breaks ties by first
//! appearance.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Tally {
    /// Position of each key in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, registering the key on first sight
    pub fn add(&mut self, key: &str, amount: u64) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by value, highest first; equal values keep first-seen order
    pub fn into_ranked(self) -> Vec<(String, u64)> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
