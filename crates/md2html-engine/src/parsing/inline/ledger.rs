use std::collections::HashMap;

/// Per-symbol count of openers that are still waiting for a close.
///
/// Keys are marker symbols and the link opening brackets. A missing key and
/// a zero count mean the same thing.
#[derive(Debug, Default)]
pub struct OpenLedger {
    counts: HashMap<&'static str, usize>,
}

impl OpenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.count(key) > 0
    }

    /// Records one more pending opener.
    pub fn open(&mut self, key: &'static str) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Forces the count for `key`.
    pub fn set(&mut self, key: &'static str, count: usize) {
        self.counts.insert(key, count);
    }

    /// Forgets every pending opener for `key`.
    pub fn clear(&mut self, key: &str) {
        self.counts.remove(key);
    }
}
