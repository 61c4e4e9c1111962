//! Frequency tables: an unordered accumulator while scanning, and a ranked
//! view for rendering.

use std::collections::HashMap;

/// Key -> count accumulator.
///
/// Keys are remembered in first-insertion order, which only serves as the
/// tie-break when [`FrequencyTable::ranked`] orders equal counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

/// One row of the ranked view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `key`, inserting it at zero first if needed.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, n: u64) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += n;
        } else {
            self.index.insert(key.to_owned(), self.entries.len());
            self.entries.push((key.to_owned(), n));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Descending by count; equal counts keep insertion order (stable sort).
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut out: Vec<RankedEntry> = self
            .entries
            .iter()
            .map(|(key, count)| RankedEntry {
                key: key.clone(),
                count: *count,
            })
            .collect();
        out.sort_by(|l, r| r.count.cmp(&l.count));
        out
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut t = Self::new();
        for (k, n) in iter {
            t.add(k, n);
        }
        t
    }
}
