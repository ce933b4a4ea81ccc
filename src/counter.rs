use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountItem {
    pub name: String,
    pub count: usize,
}

/// Key -> count tally that remembers the order in which keys were first seen.
///
/// Rankings drawn from it sort by count descending and break ties by that
/// first-seen order, so they are reproducible for a given input sequence.
#[derive(Debug, Clone, Default)]
pub struct OrderedCounter {
    index: AHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, n: usize) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), n));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&slot| self.entries[slot].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// All entries ordered by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<CountItem> {
        let mut items: Vec<CountItem> = self
            .entries
            .iter()
            .map(|(name, count)| CountItem { name: name.clone(), count: *count })
            .collect();
        // sort_by is stable
        items.sort_by(|a, b| b.count.cmp(&a.count));
        items
    }

    pub fn top(&self, k: usize) -> Vec<CountItem> {
        let mut items = self.ranked();
        items.truncate(k);
        items
    }

    /// Highest-count key, earliest-seen on ties.
    pub fn leader(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (k, c) in self.iter() {
            match best {
                Some((_, bc)) if c <= bc => {}
                _ => best = Some((k, c)),
            }
        }
        best
    }
}

impl<'a> FromIterator<&'a str> for OrderedCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = OrderedCounter::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
