// crates/domain/src/model/count_map.rs
use hashbrown::HashMap;

/// Key → count tally that remembers first-insertion order.
///
/// Entries live in a `Vec` so iteration is always in the order keys were first
/// seen; the hash index only speeds up lookups. Rankings and the
/// "first to reach the maximum" rule both depend on this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump `key` by one, inserting it at the end if unseen.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, amount: usize) {
        if let Some(&slot) = self.index.get(key) {
            self.entries[slot].1 += amount;
            return;
        }
        self.index.insert(key.to_owned(), self.entries.len());
        self.entries.push((key.to_owned(), amount));
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Keep only entries satisfying `keep`, preserving relative order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, usize) -> bool,
    {
        self.entries.retain(|(key, count)| keep(key, *count));
        self.reindex();
    }

    /// Earliest entry whose count strictly beats every count before it.
    ///
    /// Entries with a zero count never qualify, and an empty map yields `None`.
    pub fn first_max(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        let mut max = 0;
        for (key, count) in self.iter() {
            if count > max {
                max = count;
                best = Some((key, count));
            }
        }
        best
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (slot, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), slot);
        }
    }
}

impl<'a> FromIterator<&'a str> for CountMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for key in iter {
            map.increment(key);
        }
        map
    }
}
