//! Value counting with first-occurrence tie breaking

use std::collections::HashMap;
use std::hash::Hash;

/// Counts of distinct values, remembering the order values were first seen
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    index: HashMap<T, usize>,
    entries: Vec<(T, usize)>,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Count one occurrence of `value`
    pub fn add(&mut self, value: T) {
        match self.index.get(&value) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push((value, 1));
            }
        }
    }

    /// Most frequent value; the earliest seen wins a tie
    pub fn mode(&self) -> Option<&T> {
        let mut best: Option<&(T, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|current| entry.1 > current.1) {
                best = Some(entry);
            }
        }
        best.map(|(value, _)| value)
    }

    /// Distinct values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(value, _)| value)
    }

    /// `(value, count)` pairs by descending count, ties in first-seen order
    pub fn sorted_counts(&self) -> Vec<(T, usize)> {
        let mut counts = self.entries.clone();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_of_empty_table() {
        let table: FrequencyTable<&str> = FrequencyTable::new();
        assert_eq!(table.mode(), None);
        assert!(table.sorted_counts().is_empty());
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        let table: FrequencyTable<_> = ["b", "a", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(table.mode(), Some(&"a"));
        assert_eq!(table.sorted_counts(), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let table: FrequencyTable<_> = [7, 3, 3, 7].into_iter().collect();
        assert_eq!(table.mode(), Some(&7));
    }

    #[test]
    fn test_sorted_counts_are_stable() {
        let table: FrequencyTable<_> = ["x", "y", "z", "z", "y"].into_iter().collect();
        assert_eq!(table.sorted_counts(), vec![("y", 2), ("z", 2), ("x", 1)]);
        assert_eq!(table.values().copied().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}
