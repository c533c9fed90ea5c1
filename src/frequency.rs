//! Per-symbol occurrence counts.

use std::collections::BTreeMap;

/// Mapping from symbol to its number of occurrences.
///
/// Every stored count is positive. Iteration is in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every character of `text` in one pass.
    pub fn count(text: &str) -> Self {
        text.chars().collect()
    }

    /// Occurrences of `symbol`, if it appeared at all.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for c in iter {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_abracadabra() {
        let freqs = FrequencyTable::count("abracadabra");
        assert_eq!(freqs.len(), 5);
        assert_eq!(freqs.get('a'), Some(5));
        assert_eq!(freqs.get('b'), Some(2));
        assert_eq!(freqs.get('r'), Some(2));
        assert_eq!(freqs.get('c'), Some(1));
        assert_eq!(freqs.get('d'), Some(1));
        assert_eq!(freqs.get('z'), None);
        assert_eq!(freqs.total(), 11);
    }

    #[test]
    fn test_iter_sorted_by_symbol() {
        let freqs = FrequencyTable::count("cab");
        let symbols: Vec<char> = freqs.iter().map(|(c, _)| c).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_empty() {
        let freqs = FrequencyTable::count("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
    }

    #[test]
    fn test_from_iter_matches_count() {
        let text = "mississippi";
        assert_eq!(text.chars().collect::<FrequencyTable>(), FrequencyTable::count(text));
    }
}
