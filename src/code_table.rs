//! Symbol-to-code mapping derived from a Huffman tree.
//!
//! A depth-first walk records the root-to-leaf path of every leaf, writing
//! `'0'` for a left branch and `'1'` for a right branch. Codes of distinct
//! leaves are prefix-free because no leaf lies on another leaf's path.

use std::collections::BTreeMap;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::Node;

/// Mapping from symbol to its `'0'`/`'1'` code string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Derive the code of every leaf below `root`.
    ///
    /// A root that is itself a leaf gets the empty code.
    pub fn derive(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        Self::build_codes(root, String::new(), &mut codes);
        log::trace!("derived code table: {:?}", codes);
        Self { codes }
    }

    fn build_codes(node: &Node, prefix: String, codes: &mut BTreeMap<char, String>) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&c, code)| (c, code.as_str()))
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In sorted order a code that prefixes others sorts directly before one of them.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Total code bits needed for the symbol counts in `freqs`.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_bits(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{symbol:?}: {code}")?;
        }
        Ok(())
    }
}
