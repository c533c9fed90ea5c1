//! Text codec bound to one tree and code table.
//!
//! Encoded output is human-readable: one `'0'`/`'1'` code per input
//! character, separated by the configured separator. No bit packing.

use std::io::{BufRead, Read};

use crate::code_table::CodeTable;
use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::normalize::{normalize, normalize_lines};
use crate::tree::{HuffmanTree, Node};

/// Huffman codec for one corpus.
///
/// Built once and read-only afterwards, so a shared reference can be used
/// from many threads at once.
#[derive(Debug, Clone)]
pub struct Codec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
    separator: char,
}

impl Codec {
    /// Build a codec from raw text with the default configuration.
    pub fn build(text: &str) -> Result<Self> {
        Self::build_with_config(text, &CodecConfig::default())
    }

    /// Build a codec from raw text.
    ///
    /// The text is normalized (see [`normalize`]) before counting. Fails with
    /// [`Error::EmptyInput`] if nothing is left afterwards.
    pub fn build_with_config(text: &str, config: &CodecConfig) -> Result<Self> {
        Self::from_normalized(normalize(text), config)
    }

    /// Build a codec from text that arrives as separate lines.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_normalized(normalize_lines(lines), &CodecConfig::default())
    }

    /// Build a codec from everything `reader` yields, split into lines the
    /// same way as [`normalize`].
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::build(&text)
    }

    fn from_normalized(text: String, config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        let frequencies = FrequencyTable::count(&text);
        let tree = HuffmanTree::build(&frequencies, config.tie_break)?;
        let table = CodeTable::derive(tree.root());
        log::debug!(
            "built codec: {} symbols, weight {}, depth {}, tie-break {:?}",
            table.len(),
            tree.weight(),
            tree.depth(),
            config.tie_break
        );
        Ok(Self {
            frequencies,
            tree,
            table,
            separator: config.separator,
        })
    }

    /// Encode `text` as separated codes.
    ///
    /// The text is lowercased first. Fails with [`Error::UnknownSymbol`] on the
    /// first character that has no code; nothing is returned in that case.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut out = String::new();
        for (i, c) in text.to_lowercase().chars().enumerate() {
            let code = self.table.get(c).ok_or(Error::UnknownSymbol(c))?;
            if i > 0 {
                out.push(self.separator);
            }
            out.push_str(code);
        }
        // A one-leaf table has only empty codes, leaving nothing but separators.
        Ok(out.trim_matches(self.separator).to_string())
    }

    /// Decode separated codes back to text.
    ///
    /// Every token must end exactly at a leaf. Empty tokens produce nothing,
    /// except against a one-leaf tree, where each empty token is that leaf's
    /// symbol. Fails with [`Error::UnrecognizedCode`] naming the first bad token.
    pub fn decode(&self, code: &str) -> Result<String> {
        let mut out = String::new();
        for token in code.split(self.separator) {
            if token.is_empty() && !self.tree.is_degenerate() {
                continue;
            }
            out.push(self.decode_token(token)?);
        }
        Ok(out)
    }

    fn decode_token(&self, token: &str) -> Result<char> {
        let mut node = self.tree.root();
        for bit in token.chars() {
            node = match (node, bit) {
                (Node::Internal { left, .. }, '0') => left,
                (Node::Internal { right, .. }, '1') => right,
                _ => return Err(Error::UnrecognizedCode(token.to_string())),
            };
        }
        node.symbol()
            .ok_or_else(|| Error::UnrecognizedCode(token.to_string()))
    }

    /// The symbol-to-code mapping.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// The decoding tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Root of the decoding tree.
    pub fn root(&self) -> &Node {
        self.tree.root()
    }

    /// Symbol counts of the normalized corpus.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Separator placed between codes.
    pub fn separator(&self) -> char {
        self.separator
    }
}
