//! Huffman tree construction.
//!
//! Leaves are pushed onto a min-priority queue keyed by frequency. The two
//! lightest nodes are repeatedly popped and merged under a new internal node
//! whose frequency is their sum, until a single root remains.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::config::TieBreak;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// Internal nodes own their two subtrees; there are no parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its occurrence count.
    Leaf {
        /// The coded symbol.
        symbol: char,
        /// Occurrences of `symbol`.
        freq: u64,
    },
    /// Two subtrees and their combined frequency.
    Internal {
        /// Subtree reached by a `'0'` bit.
        left: Box<Node>,
        /// Subtree reached by a `'1'` bit.
        right: Box<Node>,
        /// Sum of both children's frequencies.
        freq: u64,
    },
}

impl Node {
    /// Frequency of this node (summed for internal nodes).
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The symbol held by a leaf.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path in this subtree.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }
}

/// Queue entry: a node plus its secondary ordering key.
#[derive(Debug)]
struct Queued {
    seq: u64,
    node: Node,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lowest frequency, then lowest sequence, pops first.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete Huffman tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build a tree over the symbols of `freqs`.
    ///
    /// Returns [`Error::EmptyInput`] when `freqs` has no symbols. A table with
    /// one symbol yields a tree whose root is that symbol's leaf.
    pub fn build(freqs: &FrequencyTable, tie_break: TieBreak) -> Result<Self> {
        if freqs.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut next_seq = 0u64;
        let mut stamp = || {
            let seq = match tie_break {
                TieBreak::InsertionOrder => next_seq,
                TieBreak::Unordered => 0,
            };
            next_seq += 1;
            seq
        };

        let mut pq = BinaryHeap::with_capacity(freqs.len());
        for (symbol, freq) in freqs.iter() {
            pq.push(Queued {
                seq: stamp(),
                node: Node::Leaf { symbol, freq },
            });
        }

        loop {
            let Some(left) = pq.pop() else {
                return Err(Error::EmptyInput);
            };
            let Some(right) = pq.pop() else {
                return Ok(Self { root: left.node });
            };
            let node = Node::merge(left.node, right.node);
            log::trace!(
                "merged {} + {} -> {}",
                node.children().map_or(0, |(l, _)| l.freq()),
                node.children().map_or(0, |(_, r)| r.freq()),
                node.freq()
            );
            pq.push(Queued { seq: stamp(), node });
        }
    }

    /// Count `text` as given and build its tree with the default tie-break policy.
    ///
    /// No normalization is applied: case, surrounding whitespace and line
    /// breaks are all counted. Use [`normalize`](crate::normalize()) first, or
    /// [`Codec::build`](crate::Codec::build), to get the normalized corpus.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(&FrequencyTable::count(text), TieBreak::default())
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total frequency, equal to the number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Longest code length.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True when the root is itself a leaf (one distinct symbol).
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf { symbol, freq } => {
                writeln!(f, "{indent}{label} leaf {symbol:?} [freq: {freq}]")
            }
            Node::Internal { left, right, freq } => {
                writeln!(f, "{indent}{label} internal [freq: {freq}]")?;
                Self::fmt_node(f, left, depth + 1, "L")?;
                Self::fmt_node(f, right, depth + 1, "R")
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(f, &self.root, 0, "root")
    }
}
