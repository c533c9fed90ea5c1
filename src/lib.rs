//! # Huffman Coding for Text
//!
//! *Minimum-redundancy prefix codes derived from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter, `e`, a single dot, while rare letters get
//! long sequences. Huffman coding does the same thing optimally: it looks at how often
//! each symbol occurs in a body of text and hands the shortest codes to the most
//! frequent symbols, under the constraint that no code is the beginning of another.
//!
//! ## The Problem
//!
//! A fixed-width code spends the same number of bits on every symbol. When the
//! distribution is skewed, that wastes space. A variable-width code fixes this, but
//! only if the receiver can tell where one code ends and the next begins. Prefix-free
//! codes make every code self-delimiting.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splits, not always optimal
//! 1952  Huffman     Bottom-up merging: provably optimal prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1993  Deflate     Huffman + LZ77 in zlib, gzip, PNG
//! ```
//!
//! ## Algorithm
//!
//! 1. Count every symbol of the normalized text ([`FrequencyTable`]).
//! 2. Push one leaf per symbol into a min-priority queue keyed by frequency.
//! 3. Pop the two lightest nodes, merge them under a new internal node whose
//!    frequency is their sum, push it back. Repeat until one node remains ([`HuffmanTree`]).
//! 4. Walk the tree: left is `'0'`, right is `'1'`. The path to a leaf is its code ([`CodeTable`]).
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n + k \log k)$ for $n$ input characters and $k$ distinct symbols.
//! - **Encode**: $O(n)$ table lookups.
//! - **Decode**: $O(b)$ tree steps for $b$ code bits.
//!
//! ## Failure Modes
//!
//! 1. **Empty corpus**: no symbols, no tree ([`Error::EmptyInput`]).
//! 2. **Foreign symbols**: encoding text the codec was not built from ([`Error::UnknownSymbol`]).
//! 3. **Corrupt codes**: a token that does not end exactly at a leaf ([`Error::UnrecognizedCode`]).
//! 4. **Single-symbol corpus**: the only code is the empty string, so run lengths
//!    are not recoverable from encoded output.
//!
//! ## Example
//!
//! ```rust
//! use huffcode::Codec;
//!
//! let codec = Codec::build("abracadabra")?;
//! let encoded = codec.encode("Abracadabra")?;
//! assert_eq!(codec.decode(&encoded)?, "abracadabra");
//! assert!(codec.table().is_prefix_free());
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., Thomas, J. A. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code_table;
pub mod codec;
pub mod config;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::Codec;
pub use config::{CodecConfig, TieBreak};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use normalize::{normalize, normalize_lines};
pub use tree::{HuffmanTree, Node};
