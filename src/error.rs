//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for building and using a [`Codec`](crate::Codec).
#[derive(Debug, Error)]
pub enum Error {
    /// The text had no symbols left after normalization.
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,

    /// A character being encoded has no entry in the code table.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),

    /// A code token does not end exactly at a leaf of the tree.
    #[error("unrecognized code: {0:?}")]
    UnrecognizedCode(String),

    /// A codec configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An I/O error occurred while reading input lines.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(Error::UnknownSymbol('d').to_string(), "unknown symbol: 'd'");
        assert_eq!(
            Error::UnrecognizedCode("01extra".into()).to_string(),
            "unrecognized code: \"01extra\""
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
