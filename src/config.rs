//! Codec configuration.

use crate::error::{Error, Result};

/// How the tree builder orders nodes of equal frequency.
///
/// Either policy yields an optimal code: the total encoded length is the same,
/// only the shape of the tree (and therefore the individual codes) may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Leaves enter the queue in ascending symbol order and every merged node
    /// takes the next sequence number. Equal frequencies pop oldest first, so
    /// the same text always produces the same tree.
    #[default]
    InsertionOrder,
    /// Frequency is the only key. Ties come out in whatever order the heap
    /// yields them.
    Unordered,
}

/// Configuration for [`Codec`](crate::Codec) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Tie-break policy for the priority merge (default: `InsertionOrder`)
    pub tie_break: TieBreak,
    /// Separator placed between codes in encoded output (default: space)
    pub separator: char,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InsertionOrder,
            separator: ' ',
        }
    }
}

impl CodecConfig {
    /// Create builder for custom configuration
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.separator == '0' || self.separator == '1' {
            return Err(Error::InvalidConfig(format!(
                "separator {:?} collides with a code bit",
                self.separator
            )));
        }
        Ok(())
    }
}

/// Builder for [`CodecConfig`].
#[derive(Debug, Default)]
pub struct CodecConfigBuilder {
    tie_break: Option<TieBreak>,
    separator: Option<char>,
}

impl CodecConfigBuilder {
    /// Set the tie-break policy.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = Some(tie_break);
        self
    }

    /// Set the code separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CodecConfig> {
        let defaults = CodecConfig::default();
        let config = CodecConfig {
            tie_break: self.tie_break.unwrap_or(defaults.tie_break),
            separator: self.separator.unwrap_or(defaults.separator),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.tie_break, TieBreak::InsertionOrder);
        assert_eq!(config.separator, ' ');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CodecConfig::builder()
            .tie_break(TieBreak::Unordered)
            .separator('|')
            .build()
            .unwrap();
        assert_eq!(config.tie_break, TieBreak::Unordered);
        assert_eq!(config.separator, '|');
    }

    #[test]
    fn test_bit_separators_rejected() {
        for sep in ['0', '1'] {
            let err = CodecConfig::builder().separator(sep).build().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
        }
    }
}
