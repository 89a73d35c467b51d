//! Configuration for codec construction

use crate::reed_solomon::{ConfigError, MAX_CODEWORD_LEN};

/// Check symbol count used when none is given
pub const DEFAULT_CHECK_SYMBOLS: usize = 5;

/// Configuration for a Reed-Solomon codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Number of check symbols t appended to every message
    pub check_symbols: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            check_symbols: DEFAULT_CHECK_SYMBOLS,
        }
    }
}

impl CodecConfig {
    pub fn new(check_symbols: usize) -> Self {
        Self { check_symbols }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let check_symbols = matches
            .get_one::<usize>("check-symbols")
            .copied()
            .unwrap_or(DEFAULT_CHECK_SYMBOLS);

        Self::new(check_symbols)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_CODEWORD_LEN).contains(&self.check_symbols) {
            Ok(())
        } else {
            Err(ConfigError::CheckSymbolsOutOfRange {
                check_symbols: self.check_symbols,
            })
        }
    }

    /// Largest message length k with k + t ≤ 255
    pub fn max_message_len(&self) -> usize {
        MAX_CODEWORD_LEN.saturating_sub(self.check_symbols)
    }

    /// Errors guaranteed to be correctable: ⌊t/2⌋
    pub fn correction_capacity(&self) -> usize {
        self.check_symbols / 2
    }
}
