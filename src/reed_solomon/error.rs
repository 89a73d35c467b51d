//! Error types for Reed-Solomon operations

use thiserror::Error;

/// Largest codeword length representable over GF(2^8)
pub const MAX_CODEWORD_LEN: usize = 255;

/// Caller-side configuration mistakes, detected before any arithmetic runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Number of check symbols must be in 1..=255
    #[error("check symbol count {check_symbols} out of range (expected 1..={max})", max = MAX_CODEWORD_LEN)]
    CheckSymbolsOutOfRange { check_symbols: usize },

    /// Message plus check symbols exceeds the field order
    #[error(
        "message of {message_len} bytes with {check_symbols} check symbols exceeds {max} symbols",
        max = MAX_CODEWORD_LEN
    )]
    CodewordTooLong {
        message_len: usize,
        check_symbols: usize,
    },

    /// Received word cannot be a codeword for this configuration
    #[error("received word of {len} bytes is invalid for {check_symbols} check symbols")]
    ReceivedLength { len: usize, check_symbols: usize },
}

/// Errors that can occur while encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The received word has more errors than can be located and corrected
    #[error("could not decode message")]
    Uncorrectable,

    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    /// Formal derivative of the error locator vanished at an error location
    #[error("error magnitude undefined at position {position}")]
    MagnitudeUndefined { position: usize },
}

impl RsError {
    /// Whether this error stems from how the codec was called rather than the data
    pub fn is_configuration(&self) -> bool {
        matches!(self, RsError::Configuration(_))
    }
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
