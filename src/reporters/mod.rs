//! Output reporting for codec operations
//!
//! Decoding itself never prints; a [`DecodeTrace`](crate::DecodeTrace) is
//! replayed into a reporter which decides how (or whether) to show each stage.

mod console;
mod silent;

pub use console::{spaced_hex, ConsoleTraceReporter};
pub use silent::SilentTraceReporter;

use crate::reed_solomon::{Galois8, Polynomial, TraceOutcome};

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting each stage of an encode/decode
///
/// Extends the base Reporter trait with codec-specific methods
pub trait TraceReporter: Reporter {
    /// Report a freshly encoded message
    fn report_encoded(&self, message: &[u8], codeword: &[u8]);

    /// Report the word handed to the decoder
    fn report_received(&self, received: &[u8], check_symbols: usize);

    /// Report the syndromes S_1..S_t
    fn report_syndromes(&self, syndromes: &[Galois8]);

    /// Report the error locator Λ(x)
    fn report_locator(&self, locator: &Polynomial);

    /// Report error positions (counted from the last symbol)
    fn report_positions(&self, positions: &[usize]);

    /// Report the error polynomial e(x)
    fn report_error_polynomial(&self, errors: &Polynomial);

    /// Report the corrected word and its re-computed syndromes
    fn report_corrected(&self, corrected: &[u8], verify_syndromes: &[Galois8]);

    /// Report how decoding ended
    fn report_outcome(&self, outcome: &TraceOutcome, message: Option<&[u8]>);
}
