//! Silent reporter
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{Reporter, TraceReporter};
use crate::reed_solomon::{Galois8, Polynomial, TraceOutcome};

/// Silent implementation for codec traces
#[derive(Default)]
pub struct SilentTraceReporter;

impl SilentTraceReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentTraceReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl TraceReporter for SilentTraceReporter {
    fn report_encoded(&self, _message: &[u8], _codeword: &[u8]) {}
    fn report_received(&self, _received: &[u8], _check_symbols: usize) {}
    fn report_syndromes(&self, _syndromes: &[Galois8]) {}
    fn report_locator(&self, _locator: &Polynomial) {}
    fn report_positions(&self, _positions: &[usize]) {}
    fn report_error_polynomial(&self, _errors: &Polynomial) {}
    fn report_corrected(&self, _corrected: &[u8], _verify_syndromes: &[Galois8]) {}
    fn report_outcome(&self, _outcome: &TraceOutcome, _message: Option<&[u8]>) {}
}
