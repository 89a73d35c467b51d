//! Step-by-step record of a single decode
//!
//! Every intermediate value of the decode pipeline is kept so a presentation
//! layer can show how a received word was (or was not) corrected. Producing a
//! trace has no side effects; `ReedSolomon::repair` is defined in terms of it.

use super::error::{ConfigError, RsError, RsResult};
use super::galois::Galois8;
use super::polynomial::Polynomial;
use crate::reporters::TraceReporter;
use log::warn;

/// Why a decode stopped without a corrected codeword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceFailure {
    /// Received word length does not fit the codec
    Configuration(ConfigError),
    /// Λ(x) roots missing, repeated, or outside the received word
    InvalidPositions,
    /// Berlekamp-Massey could not build Λ(x)
    Locator(RsError),
    /// Forney could not produce a magnitude
    Magnitude(RsError),
    /// Corrected word still has non-zero syndromes
    VerificationFailed,
}

/// Result of a traced decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Syndromes were all zero, nothing to correct
    Valid,
    /// `errors` symbols were corrected
    Corrected { errors: usize },
    Failed(TraceFailure),
}

/// Intermediate values of one decode
#[derive(Debug, Clone)]
pub struct DecodeTrace {
    pub check_symbols: usize,
    pub received: Vec<u8>,
    pub syndromes: Vec<Galois8>,
    pub locator: Option<Polynomial>,
    pub positions: Option<Vec<usize>>,
    pub error_polynomial: Option<Polynomial>,
    pub corrected: Option<Vec<u8>>,
    /// Syndromes of `corrected`, all zero when the correction holds
    pub verify_syndromes: Option<Vec<Galois8>>,
    pub outcome: TraceOutcome,
}

impl DecodeTrace {
    pub(crate) fn new(check_symbols: usize, received: &[u8]) -> Self {
        Self {
            check_symbols,
            received: received.to_vec(),
            syndromes: Vec::new(),
            locator: None,
            positions: None,
            error_polynomial: None,
            corrected: None,
            verify_syndromes: None,
            outcome: TraceOutcome::Valid,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Failed(_))
    }

    /// Whether correction was attempted (some syndrome was non-zero)
    pub fn had_errors(&self) -> bool {
        self.locator.is_some()
    }

    /// Repaired codeword, check symbols included
    pub fn repaired(&self) -> Option<&[u8]> {
        match self.outcome {
            TraceOutcome::Valid => Some(self.received.as_slice()),
            TraceOutcome::Corrected { .. } => self.corrected.as_deref(),
            TraceOutcome::Failed(_) => None,
        }
    }

    /// Decoded message with the check symbols removed
    pub fn message(&self) -> Option<&[u8]> {
        self.repaired()
            .and_then(|word| word.get(..word.len().checked_sub(self.check_symbols)?))
    }

    /// Collapse into the result `repair` reports
    ///
    /// Internal faults are folded into `Uncorrectable` so callers only ever see
    /// configuration problems or a single decode failure.
    pub fn into_result(self) -> RsResult<Vec<u8>> {
        match self.outcome {
            TraceOutcome::Valid => Ok(self.received),
            TraceOutcome::Corrected { .. } => self.corrected.ok_or(RsError::Uncorrectable),
            TraceOutcome::Failed(TraceFailure::Configuration(err)) => Err(err.into()),
            TraceOutcome::Failed(TraceFailure::Locator(err) | TraceFailure::Magnitude(err)) => {
                warn!("Inconsistent error locator treated as uncorrectable: {}", err);
                Err(RsError::Uncorrectable)
            }
            TraceOutcome::Failed(_) => Err(RsError::Uncorrectable),
        }
    }

    /// Replay each recorded stage into a reporter
    pub fn report(&self, reporter: &dyn TraceReporter) {
        reporter.report_received(&self.received, self.check_symbols);
        if !self.syndromes.is_empty() {
            reporter.report_syndromes(&self.syndromes);
        }
        if let Some(locator) = &self.locator {
            reporter.report_locator(locator);
        }
        if let Some(positions) = &self.positions {
            reporter.report_positions(positions);
        }
        if let Some(errors) = &self.error_polynomial {
            reporter.report_error_polynomial(errors);
        }
        if let (Some(corrected), Some(verify)) = (&self.corrected, &self.verify_syndromes) {
            reporter.report_corrected(corrected, verify);
        }
        reporter.report_outcome(&self.outcome, self.message());
    }
}
