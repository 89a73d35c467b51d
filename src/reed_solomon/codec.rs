//! Systematic Reed-Solomon codec over GF(2^8)
//!
//! A codec with `t` check symbols uses the generator
//!
//! g(x) = (x - α¹)(x - α²)···(x - α^t)
//!
//! Messages are treated as polynomial coefficients (first byte highest order)
//! and the check symbols are appended, so the message is a verbatim prefix of
//! the codeword. Error positions are counted from the constant (last) symbol.
//!
//! Up to t errors are detected and up to ⌊t/2⌋ corrected. Erasures with known
//! locations are not handled.

use super::berlekamp_massey;
use super::error::{ConfigError, RsResult, MAX_CODEWORD_LEN};
use super::forney;
use super::galois::{self, Galois8};
use super::polynomial::{self, Polynomial};
use super::positions;
use super::trace::{DecodeTrace, TraceFailure, TraceOutcome};
use crate::config::CodecConfig;
use log::debug;

/// Roots α¹..α^t shared by the generator and syndrome computation
fn generator_roots(check_symbols: usize) -> impl Iterator<Item = Galois8> {
    (1..=check_symbols).map(Galois8::exp)
}

/// g(x) = Π (x - α^i) for i = 1..=t, built up from the constant 1
pub fn generator_polynomial(check_symbols: usize) -> Polynomial {
    generator_roots(check_symbols).fold(Polynomial::one(), |g, root| {
        g.mul(&Polynomial::new(vec![Galois8::ONE, root]))
    })
}

/// Reed-Solomon encoder/decoder for a fixed number of check symbols
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    check_symbols: usize,
    roots: Vec<Galois8>,
    generator: Polynomial,
}

impl ReedSolomon {
    /// Create a codec which appends `check_symbols` symbols to each message
    pub fn new(check_symbols: usize) -> RsResult<Self> {
        CodecConfig::new(check_symbols).validate()?;

        Ok(Self {
            check_symbols,
            roots: generator_roots(check_symbols).collect(),
            generator: generator_polynomial(check_symbols),
        })
    }

    pub fn from_config(config: &CodecConfig) -> RsResult<Self> {
        Self::new(config.check_symbols)
    }

    pub fn check_symbols(&self) -> usize {
        self.check_symbols
    }

    /// Largest message that fits in a single codeword
    pub fn max_message_len(&self) -> usize {
        MAX_CODEWORD_LEN - self.check_symbols
    }

    pub fn generator(&self) -> &Polynomial {
        &self.generator
    }

    pub fn roots(&self) -> &[Galois8] {
        &self.roots
    }

    /// Encode `message`, returning `message ‖ check symbols`
    pub fn encode(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        if message.len() > self.max_message_len() {
            return Err(ConfigError::CodewordTooLong {
                message_len: message.len(),
                check_symbols: self.check_symbols,
            }
            .into());
        }

        // message(x)·x^t
        let mut padded = message.to_vec();
        padded.resize(message.len() + self.check_symbols, 0);
        let shifted = Polynomial::from_bytes(&padded);

        // message(x)·x^t = _(x)·g(x) + r(x), so message(x)·x^t - r(x) is a multiple of g(x)
        let (_, remainder) = shifted.div(&self.generator)?;
        Ok(shifted.sub(&remainder).to_bytes())
    }

    /// S_j = r(α^j) for each generator root
    pub fn syndromes(&self, received: &[u8]) -> Vec<Galois8> {
        let word = galois::as_elements(received);
        self.roots
            .iter()
            .map(|&root| polynomial::eval(word, root))
            .collect()
    }

    /// All syndromes vanish, i.e. `received` is divisible by g(x)
    pub fn is_valid_codeword(&self, received: &[u8]) -> bool {
        self.syndromes(received).iter().all(Galois8::is_zero)
    }

    /// Error locator Λ(x) via Berlekamp-Massey
    pub fn error_locator(&self, syndromes: &[Galois8]) -> RsResult<Polynomial> {
        berlekamp_massey::error_locator(syndromes)
    }

    /// Positions (from the constant end) of the inverse roots of Λ(x)
    pub fn error_positions(&self, locator: &Polynomial) -> Vec<usize> {
        positions::error_positions(locator)
    }

    pub fn error_positions_valid(&self, positions: &[usize], locator: &Polynomial, received: &[u8]) -> bool {
        positions::error_positions_valid(positions, locator, received.len())
    }

    /// Error evaluator Ω(x) used by the Forney algorithm
    pub fn error_evaluator(&self, syndromes: &[Galois8], locator: &Polynomial) -> Polynomial {
        forney::error_evaluator(syndromes, locator)
    }

    /// Error polynomial e(x) with the Forney magnitudes at `positions`
    pub fn error_magnitude_polynomial(
        &self,
        syndromes: &[Galois8],
        locator: &Polynomial,
        positions: &[usize],
        received: &[u8],
    ) -> RsResult<Polynomial> {
        forney::error_magnitude_polynomial(syndromes, locator, positions, received.len())
    }

    /// Drop the trailing check symbols: ⌊s(x) / x^t⌋
    pub fn remove_check_symbols<'a>(&self, codeword: &'a [u8]) -> RsResult<&'a [u8]> {
        let len = codeword
            .len()
            .checked_sub(self.check_symbols)
            .ok_or(ConfigError::ReceivedLength {
                len: codeword.len(),
                check_symbols: self.check_symbols,
            })?;
        Ok(&codeword[..len])
    }

    /// Repair errors in a received word, keeping the check symbols
    ///
    /// A word with all-zero syndromes is returned unchanged. Otherwise the
    /// errors are located and corrected, and the result must pass the codeword
    /// check again; anything else is `Uncorrectable`.
    pub fn repair(&self, received: &[u8]) -> RsResult<Vec<u8>> {
        self.trace(received).into_result()
    }

    /// Repair and strip the check symbols
    pub fn decode(&self, received: &[u8]) -> RsResult<Vec<u8>> {
        let repaired = self.repair(received)?;
        Ok(self.remove_check_symbols(&repaired)?.to_vec())
    }

    fn check_received(&self, received: &[u8]) -> Result<(), ConfigError> {
        if received.len() < self.check_symbols || received.len() > MAX_CODEWORD_LEN {
            return Err(ConfigError::ReceivedLength {
                len: received.len(),
                check_symbols: self.check_symbols,
            });
        }
        Ok(())
    }

    /// Run the full decode pipeline, keeping every intermediate result
    pub fn trace(&self, received: &[u8]) -> DecodeTrace {
        let mut trace = DecodeTrace::new(self.check_symbols, received);

        if let Err(err) = self.check_received(received) {
            trace.outcome = TraceOutcome::Failed(TraceFailure::Configuration(err));
            return trace;
        }

        trace.syndromes = self.syndromes(received);
        if trace.syndromes.iter().all(Galois8::is_zero) {
            trace.outcome = TraceOutcome::Valid;
            return trace;
        }
        debug!("Non-zero syndromes: {:?}", trace.syndromes);

        let locator = match self.error_locator(&trace.syndromes) {
            Ok(locator) => locator,
            Err(err) => {
                trace.outcome = TraceOutcome::Failed(TraceFailure::Locator(err));
                return trace;
            }
        };
        let positions = self.error_positions(&locator);
        debug!(
            "Error locator degree {:?}, {} roots at positions {:?}",
            locator.degree(),
            positions.len(),
            positions
        );

        let valid = self.error_positions_valid(&positions, &locator, received);
        let errors = if valid {
            Some(self.error_magnitude_polynomial(&trace.syndromes, &locator, &positions, received))
        } else {
            None
        };
        trace.locator = Some(locator);
        trace.positions = Some(positions);

        let errors = match errors {
            None => {
                trace.outcome = TraceOutcome::Failed(TraceFailure::InvalidPositions);
                return trace;
            }
            Some(Err(err)) => {
                trace.outcome = TraceOutcome::Failed(TraceFailure::Magnitude(err));
                return trace;
            }
            Some(Ok(errors)) => errors,
        };

        // repaired s(x) = r(x) - e(x)
        let corrected = Polynomial::from_bytes(received).sub(&errors).to_bytes();
        let verify_syndromes = self.syndromes(&corrected);
        let error_count = trace.positions.as_ref().map_or(0, Vec::len);

        trace.outcome = if verify_syndromes.iter().all(Galois8::is_zero) {
            TraceOutcome::Corrected { errors: error_count }
        } else {
            TraceOutcome::Failed(TraceFailure::VerificationFailed)
        };
        trace.error_polynomial = Some(errors);
        trace.corrected = Some(corrected);
        trace.verify_syndromes = Some(verify_syndromes);

        debug!("Decode outcome: {:?}", trace.outcome);
        trace
    }
}
