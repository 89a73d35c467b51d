//! Reed-Solomon Error Correction Module
//!
//! Systematic Reed-Solomon codes over GF(2^8) with the primitive polynomial
//! 0x11D. Decoding works from syndromes only:
//!
//! 1. Syndromes S_j = r(α^j) for the t generator roots ([`codec`])
//! 2. Error locator Λ(x) by Berlekamp-Massey ([`berlekamp_massey`])
//! 3. Error positions from the roots of Λ(x) ([`positions`])
//! 4. Error magnitudes by the Forney algorithm ([`forney`])
//!
//! Each stage is exposed on [`ReedSolomon`] so it can be inspected on its own,
//! and [`DecodeTrace`] captures all of them for one received word.

pub mod berlekamp_massey;
pub mod codec;
pub mod error;
pub mod forney;
pub mod galois;
pub mod polynomial;
pub mod positions;
pub mod trace;

pub use codec::{generator_polynomial, ReedSolomon};
pub use error::{ConfigError, RsError, RsResult, MAX_CODEWORD_LEN};
pub use galois::{Galois8, GaloisTable};
pub use polynomial::Polynomial;
pub use trace::{DecodeTrace, TraceFailure, TraceOutcome};
