//! Error magnitudes with the Forney algorithm
//!
//! With error locations X_k = α^(i_k), the syndromes satisfy
//! S_j = Σ e_k·X_k^j. Forney gives the closed form
//!
//! e_k = -Ω(X_k⁻¹) / Λ'(X_k⁻¹), where Ω(x) = S(x)Λ(x) mod x^t
//!
//! and the negation disappears in characteristic 2. Because the generator
//! roots start at α¹, no extra X_k^(1-c) factor is needed.

use super::berlekamp_massey::syndrome_polynomial;
use super::error::{RsError, RsResult};
use super::galois::Galois8;
use super::polynomial::Polynomial;

/// Error evaluator Ω(x) = S(x)Λ(x) mod x^t
pub fn error_evaluator(syndromes: &[Galois8], locator: &Polynomial) -> Polynomial {
    syndrome_polynomial(syndromes)
        .mul(locator)
        .low_order(syndromes.len())
}

/// Error polynomial e(x) spanning the whole received word
///
/// Zero everywhere except at `positions`, where it holds the Forney magnitude.
/// Positions must already have passed the validity check against Λ(x).
pub fn error_magnitude_polynomial(
    syndromes: &[Galois8],
    locator: &Polynomial,
    positions: &[usize],
    received_len: usize,
) -> RsResult<Polynomial> {
    let evaluator = error_evaluator(syndromes, locator);
    let derivative = locator.deriv();

    let mut errors = Polynomial::zeroed(received_len);
    for &position in positions {
        if position >= received_len {
            return Err(RsError::Uncorrectable);
        }

        // 1/X_k = 1/α^(i_k)
        let x_inv = Galois8::exp(position).inverse()?;
        let denominator = derivative.eval(x_inv);
        if denominator.is_zero() {
            return Err(RsError::MagnitudeUndefined { position });
        }
        let magnitude = evaluator.eval(x_inv).checked_div(denominator)?;

        errors.coefficients_mut()[received_len - 1 - position] = magnitude;
    }

    Ok(errors)
}
