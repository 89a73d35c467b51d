//! Error locator synthesis with the Berlekamp-Massey algorithm
//!
//! Λ(x) is viewed as the connection polynomial of the shortest linear feedback
//! shift register generating the syndrome sequence S₁, ..., S_t (Massey,
//! "Shift-register synthesis and BCH decoding", 1969). In the paper's terms:
//!
//! - `locator` is C(D), initially 1
//! - `previous` is b⁻¹·Dˣ·B(D), initially 1
//! - `errors` is L, the current shift register length
//!
//! Both polynomials live in buffers of exactly t+1 coefficients for the whole
//! run. The shift register can never grow past degree t, so multiplying by x
//! is a rotation and every update happens in place.

use super::error::RsResult;
use super::galois::Galois8;
use super::polynomial::Polynomial;
use log::trace;

/// S(x) = S₁ + S₂x + ··· + S_t·x^(t-1) from syndromes in generator root order
pub fn syndrome_polynomial(syndromes: &[Galois8]) -> Polynomial {
    Polynomial::new(syndromes.iter().rev().copied().collect())
}

/// Berlekamp-Massey state over the t syndromes
#[derive(Debug, Clone)]
pub struct ErrorLocator {
    syndromes: Polynomial,
    locator: Polynomial,
    previous: Polynomial,
    errors: usize,
}

impl ErrorLocator {
    pub fn new(syndromes: &[Galois8]) -> Self {
        let capacity = syndromes.len() + 1;
        ErrorLocator {
            syndromes: syndrome_polynomial(syndromes),
            locator: Self::unit(capacity),
            previous: Self::unit(capacity),
            errors: 0,
        }
    }

    /// Constant 1 padded with leading zeros to `capacity` coefficients
    fn unit(capacity: usize) -> Polynomial {
        let mut p = Polynomial::zeroed(capacity);
        if let Some(constant) = p.coefficients_mut().last_mut() {
            *constant = Galois8::ONE;
        }
        p
    }

    /// Run all t iterations and return Λ(x) trimmed to its L+1 coefficients
    pub fn build(mut self) -> RsResult<Polynomial> {
        for i in 0..self.syndromes.len() {
            self.step(i)?;
        }

        let mut locator = self.locator;
        locator.truncate_high(self.errors + 1);
        Ok(locator)
    }

    fn step(&mut self, i: usize) -> RsResult<()> {
        // d = S[N] + Σ C_k·S[N-k]
        let delta = self.locator.mul_coeff_at(&self.syndromes, i);

        // x + 1 → x, common to both update branches
        let previous = self.previous.coefficients_mut();
        debug_assert!(previous.first().map_or(true, Galois8::is_zero));
        previous.rotate_left(1);
        if let Some(constant) = previous.last_mut() {
            *constant = Galois8::ZERO;
        }

        trace!("berlekamp-massey i={} delta={} L={}", i, delta, self.errors);

        if delta.is_zero() {
            return Ok(());
        }

        let locator = self.locator.coefficients_mut();
        if 2 * self.errors > i {
            // C(D) - d·b⁻¹·Dˣ·B(D) → C(D)
            for (c, &b) in locator.iter_mut().zip(previous.iter()) {
                *c -= delta * b;
            }
        } else {
            // Length change: the old C(D) scaled by d⁻¹ becomes the new B term
            let inverse = delta.inverse()?;
            for (c, b) in locator.iter_mut().zip(previous.iter_mut()) {
                let old = *c;
                *c = old - delta * *b;
                *b = old * inverse;
            }
            self.errors = i + 1 - self.errors;
        }
        Ok(())
    }
}

/// Error locator Λ(x) for the given syndromes, with Λ(0) = 1 and degree ν
pub fn error_locator(syndromes: &[Galois8]) -> RsResult<Polynomial> {
    ErrorLocator::new(syndromes).build()
}
