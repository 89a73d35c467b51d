//! Polynomials over GF(2^8)
//!
//! Coefficients are stored most-significant first, so `[03, 04, 05]` is
//! 03x² + 04x + 05 and the constant term is the last element. Length encodes
//! degree + 1; nothing is trimmed implicitly, so leading zero coefficients are
//! preserved until a caller trims them.

use super::error::{RsError, RsResult};
use super::galois::{self, Galois8};
use std::fmt;

/// Horner evaluation of a most-significant-first coefficient slice
pub fn eval(coefficients: &[Galois8], x: Galois8) -> Galois8 {
    coefficients
        .iter()
        .fold(Galois8::ZERO, |acc, &c| acc * x + c)
}

/// Polynomial with GF(2^8) coefficients
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    coefficients: Vec<Galois8>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<Galois8>) -> Self {
        Self { coefficients }
    }

    /// All-zero polynomial with `len` coefficients
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![Galois8::ZERO; len])
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self::new(vec![Galois8::ONE])
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(galois::as_elements(bytes).to_vec())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        galois::as_bytes(&self.coefficients).to_vec()
    }

    pub fn coefficients(&self) -> &[Galois8] {
        &self.coefficients
    }

    pub fn coefficients_mut(&mut self) -> &mut [Galois8] {
        &mut self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<Galois8> {
        self.coefficients
    }

    /// Number of stored coefficients (degree + 1, counting leading zeros)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree implied by the stored length, `None` for the empty polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Coefficient of x^degree, zero beyond the stored length
    pub fn coefficient(&self, degree: usize) -> Galois8 {
        if degree < self.len() {
            self.coefficients[self.len() - 1 - degree]
        } else {
            Galois8::ZERO
        }
    }

    pub fn eval(&self, x: Galois8) -> Galois8 {
        eval(&self.coefficients, x)
    }

    /// Multiply every coefficient by a field element
    pub fn scale(&self, x: Galois8) -> Self {
        Self::new(self.coefficients.iter().map(|&c| c * x).collect())
    }

    /// Sum aligned at the constant term; the result has the longer length
    pub fn add(&self, other: &Polynomial) -> Self {
        let len = self.len().max(other.len());
        let mut result = Self::zeroed(len);
        result.coefficients[len - self.len()..].copy_from_slice(&self.coefficients);

        let offset = len - other.len();
        for (r, &c) in result.coefficients[offset..].iter_mut().zip(&other.coefficients) {
            *r += c;
        }
        result
    }

    /// Same as addition in characteristic 2
    pub fn sub(&self, other: &Polynomial) -> Self {
        self.add(other)
    }

    /// Full product with `len(p) + len(q) - 1` coefficients
    pub fn mul(&self, other: &Polynomial) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }

        let mut result = Self::zeroed(self.len() + other.len() - 1);
        for (j, &q) in other.coefficients.iter().enumerate() {
            for (i, &p) in self.coefficients.iter().enumerate() {
                result.coefficients[i + j] += p * q;
            }
        }
        result
    }

    /// Coefficient of x^degree in `self * other`, without forming the product
    pub fn mul_coeff_at(&self, other: &Polynomial, degree: usize) -> Galois8 {
        (0..self.len().min(degree + 1))
            .filter(|&i| degree - i < other.len())
            .fold(Galois8::ZERO, |acc, i| {
                acc + self.coefficient(i) * other.coefficient(degree - i)
            })
    }

    /// Synthetic division returning `(quotient, remainder)`
    ///
    /// `self = quotient * divisor + remainder`, with the remainder holding
    /// `len(divisor) - 1` coefficients (or all of `self` when it is shorter than
    /// the divisor).
    pub fn div(&self, divisor: &Polynomial) -> RsResult<(Polynomial, Polynomial)> {
        let lead = match divisor.coefficients.first() {
            Some(lead) if !lead.is_zero() => *lead,
            _ => return Err(RsError::DivisionByZero),
        };

        let quotient_len = (self.len() + 1).saturating_sub(divisor.len());
        let mut out = self.coefficients.clone();

        for i in 0..quotient_len {
            let coef = out[i].checked_div(lead)?;
            out[i] = coef;
            if coef.is_zero() {
                continue;
            }
            for (j, &d) in divisor.coefficients.iter().enumerate().skip(1) {
                out[i + j] -= d * coef;
            }
        }

        let remainder = out.split_off(quotient_len);
        Ok((Self::new(out), Self::new(remainder)))
    }

    /// Formal derivative
    ///
    /// In characteristic 2 the factor `k` in `k·p_k·x^(k-1)` is `k mod 2`, so
    /// only the odd-degree terms survive, each moving down one degree.
    pub fn deriv(&self) -> Self {
        let len = self.len().saturating_sub(1);
        let mut result = Self::zeroed(len);
        for i in (0..len).rev().step_by(2) {
            result.coefficients[i] = self.coefficients[i];
        }
        result
    }

    /// Keep only the `len` lowest-order coefficients
    pub fn truncate_high(&mut self, len: usize) {
        if len < self.len() {
            self.coefficients.drain(..self.len() - len);
        }
    }

    /// `self mod x^len`
    pub fn low_order(&self, len: usize) -> Self {
        let start = self.len().saturating_sub(len);
        Self::new(self.coefficients[start..].to_vec())
    }
}

impl From<Vec<Galois8>> for Polynomial {
    fn from(coefficients: Vec<Galois8>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[u8]> for Polynomial {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
