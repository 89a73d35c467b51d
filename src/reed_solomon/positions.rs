//! Error position search
//!
//! Brute force root search over every non-zero field element. A root α^j of
//! Λ(x) is the inverse of an error location X = α^(-j), so the error sits at
//! position (255 - j) mod 255, counted from the constant (rightmost) end of the
//! received word.

use super::galois::{Galois8, GROUP_ORDER};
use super::polynomial::Polynomial;

/// Positions i_k whose locators α^(i_k) are inverse roots of Λ(x)
pub fn error_positions(locator: &Polynomial) -> Vec<usize> {
    (0..GROUP_ORDER)
        .filter(|&power| locator.eval(Galois8::exp(power)).is_zero())
        .map(|power| (GROUP_ORDER - power) % GROUP_ORDER)
        .collect()
}

/// Whether the roots found fully resolve Λ(x) inside a word of `received_len`
///
/// All ν = deg(Λ) roots must have been found (otherwise Λ has roots outside
/// the field or repeated roots) and each position must index into the word.
pub fn error_positions_valid(positions: &[usize], locator: &Polynomial, received_len: usize) -> bool {
    locator.degree() == Some(positions.len()) && positions.iter().all(|&pos| pos < received_len)
}
