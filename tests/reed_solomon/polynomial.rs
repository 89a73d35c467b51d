//! Polynomial algebra over GF(2^8)
//!
//! Coefficients are stored highest order first throughout.

use rsfec::reed_solomon::polynomial::eval;
use rsfec::{Galois8, Polynomial, RsError};

fn poly(bytes: &[u8]) -> Polynomial {
    Polynomial::from_bytes(bytes)
}

#[test]
fn test_eval_uses_highest_order_first() {
    // p(x) = x^2 + 2x + 3, so p(1) = 1 ^ 2 ^ 3 = 0 and p(0) = 3
    let p = poly(&[1, 2, 3]);
    assert_eq!(p.eval(Galois8::ONE), Galois8::ZERO);
    assert_eq!(p.eval(Galois8::ZERO), Galois8::new(3));
    assert_eq!(p.coefficient(0), Galois8::new(3));
    assert_eq!(p.coefficient(2), Galois8::ONE);
    assert_eq!(p.coefficient(9), Galois8::ZERO);
}

#[test]
fn test_eval_empty_is_zero() {
    assert_eq!(eval(&[], Galois8::new(5)), Galois8::ZERO);
    assert_eq!(Polynomial::default().eval(Galois8::ONE), Galois8::ZERO);
}

#[test]
fn test_add_aligns_constant_terms() {
    let sum = poly(&[1, 0, 0, 4]).add(&poly(&[7, 4]));
    assert_eq!(sum.to_bytes(), vec![1, 0, 7, 0]);
    assert_eq!(poly(&[7, 4]).add(&poly(&[1, 0, 0, 4])), sum);
}

#[test]
fn test_scale_multiplies_every_coefficient() {
    let scaled = poly(&[1, 2, 0]).scale(Galois8::new(2));
    assert_eq!(scaled.to_bytes(), vec![2, 4, 0]);
}

#[test]
fn test_mul_and_single_coefficient_agree() {
    let p = poly(&[3, 0, 9, 0x80]);
    let q = poly(&[0x1d, 5, 1]);
    let product = p.mul(&q);
    assert_eq!(product.len(), p.len() + q.len() - 1);

    for degree in 0..product.len() {
        assert_eq!(p.mul_coeff_at(&q, degree), product.coefficient(degree));
    }
    assert_eq!(p.mul_coeff_at(&q, 40), Galois8::ZERO);
}

#[test]
fn test_div_reconstructs_dividend() {
    let dividend = poly(&[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
    let divisor = poly(&[3, 1, 7]);

    let (quotient, remainder) = dividend.div(&divisor).unwrap();
    assert_eq!(remainder.len(), divisor.len() - 1);
    assert_eq!(quotient.mul(&divisor).add(&remainder), dividend);
}

#[test]
fn test_div_shorter_dividend_is_all_remainder() {
    let (quotient, remainder) = poly(&[4, 5]).div(&poly(&[1, 2, 3])).unwrap();
    assert!(quotient.is_empty());
    assert_eq!(remainder, poly(&[4, 5]));
}

#[test]
fn test_div_by_zero_leading_coefficient() {
    assert_eq!(poly(&[1, 2]).div(&poly(&[0, 1])), Err(RsError::DivisionByZero));
    assert_eq!(poly(&[1, 2]).div(&Polynomial::default()), Err(RsError::DivisionByZero));
}

#[test]
fn test_formal_derivative_keeps_odd_terms() {
    // d/dx (a x^4 + b x^3 + c x^2 + d x + e) = b x^2 + d in characteristic 2
    let p = poly(&[0xa, 0xb, 0xc, 0xd, 0xe]);
    assert_eq!(p.deriv().to_bytes(), vec![0, 0xb, 0, 0xd]);

    assert!(poly(&[7]).deriv().is_empty());
    assert!(Polynomial::default().deriv().is_empty());
}

#[test]
fn test_low_order_is_mod_x_power() {
    let p = poly(&[1, 2, 3, 4]);
    assert_eq!(p.low_order(2).to_bytes(), vec![3, 4]);
    assert_eq!(p.low_order(10), p);

    let mut q = p.clone();
    q.truncate_high(3);
    assert_eq!(q.to_bytes(), vec![2, 3, 4]);
}
