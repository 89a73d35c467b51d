//! Galois Field GF(2^8) arithmetic
//!
//! Elements are polynomials of degree < 8 over GF(2), stored as a byte with the
//! constant term in the least significant bit, and reduced modulo the primitive
//! polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1). The element 2 (the polynomial z)
//! generates the multiplicative group of order 255.
//!
//! Multiplication, division and powers go through exponential/logarithm tables
//! which are built once per process and never mutated afterwards.

use super::error::{RsError, RsResult};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// GF(2^8) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

/// Number of elements in the field
pub const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group (number of non-zero elements)
pub const GROUP_ORDER: usize = FIELD_SIZE - 1;

/// Exponential and logarithm tables for the generator α = 2
pub struct GaloisTable {
    /// `exp[i] = α^i` for i in 0..255
    pub exp: [u8; GROUP_ORDER],
    /// `log[α^i] = i`; `log[0]` is unused and left at 0
    pub log: [u8; FIELD_SIZE],
}

impl GaloisTable {
    fn new() -> Self {
        let mut table = GaloisTable {
            exp: [0; GROUP_ORDER],
            log: [0; FIELD_SIZE],
        };
        table.build_tables();
        table
    }

    /// Walk the multiplicative group by repeated multiplication by α
    fn build_tables(&mut self) {
        let mut b = 1u16;

        for l in 0..GROUP_ORDER {
            self.exp[l] = b as u8;
            self.log[b as usize] = l as u8;

            b <<= 1;
            if b & FIELD_SIZE as u16 != 0 {
                b ^= PRIMITIVE_POLYNOMIAL;
            }
        }
    }

    /// Process-wide tables, built on first use
    pub fn get() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(GaloisTable::new)
    }
}

/// GF(2^8) element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Galois8 {
    value: u8,
}

// SAFETY: `Galois8` is a transparent wrapper around `u8`; every bit pattern is a
// valid field element and there is no padding.
unsafe impl bytemuck::Zeroable for Galois8 {}
unsafe impl bytemuck::Pod for Galois8 {}

impl Galois8 {
    pub const ZERO: Self = Self::new(0);
    pub const ONE: Self = Self::new(1);
    /// The primitive element α
    pub const GENERATOR: Self = Self::new(2);

    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// α^power, with the exponent reduced modulo the group order
    pub fn exp(power: usize) -> Self {
        Self::new(GaloisTable::get().exp[power % GROUP_ORDER])
    }

    /// Discrete logarithm base α, or `None` for zero
    pub fn log(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(GaloisTable::get().log[self.value as usize] as usize)
        }
    }

    /// Raise to a non-negative power. `0^0` is one, `0^p` is zero otherwise.
    pub fn pow(&self, exponent: usize) -> Self {
        match self.log() {
            None if exponent == 0 => Self::ONE,
            None => Self::ZERO,
            Some(log) => Self::exp((log * exponent) % GROUP_ORDER),
        }
    }

    /// Multiplicative inverse
    pub fn inverse(&self) -> RsResult<Self> {
        Self::ONE.checked_div(*self)
    }

    /// Division that reports a zero divisor instead of panicking
    pub fn checked_div(self, rhs: Self) -> RsResult<Self> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        let log_b = rhs.log().ok_or(RsError::DivisionByZero)?;
        let log_a = GaloisTable::get().log[self.value as usize] as usize;

        // Subtraction in log space, with wraparound
        Ok(Self::exp(log_a + GROUP_ORDER - log_b))
    }
}

/// View a byte slice as field elements without copying
pub fn as_elements(bytes: &[u8]) -> &[Galois8] {
    bytemuck::cast_slice(bytes)
}

/// View field elements as raw bytes without copying
pub fn as_bytes(elements: &[Galois8]) -> &[u8] {
    bytemuck::cast_slice(elements)
}

// Addition (XOR in Galois fields)
impl Add for Galois8 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl AddAssign for Galois8 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Galois8 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl SubAssign for Galois8 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Multiplication using log tables
impl Mul for Galois8 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let table = GaloisTable::get();
        let log_sum = table.log[self.value as usize] as usize + table.log[rhs.value as usize] as usize;
        Self::exp(log_sum)
    }
}

impl MulAssign for Galois8 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Division using log tables
impl Div for Galois8 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Division by zero in Galois field"),
        }
    }
}

impl DivAssign for Galois8 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Conversion traits
impl From<u8> for Galois8 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Galois8> for u8 {
    fn from(val: Galois8) -> Self {
        val.value
    }
}

impl fmt::Display for Galois8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.value)
    }
}

impl fmt::LowerHex for Galois8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}
