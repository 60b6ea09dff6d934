//! Exact rational numbers backed by 64-bit integers.
//!
//! A [`Rational`] is always stored in lowest terms with a positive denominator. Arithmetic is
//! computed in 128-bit intermediates and narrowed back, so a result that does not fit in 64 bits
//! is reported as [`RationalError::Overflow`] instead of wrapping.
//!
//! ```
//! use symbra_rational::Rational;
//!
//! let a: Rational = "4/6".parse().unwrap();
//! assert_eq!(a.to_string(), "2/3");
//! assert_eq!(Rational::from(12) + a, Rational::new(38, 3).unwrap());
//! ```

mod error;
mod fmt;
mod parse;
mod pow;

pub use error::RationalError;

use num_integer::Integer;
use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// An exact fraction `numerator / denominator` in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The rational `0`.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };

    /// The rational `1`.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// Creates a new rational in lowest terms. Fails if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::from_wide(numerator.into(), denominator.into())
    }

    /// Canonicalizes a wide fraction and narrows it to 64 bits.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }

        let gcd = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / gcd, denominator / gcd);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Ok(Self {
            numerator: i64::try_from(numerator).map_err(|_| RationalError::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| RationalError::Overflow)?,
        })
    }

    /// Returns the numerator. Carries the sign of the rational.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Approximates this rational as a float.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Adds or subtracts `rhs`, reducing by the gcd of the denominators first.
    fn add_signed(self, rhs: Self, subtract: bool) -> Result<Self, RationalError> {
        let gcd = self.denominator.gcd(&rhs.denominator);
        let lhs_scale = i128::from(rhs.denominator / gcd);
        let rhs_scale = i128::from(self.denominator / gcd);

        let lhs = i128::from(self.numerator) * lhs_scale;
        let rhs_numerator = i128::from(rhs.numerator) * rhs_scale;
        let numerator = if subtract {
            lhs.checked_sub(rhs_numerator)
        } else {
            lhs.checked_add(rhs_numerator)
        }.ok_or(RationalError::Overflow)?;

        Self::from_wide(numerator, i128::from(self.denominator) * lhs_scale)
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, RationalError> {
        self.add_signed(rhs, false)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, RationalError> {
        self.add_signed(rhs, true)
    }

    /// Multiplies by `rhs`, cross-reducing each numerator against the other denominator so that
    /// the intermediate product stays as small as possible.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, RationalError> {
        let gcd_a = self.numerator.gcd(&rhs.denominator);
        let gcd_b = rhs.numerator.gcd(&self.denominator);

        Self::from_wide(
            i128::from(self.numerator / gcd_a) * i128::from(rhs.numerator / gcd_b),
            i128::from(self.denominator / gcd_b) * i128::from(rhs.denominator / gcd_a),
        )
    }

    /// Divides by `rhs`. Fails with [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
        self.checked_mul(rhs.inverse()?)
    }

    pub fn checked_neg(self) -> Result<Self, RationalError> {
        Ok(Self {
            numerator: self.numerator.checked_neg().ok_or(RationalError::Overflow)?,
            denominator: self.denominator,
        })
    }

    /// Returns `1 / self`. Fails if `self` is zero.
    pub fn inverse(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::from_wide(self.denominator.into(), self.numerator.into())
    }

    /// Adds one to this rational in place.
    pub fn increment(&mut self) -> Result<(), RationalError> {
        *self = self.checked_add(Self::ONE)?;
        Ok(())
    }

    /// Subtracts one from this rational in place.
    pub fn decrement(&mut self) -> Result<(), RationalError> {
        *self = self.checked_sub(Self::ONE)?;
        Ok(())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Implements an arithmetic operator and its assigning form in terms of a checked method. Like
/// primitive integer arithmetic, the operators panic where the checked method fails.
macro_rules! checked_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("rational {}: {}", stringify!($method), err),
                }
            }
        }

        impl $assign_trait for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

checked_op!(Add, add, AddAssign, add_assign, checked_add);
checked_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
checked_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
checked_op!(Div, div, DivAssign, div_assign, checked_div);

impl Neg for Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if the numerator is [`i64::MIN`].
    fn neg(self) -> Rational {
        match self.checked_neg() {
            Ok(value) => value,
            Err(err) => panic!("rational neg: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_relative_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn canonical_form() {
        assert_eq!(r(4, 6), r(2, 3));
        assert_eq!(r(4, -6).numerator(), -2);
        assert_eq!(r(4, -6).denominator(), 3);
        assert_eq!(r(-4, -6), r(2, 3));
        assert_eq!(r(0, -7), Rational::ZERO);
        assert_eq!(r(0, -7).denominator(), 1);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn arithmetic() {
        let a = Rational::from(12);
        let b = r(4, 6);
        assert_eq!(a + b, r(38, 3));
        assert_eq!(a - b, r(34, 3));
        assert_eq!(a * b, Rational::from(8));
        assert_eq!(a / b, Rational::from(18));
        assert_eq!(-b, r(-2, 3));
    }

    #[test]
    fn assign_ops() {
        let mut a = r(1, 2);
        a += r(1, 3);
        assert_eq!(a, r(5, 6));
        a -= r(1, 6);
        assert_eq!(a, r(2, 3));
        a *= r(3, 4);
        assert_eq!(a, r(1, 2));
        a /= r(1, 4);
        assert_eq!(a, Rational::from(2));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Rational::ONE.checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));
        assert_eq!(Rational::ZERO.inverse(), Err(RationalError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn inverse() {
        assert_eq!(r(-2, 3).inverse(), Ok(r(-3, 2)));
        assert_eq!(Rational::from(5).inverse(), Ok(r(1, 5)));
    }

    #[test]
    fn cross_reduction_avoids_overflow() {
        let big = r(i64::MAX, 3);
        assert_eq!(big.checked_mul(r(3, i64::MAX)), Ok(Rational::ONE));
        assert_eq!(r(1, i64::MAX).checked_add(r(1, i64::MAX)), Ok(r(2, i64::MAX)));
    }

    #[test]
    fn overflow_is_detected() {
        let big = Rational::from(i64::MAX);
        assert_eq!(big.checked_add(Rational::ONE), Err(RationalError::Overflow));
        assert_eq!(big.checked_mul(Rational::from(2)), Err(RationalError::Overflow));
        assert_eq!(Rational::from(i64::MIN).checked_neg(), Err(RationalError::Overflow));
        assert_eq!(Rational::from(i64::MIN).inverse(), Err(RationalError::Overflow));
    }

    #[test]
    fn ordering() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(Rational::from(i64::MAX) > r(i64::MAX - 1, 1));
        let mut values = vec![r(3, 4), r(-5, 2), Rational::ZERO, r(2, 3)];
        values.sort();
        assert_eq!(values, vec![r(-5, 2), Rational::ZERO, r(2, 3), r(3, 4)]);
    }

    #[test]
    fn increment_decrement() {
        let mut a = r(1, 2);
        a.increment().unwrap();
        assert_eq!(a, r(3, 2));
        a.decrement().unwrap();
        a.decrement().unwrap();
        assert_eq!(a, r(-1, 2));

        let mut max = Rational::from(i64::MAX);
        assert_eq!(max.increment(), Err(RationalError::Overflow));
        assert_eq!(max, Rational::from(i64::MAX));
    }

    #[test]
    fn predicates() {
        assert!(Rational::ZERO.is_zero());
        assert!(Rational::ONE.is_one());
        assert!(Rational::from(-4).is_integer());
        assert!(!r(1, 2).is_integer());
        assert!(r(-1, 2).is_negative());
        assert!(!Rational::ZERO.is_positive());
    }

    #[test]
    fn float_approximation() {
        assert_float_relative_eq!(r(1, 4).to_f64(), 0.25);
        assert_float_relative_eq!(r(-22, 7).to_f64(), -3.142857142857143);
    }
}
