use super::{Rational, RationalError};

/// Returns the exact integer `degree`-th root of `value`, if there is one.
///
/// Candidate roots are found by binary search, so the cost is logarithmic in `value`.
fn unsigned_root(value: u64, degree: u64) -> Option<u64> {
    if value < 2 || degree == 1 {
        return Some(value);
    }
    // 2^64 already exceeds any u64, so no root of `value >= 2` exists past this degree
    let degree = u32::try_from(degree).ok().filter(|&d| d < 64)?;

    let (mut low, mut high) = (1u64, value);
    while low <= high {
        let mid = low + (high - low) / 2;
        match mid.checked_pow(degree) {
            Some(power) if power == value => return Some(mid),
            Some(power) if power < value => low = mid + 1,
            _ => high = mid - 1,
        }
    }

    None
}

/// Returns the exact integer `degree`-th root of a signed value. Even roots of negative numbers
/// do not exist.
fn integer_root(value: i64, degree: u64) -> Option<i64> {
    if value < 0 {
        if degree % 2 == 0 {
            return None;
        }
        let root = unsigned_root(value.unsigned_abs(), degree)?;
        i64::try_from(root).ok().map(|root| -root)
    } else {
        unsigned_root(value.unsigned_abs(), degree).and_then(|root| i64::try_from(root).ok())
    }
}

impl Rational {
    /// Raises this rational to an integer power. Negative exponents invert the base first.
    fn powi(self, exponent: i64) -> Result<Self, RationalError> {
        let base = if exponent < 0 { self.inverse()? } else { self };
        let magnitude = exponent.unsigned_abs();

        // `1` and `-1` stay bounded for any exponent
        if base.denominator == 1 && base.numerator.unsigned_abs() == 1 {
            let odd = magnitude % 2 == 1;
            return Ok(if base.numerator < 0 && odd { base } else { Rational::ONE });
        }

        let magnitude = u32::try_from(magnitude).map_err(|_| RationalError::Overflow)?;
        let numerator = base.numerator.checked_pow(magnitude).ok_or(RationalError::Overflow)?;
        let denominator = base.denominator.checked_pow(magnitude).ok_or(RationalError::Overflow)?;
        Rational::new(numerator, denominator)
    }

    /// Takes the exact `degree`-th root of both numerator and denominator.
    fn root(self, degree: u64) -> Option<Self> {
        let numerator = integer_root(self.numerator, degree)?;
        let denominator = integer_root(self.denominator, degree)?;
        Rational::new(numerator, denominator).ok()
    }

    /// Returns true if [`Rational::pow`] can produce an exact rational for this base and
    /// exponent, ignoring overflow.
    ///
    /// `0^0` and zero raised to a negative power are not representable.
    pub fn can_yield_rational_power_result(&self, exponent: &Rational) -> bool {
        if self.is_zero() {
            return exponent.is_positive();
        }
        if exponent.is_integer() {
            return true;
        }

        self.root(exponent.denominator.unsigned_abs()).is_some()
    }

    /// Raises this rational to a rational power.
    ///
    /// Integer exponents always produce an exact result. A fractional exponent `p/q` requires
    /// both the numerator and denominator of the base to be perfect `q`-th powers, in which case
    /// the result is `(root)^p`.
    ///
    /// ```
    /// use symbra_rational::{Rational, RationalError};
    ///
    /// let half: Rational = "1/2".parse().unwrap();
    /// assert_eq!(Rational::from(4).pow(&half), Ok(Rational::from(2)));
    /// assert_eq!(Rational::from(2).pow(&half), Err(RationalError::IrrationalResult));
    /// ```
    pub fn pow(&self, exponent: &Rational) -> Result<Rational, RationalError> {
        if self.is_zero() {
            return if exponent.is_positive() {
                Ok(Rational::ZERO)
            } else {
                Err(RationalError::ZeroToNonPositivePower)
            };
        }

        let base = if exponent.is_integer() {
            *self
        } else {
            self.root(exponent.denominator.unsigned_abs())
                .ok_or(RationalError::IrrationalResult)?
        };
        base.powi(exponent.numerator)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn integer_roots() {
        assert_eq!(unsigned_root(27, 3), Some(3));
        assert_eq!(unsigned_root(26, 3), None);
        assert_eq!(unsigned_root(1 << 62, 2), Some(1 << 31));
        assert_eq!(unsigned_root(u64::MAX, 2), None);
        assert_eq!(unsigned_root(1, 1000), Some(1));
        assert_eq!(integer_root(-8, 3), Some(-2));
        assert_eq!(integer_root(-4, 2), None);
    }

    #[test]
    fn integer_exponent() {
        assert_eq!(r(2, 3).pow(&Rational::from(3)), Ok(r(8, 27)));
        assert_eq!(r(2, 3).pow(&Rational::from(-2)), Ok(r(9, 4)));
        assert_eq!(r(-2, 1).pow(&Rational::from(-3)), Ok(r(-1, 8)));
        assert_eq!(r(5, 7).pow(&Rational::ZERO), Ok(Rational::ONE));
        assert_eq!(Rational::from(-1).pow(&Rational::from(i64::MAX)), Ok(Rational::from(-1)));
    }

    #[test]
    fn fractional_exponent() {
        assert_eq!(Rational::from(4).pow(&r(1, 2)), Ok(Rational::from(2)));
        assert_eq!(r(4, 9).pow(&r(3, 2)), Ok(r(8, 27)));
        assert_eq!(r(27, 8).pow(&r(-2, 3)), Ok(r(4, 9)));
        assert_eq!(Rational::from(-27).pow(&r(1, 3)), Ok(Rational::from(-3)));
        assert_eq!(Rational::from(-4).pow(&r(1, 2)), Err(RationalError::IrrationalResult));
        assert_eq!(Rational::from(2).pow(&r(1, 2)), Err(RationalError::IrrationalResult));
        assert_eq!(r(4, 3).pow(&r(1, 2)), Err(RationalError::IrrationalResult));
    }

    #[test]
    fn zero_base() {
        assert_eq!(Rational::ZERO.pow(&r(1, 2)), Ok(Rational::ZERO));
        assert_eq!(Rational::ZERO.pow(&Rational::ZERO), Err(RationalError::ZeroToNonPositivePower));
        assert_eq!(Rational::ZERO.pow(&Rational::from(-1)), Err(RationalError::ZeroToNonPositivePower));
    }

    #[test]
    fn overflowing_power() {
        assert_eq!(Rational::from(10).pow(&Rational::from(19)), Err(RationalError::Overflow));
        assert_eq!(Rational::from(2).pow(&Rational::from(i64::MAX)), Err(RationalError::Overflow));
    }

    #[test]
    fn predicate_matches_pow() {
        let bases = [r(4, 9), r(2, 1), r(-8, 27), r(-4, 1), Rational::ZERO, r(1, 16)];
        let exponents = [r(1, 2), r(1, 3), r(-3, 2), r(1, 4), Rational::ZERO, Rational::from(-2), Rational::from(3)];
        for base in bases {
            for exponent in exponents {
                let predicted = base.can_yield_rational_power_result(&exponent);
                assert_eq!(predicted, base.pow(&exponent).is_ok(), "{base} ^ {exponent}");
            }
        }
    }
}
