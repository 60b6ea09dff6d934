use std::fmt::{self, Display, Formatter, Write};
use super::Rational;

impl Display for Rational {
    /// Formats the rational as `n` if it is an integer, or `n/d` otherwise.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<Rational> for String {
    fn from(value: Rational) -> Self {
        value.to_string()
    }
}

impl Rational {
    /// Formats the rational as a decimal number with at most `max_fraction_digits` digits after
    /// the decimal point. Terminating fractions are exact; others are truncated toward zero.
    ///
    /// ```
    /// use symbra_rational::Rational;
    ///
    /// assert_eq!(Rational::new(-1, 8).unwrap().to_decimal_string(10), "-0.125");
    /// assert_eq!(Rational::new(2, 3).unwrap().to_decimal_string(4), "0.6666");
    /// ```
    pub fn to_decimal_string(&self, max_fraction_digits: usize) -> String {
        let numerator = i128::from(self.numerator).abs();
        let denominator = i128::from(self.denominator);

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        // writing to a `String` cannot fail
        let _ = write!(out, "{}", numerator / denominator);

        let mut remainder = numerator % denominator;
        if remainder != 0 && max_fraction_digits > 0 {
            out.push('.');
            let mut digits = 0;
            while remainder != 0 && digits < max_fraction_digits {
                remainder *= 10;
                let digit = remainder / denominator;
                out.push(char::from(b'0' + digit as u8));
                remainder %= denominator;
                digits += 1;
            }
        }

        out
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
    fn display() {
        assert_eq!(r(4, 6).to_string(), "2/3");
        assert_eq!(r(-4, 6).to_string(), "-2/3");
        assert_eq!(r(10, 5).to_string(), "2");
        assert_eq!(Rational::ZERO.to_string(), "0");
    }

    #[test]
    fn decimal_string() {
        assert_eq!(r(123456, 1000).to_decimal_string(10), "123.456");
        assert_eq!(r(1, 3).to_decimal_string(5), "0.33333");
        assert_eq!(r(-7, 2).to_decimal_string(3), "-3.5");
        assert_eq!(r(-7, 2).to_decimal_string(0), "-3");
        assert_eq!(Rational::from(42).to_decimal_string(3), "42");
    }
}
