use std::str::FromStr;
use super::{Rational, RationalError};

/// Parses an optionally signed run of ASCII digits.
fn parse_integer(text: &str) -> Result<i64, RationalError> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RationalError::InvalidFormat);
    }

    text.parse::<i64>().map_err(|_| RationalError::Overflow)
}

/// Parses an optionally signed decimal number, such as `12`, `-0.5`, `.456` or `5.`.
fn parse_decimal(text: &str) -> Result<Rational, RationalError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(RationalError::InvalidFormat);
    }

    let mut numerator: i128 = 0;
    let mut denominator: i128 = 1;
    for digit in whole.bytes().chain(fraction.bytes()) {
        numerator = numerator
            .checked_mul(10)
            .and_then(|n| n.checked_add(i128::from(digit - b'0')))
            .ok_or(RationalError::Overflow)?;
    }
    for _ in 0..fraction.len() {
        denominator = denominator.checked_mul(10).ok_or(RationalError::Overflow)?;
    }

    if negative {
        numerator = -numerator;
    }
    Rational::from_wide(numerator, denominator)
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses an integer (`-12`), a decimal (`123.456`, `.456`) or a fraction (`4/6`). Leading and
    /// trailing whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((numerator, denominator)) => Rational::new(
                parse_integer(numerator.trim())?,
                parse_integer(denominator.trim())?,
            ),
            None => parse_decimal(s),
        }
    }
}

impl TryFrom<String> for Rational {
    type Error = RationalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
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
    fn fraction() {
        assert_eq!("4/6".parse::<Rational>().unwrap().to_string(), "2/3");
        assert_eq!(" -3 / 9 ".parse(), Ok(r(-1, 3)));
        assert_eq!("3/-9".parse(), Ok(r(-1, 3)));
        assert_eq!("1/0".parse::<Rational>(), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn integer() {
        assert_eq!("42".parse(), Ok(Rational::from(42)));
        assert_eq!("-42".parse(), Ok(Rational::from(-42)));
        assert_eq!("+7".parse(), Ok(Rational::from(7)));
    }

    #[test]
    fn decimal() {
        assert_eq!("123.456".parse(), Ok(r(123456, 1000)));
        assert_eq!(".456".parse(), Ok(r(456, 1000)));
        assert_eq!("-0.5".parse(), Ok(r(-1, 2)));
        assert_eq!("5.".parse(), Ok(Rational::from(5)));
        assert_eq!("0.000".parse(), Ok(Rational::ZERO));
    }

    #[test]
    fn malformed() {
        for text in ["", "   ", ".", "-", "+", "1.2.3", "abc", "1/", "/2", "1/2/3", "1.5/2", "--1", "1e5"] {
            assert_eq!(text.parse::<Rational>(), Err(RationalError::InvalidFormat), "{text:?}");
        }
    }

    #[test]
    fn too_large() {
        assert_eq!("99999999999999999999".parse::<Rational>(), Err(RationalError::Overflow));
        assert_eq!("99999999999999999999/3".parse::<Rational>(), Err(RationalError::Overflow));
    }

    #[test]
    fn display_round_trip() {
        let value = r(-38, 3);
        assert_eq!(value.to_string().parse(), Ok(value));
    }
}
