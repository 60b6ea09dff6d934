use std::fmt;

/// Errors produced by rational arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// A rational was constructed with a zero denominator.
    ZeroDenominator,

    /// Division by a rational equal to zero, or the inverse of zero.
    DivisionByZero,

    /// Zero was raised to the power zero or to a negative power.
    ZeroToNonPositivePower,

    /// A fractional power was requested whose result is not rational, such as `2^(1/2)`.
    IrrationalResult,

    /// The result does not fit in 64-bit numerator and denominator.
    Overflow,

    /// The text could not be parsed as a rational.
    InvalidFormat,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "denominator cannot be zero"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ZeroToNonPositivePower => write!(f, "zero cannot be raised to a non-positive power"),
            Self::IrrationalResult => write!(f, "result cannot be represented as a rational number"),
            Self::Overflow => write!(f, "result does not fit in a 64-bit rational"),
            Self::InvalidFormat => write!(f, "invalid rational number format"),
        }
    }
}

impl std::error::Error for RationalError {}
