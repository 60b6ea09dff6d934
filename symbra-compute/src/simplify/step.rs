use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `2+3 = 5`
    AddRationals,

    /// `a+(-a) = 0`
    /// `(-a)+a = 0`
    AddOpposites,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `a+2a = 3a`
    CombineLikeTerms,

    /// `a-0 = a`
    /// `0-a = -a`
    SubtractZero,

    /// `5-3 = 2`
    SubtractRationals,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3 = 6`
    MultiplyRationals,

    /// `+a = a`
    UnaryPlus,

    /// `-(3) = -3`
    NegateRational,

    /// `-(-a) = a`
    DoubleNegation,

    /// `a/1 = a`
    DivideOne,

    /// `3/12 = 1/4`
    DivideRationals,

    /// `a^1 = a`
    PowerOne,

    /// `4^(1/2) = 2`
    PowerRationals,

    /// `sqrt(9/4) = 3/2`
    SquareRootRational,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Self::AddZero => "remove zero terms",
            Self::AddRationals => "add rational numbers",
            Self::AddOpposites => "cancel opposite terms",
            Self::CombineLikeTerms => "combine like terms",
            Self::SubtractZero => "remove zero terms",
            Self::SubtractRationals => "subtract rational numbers",
            Self::MultiplyZero => "multiply by zero",
            Self::MultiplyOne => "remove factors of one",
            Self::MultiplyRationals => "multiply rational numbers",
            Self::UnaryPlus => "remove unary plus",
            Self::NegateRational => "negate rational number",
            Self::DoubleNegation => "cancel double negation",
            Self::DivideOne => "divide by one",
            Self::DivideRationals => "divide rational numbers",
            Self::PowerOne => "raise to the power of one",
            Self::PowerRationals => "raise rational number to a rational power",
            Self::SquareRootRational => "take exact square root",
        };
        write!(f, "{}", description)
    }
}

/// Receives each [`Step`] as a rule fires.
///
/// `()` ignores the steps and `Vec<Step>` records them in order.
pub trait StepCollector {
    fn push(&mut self, step: Step);
}

impl StepCollector for () {
    fn push(&mut self, _: Step) {}
}

impl StepCollector for Vec<Step> {
    fn push(&mut self, step: Step) {
        Vec::push(self, step);
    }
}

impl<C: StepCollector + ?Sized> StepCollector for &mut C {
    fn push(&mut self, step: Step) {
        (**self).push(step);
    }
}
