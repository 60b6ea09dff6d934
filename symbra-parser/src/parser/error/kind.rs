use ariadne::Fmt;
use std::fmt;
use symbra_attrs::ErrorKind;
use symbra_error::EXPR;

/// A character could not be interpreted as part of any symbol, and unknown symbols are not
/// allowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character is not a number, operator, constant or declared variable"],
    help = "declare it as a custom symbol, or allow unknown symbols in the parser settings",
)]
pub struct InvalidCharacter {
    pub character: char,
}

/// What was wrong with a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberIssue {
    /// The literal has no digits, such as a lone `.` or sign.
    NoDigits,

    /// The literal has a second decimal point.
    ExtraPoint,

    /// The literal directly follows another literal.
    AdjacentNumber,

    /// The literal does not fit in a 64-bit rational.
    OutOfRange,
}

impl fmt::Display for NumberIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoDigits => write!(f, "expected at least one digit here"),
            Self::ExtraPoint => write!(f, "a number can only have one decimal point"),
            Self::AdjacentNumber => write!(f, "this number directly follows another number"),
            Self::OutOfRange => write!(f, "this number is too large"),
        }
    }
}

/// A numeric literal is malformed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number format",
    labels = [issue.to_string()],
    help = match issue {
        NumberIssue::AdjacentNumber => "separate the numbers with an operator",
        NumberIssue::OutOfRange => "numbers must fit in 64-bit integers",
        _ => "numbers are written as digits with at most one decimal point, such as `12.5`",
    },
)]
pub struct InvalidNumberFormat {
    pub issue: NumberIssue,
}

/// An operator was expected but not found, or an operator appears where it cannot be used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *misplaced {
        format!("operator `{}` cannot be used here", text)
    } else {
        format!("unknown operator `{}`", text)
    },
    labels = [if *misplaced {
        format!("expected an {} or prefix operator here", "operand".fg(EXPR))
    } else {
        "no operator is spelled like this".to_string()
    }],
)]
pub struct InvalidOperator {
    /// The text at the error position.
    pub text: String,

    /// The text spells an operator, but not one that fits the surrounding tokens.
    pub misplaced: bool,
}

/// What was wrong with a parenthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParenthesisIssue {
    /// The closing parenthesis does not match the innermost open one.
    Mismatched {
        expected: String,
    },

    /// An open parenthesis is never closed.
    Unclosed,

    /// A closing parenthesis has no open parenthesis to close.
    Unopened,
}

/// Parentheses are unbalanced or mismatched.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = match issue {
        ParenthesisIssue::Mismatched { .. } => "mismatched parenthesis",
        ParenthesisIssue::Unclosed => "unclosed parenthesis",
        ParenthesisIssue::Unopened => "unopened parenthesis",
    },
    labels = [match issue {
        ParenthesisIssue::Mismatched { expected } => format!("expected `{}` here", expected),
        ParenthesisIssue::Unclosed => "this parenthesis is not closed".to_string(),
        ParenthesisIssue::Unopened => "this parenthesis closes nothing".to_string(),
    }],
)]
pub struct InvalidParenthesis {
    pub issue: ParenthesisIssue,
}

/// What was wrong with the structure of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionIssue {
    /// More than one operand is left over, with no operator to join them.
    DanglingOperands,

    /// An operator does not have enough operands.
    MissingOperand,

    /// A function was given the wrong number of arguments.
    ArgumentCount {
        expected: usize,
        found: usize,
    },

    /// A pair of parentheses contains nothing.
    EmptyParenthesis,

    /// An argument separator appears outside of a function call, or without an argument before
    /// it.
    MisplacedSeparator,
}

impl fmt::Display for ExpressionIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DanglingOperands => write!(f, "these operands are not joined by an operator"),
            Self::MissingOperand => write!(f, "this operator is missing an operand"),
            Self::ArgumentCount { expected, found } => {
                write!(f, "this function takes {} argument(s), but {} were given", expected, found)
            },
            Self::EmptyParenthesis => write!(f, "add an expression here"),
            Self::MisplacedSeparator => write!(f, "a separator can only delimit function arguments"),
        }
    }
}

/// The expression is structurally invalid.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid expression",
    labels = [issue.to_string()],
)]
pub struct InvalidExpression {
    pub issue: ExpressionIssue,
}

/// There is nothing to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The implicit operator must be a binary operator.
///
/// Raised while configuring the parser, so it has no source location and reports only its
/// message and help.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as the implicit operator", text),
    help = "only binary operators can be inserted between adjacent operands",
)]
pub struct InvalidImplicitOperator {
    pub text: String,
}
