//! The infix expression parser.
//!
//! [`Parser::parse`] reads the input left to right. At each position it tries, in order: an
//! argument separator, a parenthesis, a numeric literal, a named constant, an operator, a
//! declared custom symbol, and finally any single character as an unknown variable. Operands and
//! operators are combined with the shunting-yard algorithm.

pub mod error;
mod numeral;
mod settings;
mod state;

pub use settings::ParserSettings;

use std::sync::Arc;
use symbra_rational::{Rational, RationalError};
use tracing::debug;
use crate::{
    ast::Node,
    symbol::{Irrational, Operator, Parenthesis, Variable},
};
use error::{kind::{self, NumberIssue}, Error};
use numeral::scan_numeral;
use state::ParseState;

/// Returns true if `operator` can appear at a position where the previous token did or did not
/// end an operand.
fn accepts_operator(operator: &Operator, after_operand: bool) -> bool {
    if after_operand {
        operator.is_binary() || operator.is_postfix() || operator.is_function()
    } else {
        operator.is_prefix() || operator.is_function()
    }
}

/// A parser for infix mathematical expressions.
///
/// ```
/// use symbra_parser::parser::Parser;
///
/// let parser = Parser::new();
/// let tree = parser.parse("2(3 + x)").unwrap();
/// assert_eq!(tree.to_string(), "2 * (3 + x)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    settings: ParserSettings,
}

impl Parser {
    /// Creates a parser with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ParserSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ParserSettings {
        &mut self.settings
    }

    /// Declares a variable that may span several characters. Returns the shared handle for the
    /// variable, which is the existing one if the name was already declared.
    pub fn register_custom_symbol(&mut self, name: impl Into<String>) -> Arc<Variable> {
        let name = name.into();
        if let Some(existing) = self.settings.custom_symbols.get(&name).first() {
            return Arc::clone(existing);
        }
        self.settings.custom_symbols.insert(Variable::new(name))
    }

    /// Removes a declared variable. Returns true if it was declared.
    pub fn unregister_custom_symbol(&mut self, name: &str) -> bool {
        !self.settings.custom_symbols.remove(name).is_empty()
    }

    /// Parses an expression into a tree.
    pub fn parse(&self, expression: &str) -> Result<Node, Error> {
        debug!(target: "parse", expression, "parsing expression");
        if expression.trim().is_empty() {
            return Err(Error::new(vec![0..expression.len()], kind::EmptyExpression));
        }

        let node = ParseState::new(self, expression).run()?;
        debug!(target: "parse", result = %node, "parsed expression");
        Ok(node)
    }

    /// Error for text at `offset` that matches no symbol of the requested kind.
    fn unknown_symbol(text: &str, offset: usize) -> Error {
        let rest = text.get(offset..).unwrap_or("");
        if rest.is_empty() {
            return Error::new(vec![offset..offset], kind::EmptyExpression);
        }

        let len = rest.chars().next().map_or(1, char::len_utf8);
        Error::new(vec![offset..offset + len], kind::InvalidOperator {
            text: rest[..len].to_string(),
            misplaced: false,
        })
    }

    /// Reads the numeric literal at `offset`, returning its value and length in bytes.
    pub fn extract_rational(&self, text: &str, offset: usize) -> Result<(Rational, usize), Error> {
        let rest = text.get(offset..).unwrap_or("");
        if rest.is_empty() {
            return Err(Error::new(vec![offset..offset], kind::EmptyExpression));
        }

        let len = scan_numeral(rest).map_err(|(issue, at)| {
            Error::at(offset + at, kind::InvalidNumberFormat { issue })
        })?;
        let value = rest[..len].parse::<Rational>().map_err(|err| {
            let issue = match err {
                RationalError::Overflow => NumberIssue::OutOfRange,
                _ => NumberIssue::NoDigits,
            };
            Error::new(vec![offset..offset + len], kind::InvalidNumberFormat { issue })
        })?;

        Ok((value, len))
    }

    /// Finds the longest operator at `offset` that fits the context. `after_operand` is true if
    /// the previous token ended an operand, which allows binary and postfix operators; otherwise
    /// only prefix operators are allowed. Functions are allowed anywhere.
    ///
    /// Returns `Ok(None)` if no operator is spelled at `offset`, and an error if one is spelled
    /// but none fits the context.
    fn find_operator(
        &self,
        text: &str,
        offset: usize,
        after_operand: bool,
    ) -> Result<Option<(Arc<Operator>, usize)>, Error> {
        let operators = &self.settings.operators;
        if let Some(found) = operators.find_longest_match(text, offset, |op| accepts_operator(op, after_operand)) {
            return Ok(Some((Arc::clone(found.symbol), found.len)));
        }

        match operators.find_longest_match(text, offset, |_| true) {
            Some(found) => Err(Error::new(vec![offset..offset + found.len], kind::InvalidOperator {
                text: found.symbol.text.clone(),
                misplaced: true,
            })),
            None => Ok(None),
        }
    }

    /// Reads the operator at `offset`. If `after_operand` is true, binary and postfix operators
    /// are accepted; otherwise prefix operators are. Functions are accepted either way.
    pub fn extract_operator(
        &self,
        text: &str,
        offset: usize,
        after_operand: bool,
    ) -> Result<(Arc<Operator>, usize), Error> {
        self.find_operator(text, offset, after_operand)?
            .ok_or_else(|| Self::unknown_symbol(text, offset))
    }

    /// Reads the named constant at `offset`.
    pub fn extract_irrational(&self, text: &str, offset: usize) -> Result<(Arc<Irrational>, usize), Error> {
        self.settings.irrationals
            .find_longest_match(text, offset)
            .map(|found| (Arc::clone(found.symbol), found.len))
            .ok_or_else(|| Self::unknown_symbol(text, offset))
    }

    /// Reads the parenthesis at `offset`.
    pub fn extract_parenthesis(&self, text: &str, offset: usize) -> Result<(Arc<Parenthesis>, usize), Error> {
        self.settings.parentheses
            .find_longest_match(text, offset)
            .map(|found| (Arc::clone(found.symbol), found.len))
            .ok_or_else(|| Self::unknown_symbol(text, offset))
    }

    /// Reads the declared custom symbol at `offset`.
    pub fn extract_custom_symbol(&self, text: &str, offset: usize) -> Result<(Arc<Variable>, usize), Error> {
        self.settings.custom_symbols
            .find_longest_match(text, offset, |_| true)
            .map(|found| (Arc::clone(found.symbol), found.len))
            .ok_or_else(|| Self::unknown_symbol(text, offset))
    }

    /// Reads the single character at `offset` as a new variable, if unknown symbols are allowed.
    pub fn extract_unknown_variable(&self, text: &str, offset: usize) -> Result<(Arc<Variable>, usize), Error> {
        let Some(character) = text.get(offset..).and_then(|rest| rest.chars().next()) else {
            return Err(Error::new(vec![offset..offset], kind::EmptyExpression));
        };
        let len = character.len_utf8();

        if !self.settings.allow_unknown_symbols {
            return Err(Error::new(vec![offset..offset + len], kind::InvalidCharacter { character }));
        }
        Ok((Arc::new(Variable::new(character)), len))
    }
}
