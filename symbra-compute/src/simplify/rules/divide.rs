//! Simplification rules for division.

use symbra_parser::ast::Node;
use symbra_rational::Rational;
use crate::{
    simplify::{step::{Step, StepCollector}, Rule, Simplifier},
};

/// `a/1 = a`
#[derive(Debug, Clone, Copy)]
pub struct DivideOne;

impl Rule for DivideOne {
    fn step(&self) -> Step {
        Step::DivideOne
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(operands, [_, divisor] if divisor.is_rational(Rational::ONE))
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        operands.first().cloned()
    }
}

/// `3/12 = 1/4`
/// `12/3 = 4`
///
/// Division by zero is left as it is.
#[derive(Debug, Clone, Copy)]
pub struct DivideRationals;

impl Rule for DivideRationals {
    fn step(&self) -> Step {
        Step::DivideRationals
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(
            operands,
            [Node::Rational(_), Node::Rational(divisor)] if !divisor.is_zero()
        )
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let [Node::Rational(dividend), Node::Rational(divisor)] = operands else {
            return None;
        };
        dividend.checked_div(*divisor).ok().map(Node::Rational)
    }
}
