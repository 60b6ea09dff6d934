//! Simplification rules for powers and square roots.

use symbra_parser::ast::Node;
use symbra_rational::Rational;
use crate::{
    simplify::{step::{Step, StepCollector}, Rule, Simplifier},
};

/// `a^1 = a`
#[derive(Debug, Clone, Copy)]
pub struct PowerOne;

impl Rule for PowerOne {
    fn step(&self) -> Step {
        Step::PowerOne
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(operands, [_, exponent] if exponent.is_rational(Rational::ONE))
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        operands.first().cloned()
    }
}

/// Raises a rational to a rational power, if the result is rational.
///
/// `2^3 = 8`
/// `4^(1/2) = 2`
/// `(8/27)^(2/3) = 4/9`
#[derive(Debug, Clone, Copy)]
pub struct PowerRationals;

impl Rule for PowerRationals {
    fn step(&self) -> Step {
        Step::PowerRationals
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(
            operands,
            [Node::Rational(base), Node::Rational(exponent)]
                if base.can_yield_rational_power_result(exponent)
        )
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let [Node::Rational(base), Node::Rational(exponent)] = operands else {
            return None;
        };
        base.pow(exponent).ok().map(Node::Rational)
    }
}

/// `sqrt(9/4) = 3/2`
#[derive(Debug, Clone, Copy)]
pub struct SquareRootRational;

impl Rule for SquareRootRational {
    fn step(&self) -> Step {
        Step::SquareRootRational
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(operands, [Node::Rational(_)])
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let [Node::Rational(radicand)] = operands else {
            return None;
        };
        let half = Rational::new(1, 2).ok()?;
        radicand.pow(&half).ok().map(Node::Rational)
    }
}
