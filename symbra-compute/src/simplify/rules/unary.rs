//! Simplification rules for unary plus and minus.

use symbra_parser::ast::Node;
use crate::{
    simplify::{rules::negated, step::{Step, StepCollector}, Rule, Simplifier},
};

/// `+a = a`
#[derive(Debug, Clone, Copy)]
pub struct UnaryPlus;

impl Rule for UnaryPlus {
    fn step(&self) -> Step {
        Step::UnaryPlus
    }

    fn check(&self, operands: &[Node]) -> bool {
        operands.len() == 1
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        operands.first().cloned()
    }
}

/// `-(3) = -3`
#[derive(Debug, Clone, Copy)]
pub struct NegateRational;

impl Rule for NegateRational {
    fn step(&self) -> Step {
        Step::NegateRational
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(operands, [Node::Rational(_)])
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let [Node::Rational(value)] = operands else {
            return None;
        };
        value.checked_neg().ok().map(Node::Rational)
    }
}

/// `-(-a) = a`
#[derive(Debug, Clone, Copy)]
pub struct DoubleNegation;

impl Rule for DoubleNegation {
    fn step(&self) -> Step {
        Step::DoubleNegation
    }

    fn priority(&self) -> i32 {
        1
    }

    fn check(&self, operands: &[Node]) -> bool {
        matches!(operands, [operand] if negated(operand).is_some())
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        operands.first().and_then(negated).cloned()
    }
}
