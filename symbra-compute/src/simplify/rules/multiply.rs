//! Simplification rules for multiplication.

use symbra_parser::ast::Node;
use symbra_rational::Rational;
use crate::{
    simplify::{rules::{fold_rationals, single_survivor}, step::{Step, StepCollector}, Rule, Simplifier},
};

/// `0*a = 0`
/// `a*0 = 0`
#[derive(Debug, Clone, Copy)]
pub struct MultiplyZero;

impl Rule for MultiplyZero {
    fn step(&self) -> Step {
        Step::MultiplyZero
    }

    fn check(&self, operands: &[Node]) -> bool {
        operands.iter().any(|operand| operand.is_rational(Rational::ZERO))
    }

    fn simplify(&self, _: &Simplifier, _: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        Some(Node::Rational(Rational::ZERO))
    }
}

/// `1*a = a`
/// `a*1 = a`
#[derive(Debug, Clone, Copy)]
pub struct MultiplyOne;

impl Rule for MultiplyOne {
    fn step(&self) -> Step {
        Step::MultiplyOne
    }

    fn check(&self, operands: &[Node]) -> bool {
        single_survivor(operands, Rational::ONE).is_some()
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        single_survivor(operands, Rational::ONE).map(|index| operands[index].clone())
    }
}

/// `2*3 = 6`
#[derive(Debug, Clone, Copy)]
pub struct MultiplyRationals;

impl Rule for MultiplyRationals {
    fn step(&self) -> Step {
        Step::MultiplyRationals
    }

    fn check(&self, operands: &[Node]) -> bool {
        operands.iter().all(|operand| operand.as_rational().is_some())
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        fold_rationals(operands, Rational::ONE, Rational::checked_mul)
    }
}
