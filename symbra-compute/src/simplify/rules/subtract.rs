//! Simplification rules for subtraction.

use symbra_parser::{ast::Node, symbol::OperationId};
use symbra_rational::Rational;
use crate::{
    simplify::{rules::{all_rationals, single_survivor}, step::{Step, StepCollector}, Rule, Simplifier},
};

/// `a-0 = a`
/// `0-a = -a`
#[derive(Debug, Clone, Copy)]
pub struct SubtractZero;

impl Rule for SubtractZero {
    fn step(&self) -> Step {
        Step::SubtractZero
    }

    fn check(&self, operands: &[Node]) -> bool {
        single_survivor(operands, Rational::ZERO).is_some()
    }

    fn simplify(
        &self,
        simplifier: &Simplifier,
        operands: &[Node],
        steps: &mut dyn StepCollector,
    ) -> Option<Node> {
        match single_survivor(operands, Rational::ZERO)? {
            0 => Some(operands[0].clone()),
            index => simplifier.simplify_or_build(OperationId::UnaryMinus, vec![operands[index].clone()], steps),
        }
    }
}

/// `5-3 = 2`
#[derive(Debug, Clone, Copy)]
pub struct SubtractRationals;

impl Rule for SubtractRationals {
    fn step(&self) -> Step {
        Step::SubtractRationals
    }

    fn check(&self, operands: &[Node]) -> bool {
        !operands.is_empty() && operands.iter().all(|operand| operand.as_rational().is_some())
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let values = all_rationals(operands)?;
        let (first, rest) = values.split_first()?;
        rest.iter()
            .try_fold(*first, |difference, &value| difference.checked_sub(value))
            .ok()
            .map(Node::Rational)
    }
}
