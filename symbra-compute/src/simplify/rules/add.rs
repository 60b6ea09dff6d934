//! Simplification rules for addition, including combining like terms.

use symbra_parser::{ast::Node, symbol::OperationId};
use symbra_rational::Rational;
use crate::{
    simplify::{rules::{fold_rationals, negated, single_survivor}, step::{Step, StepCollector}, Rule, Simplifier},
};

/// `0+a = a`
/// `a+0 = a`
#[derive(Debug, Clone, Copy)]
pub struct AddZero;

impl Rule for AddZero {
    fn step(&self) -> Step {
        Step::AddZero
    }

    fn check(&self, operands: &[Node]) -> bool {
        single_survivor(operands, Rational::ZERO).is_some()
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        single_survivor(operands, Rational::ZERO).map(|index| operands[index].clone())
    }
}

/// `2+3 = 5`
#[derive(Debug, Clone, Copy)]
pub struct AddRationals;

impl Rule for AddRationals {
    fn step(&self) -> Step {
        Step::AddRationals
    }

    fn check(&self, operands: &[Node]) -> bool {
        operands.iter().all(|operand| operand.as_rational().is_some())
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        fold_rationals(operands, Rational::ZERO, Rational::checked_add)
    }
}

/// `a+(-a) = 0`
/// `(-a)+a = 0`
#[derive(Debug, Clone, Copy)]
pub struct AddOpposites;

impl Rule for AddOpposites {
    fn step(&self) -> Step {
        Step::AddOpposites
    }

    fn priority(&self) -> i32 {
        1
    }

    fn check(&self, operands: &[Node]) -> bool {
        match operands {
            [lhs, rhs] => negated(lhs).is_some() || negated(rhs).is_some(),
            _ => false,
        }
    }

    fn simplify(&self, _: &Simplifier, operands: &[Node], _: &mut dyn StepCollector) -> Option<Node> {
        let [lhs, rhs] = operands else {
            return None;
        };

        let opposite = negated(lhs) == Some(rhs) || negated(rhs) == Some(lhs);
        opposite.then_some(Node::Rational(Rational::ZERO))
    }
}

/// Splits a term into its factors: the two operands of a product, or the term itself.
fn factors(term: &Node) -> Vec<&Node> {
    match term.operands() {
        [lhs, rhs] if term.is_operation(OperationId::Multiplication) => vec![lhs, rhs],
        _ => vec![term],
    }
}

/// Returns what is left of a term after removing the factor at `index`.
fn coefficient(factors: &[&Node], index: usize) -> Node {
    match factors {
        [_, _] => factors[1 - index].clone(),
        _ => Node::Rational(Rational::ONE),
    }
}

/// Combines two terms that share a non-rational factor.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `a+2a = 3a`
/// `ab+cb = (a+c)b`
#[derive(Debug, Clone, Copy)]
pub struct CombineLikeTerms;

impl Rule for CombineLikeTerms {
    fn step(&self) -> Step {
        Step::CombineLikeTerms
    }

    fn priority(&self) -> i32 {
        2
    }

    fn check(&self, operands: &[Node]) -> bool {
        operands.len() == 2
    }

    fn simplify(
        &self,
        simplifier: &Simplifier,
        operands: &[Node],
        steps: &mut dyn StepCollector,
    ) -> Option<Node> {
        let [lhs, rhs] = operands else {
            return None;
        };
        let (lhs_factors, rhs_factors) = (factors(lhs), factors(rhs));

        // try the pairings in order: left-left, left-right, right-left, right-right
        let (i, j) = (0..lhs_factors.len())
            .flat_map(|i| (0..rhs_factors.len()).map(move |j| (i, j)))
            .find(|&(i, j)| {
                lhs_factors[i].as_rational().is_none() && lhs_factors[i] == rhs_factors[j]
            })?;

        let common = lhs_factors[i].clone();
        let sum = simplifier.simplify_or_build(
            OperationId::Addition,
            vec![coefficient(&lhs_factors, i), coefficient(&rhs_factors, j)],
            steps,
        )?;
        simplifier.simplify_or_build(OperationId::Multiplication, vec![sum, common], steps)
    }
}
