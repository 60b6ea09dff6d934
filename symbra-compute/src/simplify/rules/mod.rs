//! The default simplification rules.
//!
//! Each rule is a unit struct implementing [`Rule`] for the operands of one operation. Rules that
//! fold rational arithmetic decline when the arithmetic fails, so a tree that overflows or has no
//! rational result is left as it was.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod subtract;
pub mod unary;

use symbra_parser::{ast::Node, symbol::OperationId};
use symbra_rational::{Rational, RationalError};
use super::{Rule, RuleList, Simplifier};

/// Returns the values of the operands if every operand is rational.
pub(crate) fn all_rationals(operands: &[Node]) -> Option<Vec<Rational>> {
    operands.iter().map(Node::as_rational).collect()
}

/// Returns the index of the only operand that is not the rational `neutral`, if there is
/// exactly one such operand.
pub(crate) fn single_survivor(operands: &[Node], neutral: Rational) -> Option<usize> {
    let mut survivors = operands
        .iter()
        .enumerate()
        .filter(|(_, operand)| !operand.is_rational(neutral))
        .map(|(index, _)| index);
    let survivor = survivors.next()?;
    survivors.next().is_none().then_some(survivor)
}

/// Folds every operand into `init` with `f`, if every operand is rational and no step fails.
pub(crate) fn fold_rationals(
    operands: &[Node],
    init: Rational,
    f: impl Fn(Rational, Rational) -> Result<Rational, RationalError>,
) -> Option<Node> {
    all_rationals(operands)?
        .into_iter()
        .try_fold(init, f)
        .ok()
        .map(Node::Rational)
}

/// If `node` is a unary negation, returns its operand.
pub(crate) fn negated(node: &Node) -> Option<&Node> {
    match node.operands() {
        [operand] if node.is_operation(OperationId::UnaryMinus) => Some(operand),
        _ => None,
    }
}

fn rule_list<const N: usize>(rules: [Box<dyn Rule>; N]) -> RuleList {
    let mut list = RuleList::new();
    for rule in rules {
        list.add_boxed(rule);
    }
    list
}

/// Binds the default rules to `simplifier`.
pub fn bind_defaults(simplifier: &mut Simplifier) {
    simplifier.bind_rules(OperationId::Addition, rule_list([
        Box::new(add::AddZero),
        Box::new(add::AddRationals),
        Box::new(add::AddOpposites),
        Box::new(add::CombineLikeTerms),
    ]));
    simplifier.bind_rules(OperationId::Subtraction, rule_list([
        Box::new(subtract::SubtractZero),
        Box::new(subtract::SubtractRationals),
    ]));
    // the zero rule must come first, so that it wins over the identity rule at equal priority
    simplifier.bind_rules(OperationId::Multiplication, rule_list([
        Box::new(multiply::MultiplyZero),
        Box::new(multiply::MultiplyOne),
        Box::new(multiply::MultiplyRationals),
    ]));
    simplifier.bind_rules(OperationId::UnaryPlus, rule_list([
        Box::new(unary::UnaryPlus),
    ]));
    simplifier.bind_rules(OperationId::UnaryMinus, rule_list([
        Box::new(unary::NegateRational),
        Box::new(unary::DoubleNegation),
    ]));
    simplifier.bind_rules(OperationId::Division, rule_list([
        Box::new(divide::DivideOne),
        Box::new(divide::DivideRationals),
    ]));
    simplifier.bind_rules(OperationId::Exponentiation, rule_list([
        Box::new(power::PowerOne),
        Box::new(power::PowerRationals),
    ]));
    simplifier.bind_rules(OperationId::SquareRoot, rule_list([
        Box::new(power::SquareRootRational),
    ]));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn rational(n: i64) -> Node {
        Node::Rational(Rational::from(n))
    }

    #[test]
    fn survivors() {
        let x = Node::variable("x");
        assert_eq!(single_survivor(&[rational(0), x.clone()], Rational::ZERO), Some(1));
        assert_eq!(single_survivor(&[x.clone(), rational(0), rational(0)], Rational::ZERO), Some(0));
        assert_eq!(single_survivor(&[x.clone(), rational(2)], Rational::ZERO), None);
        assert_eq!(single_survivor(&[rational(1), rational(1)], Rational::ONE), None);
    }

    #[test]
    fn folds() {
        let sum = fold_rationals(&[rational(2), rational(3)], Rational::ZERO, Rational::checked_add);
        assert_eq!(sum, Some(rational(5)));

        let overflow = fold_rationals(&[rational(i64::MAX), rational(1)], Rational::ZERO, Rational::checked_add);
        assert_eq!(overflow, None);

        let symbolic = fold_rationals(&[rational(2), Node::variable("x")], Rational::ZERO, Rational::checked_add);
        assert_eq!(symbolic, None);
    }

    #[test]
    fn default_bindings() {
        let simplifier = Simplifier::global();
        let steps = |operation| simplifier
            .rules(operation)
            .map(|rules| rules.iter().map(|rule| rule.step()).collect::<Vec<_>>())
            .unwrap_or_default();

        use crate::Step::*;
        assert_eq!(steps(OperationId::Addition), vec![AddZero, AddRationals, AddOpposites, CombineLikeTerms]);
        assert_eq!(steps(OperationId::Multiplication), vec![MultiplyZero, MultiplyOne, MultiplyRationals]);
        assert_eq!(steps(OperationId::Sine), vec![]);
    }
}
