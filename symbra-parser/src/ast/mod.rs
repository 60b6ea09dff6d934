//! The expression tree produced by the parser.

mod fmt;
mod iter;

pub use iter::NodeIter;

use std::{collections::HashSet, sync::Arc};
use symbra_rational::Rational;
use crate::symbol::{Irrational, OperationId, Operator, Parenthesis, Variable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator applied to its operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatorNode {
    pub operator: Arc<Operator>,

    /// The operands in source order. For binary operators, this is `[lhs, rhs]`.
    pub operands: Vec<Node>,
}

impl OperatorNode {
    pub fn new(operator: Arc<Operator>, operands: Vec<Node>) -> Self {
        Self { operator, operands }
    }

    /// Creates a node with the same operator over copies of `operands`.
    pub fn clone_with_operands(&self, operands: &[Node]) -> Self {
        self.with_operands(operands.to_vec())
    }

    /// Creates a node with the same operator over `operands`.
    pub fn with_operands(&self, operands: Vec<Node>) -> Self {
        Self { operator: Arc::clone(&self.operator), operands }
    }

    pub fn operation(&self) -> OperationId {
        self.operator.operation
    }
}

/// A node in an expression tree.
///
/// Every node owns its operands, so trees are never shared and cloning is a deep copy. Symbols
/// (operators, constants, variables, parentheses) are shared handles into their registries.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// An exact rational number.
    Rational(Rational),

    /// A named irrational constant, such as `pi`.
    Irrational(Arc<Irrational>),

    /// A free variable.
    Variable(Arc<Variable>),

    /// An operator applied to its operands.
    Operator(OperatorNode),

    /// A grouping marker. This only appears on the parser's operator stack while the group is
    /// open, never in a finished tree.
    Parenthesis(Arc<Parenthesis>),
}

impl Node {
    pub fn operator(operator: Arc<Operator>, operands: Vec<Node>) -> Self {
        Self::Operator(OperatorNode::new(operator, operands))
    }

    /// Creates a variable node with a fresh handle.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Arc::new(Variable::new(name)))
    }

    /// If this is an operator node, creates a node with the same operator over copies of
    /// `operands`.
    pub fn clone_with_operands(&self, operands: &[Node]) -> Option<Self> {
        match self {
            Self::Operator(node) => Some(Self::Operator(node.clone_with_operands(operands))),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<&OperatorNode> {
        match self {
            Self::Operator(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the operation of this node, if it is an operator node.
    pub fn operation(&self) -> Option<OperationId> {
        self.as_operator().map(OperatorNode::operation)
    }

    /// Returns true if this is an operator node performing `operation`.
    pub fn is_operation(&self, operation: OperationId) -> bool {
        self.operation() == Some(operation)
    }

    /// Returns true if this node is the rational `value`.
    pub fn is_rational(&self, value: Rational) -> bool {
        self.as_rational() == Some(value)
    }

    /// Returns the direct operands of this node, which is empty for leaves.
    pub fn operands(&self) -> &[Node] {
        match self {
            Self::Operator(node) => &node.operands,
            _ => &[],
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> NodeIter<'_> {
        NodeIter::new(self)
    }

    /// Returns the free variables of the tree in the order they first appear.
    pub fn variables(&self) -> Vec<Arc<Variable>> {
        let mut seen = HashSet::new();
        self.post_order_iter()
            .filter_map(|node| match node {
                Self::Variable(variable) if seen.insert(variable.name.as_str()) => {
                    Some(Arc::clone(variable))
                },
                _ => None,
            })
            .collect()
    }
}

impl From<Rational> for Node {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<OperatorNode> for Node {
    fn from(node: OperatorNode) -> Self {
        Self::Operator(node)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbol::DEFAULT_OPERATORS;
    use super::*;

    fn op(operation: OperationId) -> Arc<Operator> {
        Arc::clone(DEFAULT_OPERATORS.get(operation).unwrap())
    }

    #[test]
    fn structural_equality() {
        let a = Node::operator(op(OperationId::Addition), vec![Node::variable("x"), Rational::ONE.into()]);
        let b = Node::operator(op(OperationId::Addition), vec![Node::variable("x"), Rational::ONE.into()]);
        let c = Node::operator(op(OperationId::Addition), vec![Rational::ONE.into(), Node::variable("x")]);
        let d = Node::operator(op(OperationId::Subtraction), vec![Node::variable("x"), Rational::ONE.into()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn clone_is_deep() {
        let inner = Node::operator(op(OperationId::UnaryMinus), vec![Node::variable("y")]);
        let original = Node::operator(op(OperationId::Multiplication), vec![Rational::from(2).into(), inner]);
        let mut copy = original.clone();
        if let Node::Operator(node) = &mut copy {
            node.operands[1] = Rational::ZERO.into();
        }
        assert_ne!(original, copy);
        assert!(original.operands()[1].is_operation(OperationId::UnaryMinus));
    }

    #[test]
    fn clone_with_operands() {
        let sum = Node::operator(op(OperationId::Addition), vec![Node::variable("x"), Node::variable("y")]);
        let replaced = sum.clone_with_operands(&[Rational::ONE.into(), Rational::ZERO.into()]).unwrap();
        assert_eq!(replaced.operation(), Some(OperationId::Addition));
        assert_eq!(replaced.operands(), &[Node::Rational(Rational::ONE), Node::Rational(Rational::ZERO)]);
        assert_eq!(Node::variable("x").clone_with_operands(&[]), None);
    }

    #[test]
    fn variables_in_order() {
        let tree = Node::operator(op(OperationId::Addition), vec![
            Node::operator(op(OperationId::Multiplication), vec![Node::variable("y"), Node::variable("x")]),
            Node::variable("y"),
        ]);
        let names = tree.variables().iter().map(|v| v.name.clone()).collect::<Vec<_>>();
        assert_eq!(names, vec!["y", "x"]);
    }
}
