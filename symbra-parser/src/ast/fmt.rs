use std::fmt::{self, Display, Formatter};
use crate::symbol::{Associativity, OperatorKind};
use super::{Node, OperatorNode};

/// Binding strength of a node when printed, used to decide where parentheses are needed.
fn precedence(node: &Node) -> u8 {
    match node {
        Node::Operator(node) if !node.operator.is_function() => node.operator.precedence,
        // printed as `-n` or `n/d`, so they bind like a prefix minus or a division
        Node::Rational(value) if value.is_negative() => 4,
        Node::Rational(value) if !value.is_integer() => 2,
        _ => u8::MAX,
    }
}

/// Writes `node`, wrapped in parentheses if `wrap` is true.
fn write_operand(f: &mut Formatter, node: &Node, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

impl Display for OperatorNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let operator = &self.operator;
        let own = operator.precedence;

        match operator.kind {
            OperatorKind::Binary => {
                for (i, operand) in self.operands.iter().enumerate() {
                    let wrap = match (i, operator.associativity) {
                        (0, Associativity::Left) => precedence(operand) < own,
                        (0, Associativity::Right) | (_, Associativity::Left) => precedence(operand) <= own,
                        (_, Associativity::Right) => precedence(operand) < own,
                    };
                    if i > 0 {
                        write!(f, " {} ", operator.text)?;
                    }
                    write_operand(f, operand, wrap)?;
                }
                Ok(())
            },
            OperatorKind::Unary if operator.is_prefix() => {
                write!(f, "{}", operator.text)?;
                for operand in &self.operands {
                    write_operand(f, operand, precedence(operand) <= own)?;
                }
                Ok(())
            },
            OperatorKind::Unary => {
                for operand in &self.operands {
                    write_operand(f, operand, precedence(operand) <= own)?;
                }
                write!(f, "{}", operator.text)
            },
            _ => {
                write!(f, "{}(", operator.text)?;
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            },
        }
    }
}

impl Display for Node {
    /// Formats the tree as an infix expression, adding parentheses only where precedence or
    /// associativity requires them.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Rational(value) => write!(f, "{}", value),
            Self::Irrational(irrational) => write!(f, "{}", irrational.text),
            Self::Variable(variable) => write!(f, "{}", variable.name),
            Self::Operator(node) => write!(f, "{}", node),
            Self::Parenthesis(paren) => write!(f, "{}", paren.text),
        }
    }
}
