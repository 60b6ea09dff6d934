use once_cell::sync::Lazy;
use std::{collections::HashMap, sync::Arc};
use super::{trie::{Match, SymbolTrie}, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies what an operator does, independent of how it is spelled. Two operators may share
/// the same text (binary and unary `-`) while having different operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationId {
    Addition,
    UnaryPlus,
    Subtraction,
    UnaryMinus,
    Multiplication,
    Division,
    Factorial,
    Exponentiation,
    Root,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,
    Logarithm,
    NaturalLogarithm,
    SquareRoot,
    AbsoluteValue,

    /// An operation registered by the caller, identified by a number of its choosing. None of the
    /// default operators use it.
    Custom(u32),
}

/// How many operands an operator takes, and where it is written relative to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorKind {
    /// One operand, written before or after it depending on the [`Associativity`].
    Unary,

    /// Two operands, written between them.
    Binary,

    /// A function call with one argument, such as `sin(x)`.
    FunctionSingular,

    /// A function call with two arguments, such as `log(2, x)`.
    FunctionDual,

    /// A function call with any number of arguments.
    FunctionMultiple,
}

impl OperatorKind {
    /// Returns true if this is one of the function kinds.
    pub fn is_function(self) -> bool {
        matches!(self, Self::FunctionSingular | Self::FunctionDual | Self::FunctionMultiple)
    }

    /// Returns the exact number of operands this kind takes, or [`None`] if it takes any number.
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Unary | Self::FunctionSingular => Some(1),
            Self::Binary | Self::FunctionDual => Some(2),
            Self::FunctionMultiple => None,
        }
    }
}

/// How an operator groups with its operands.
///
/// For binary operators this is the usual associativity. For unary operators it is the fixity,
/// the side of the operand the operator is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Associativity {
    /// Binary operators group from the left, so `a - b - c` is `(a - b) - c`.
    ///
    /// Unary operators are postfix and follow their operand, as in `x!`.
    Left,

    /// Binary operators group from the right, so `a ^ b ^ c` is `a ^ (b ^ c)`.
    ///
    /// Unary operators are prefix and precede their operand, as in `-x`. Functions are always
    /// written before their arguments, whatever their associativity.
    Right,
}

/// An operator or function that can appear in an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operator {
    /// The text of the operator, such as `+` or `sin`.
    pub text: String,

    pub kind: OperatorKind,

    pub associativity: Associativity,

    /// Operators with higher precedence bind tighter.
    pub precedence: u8,

    pub operation: OperationId,
}

impl Operator {
    pub fn new(
        text: impl Into<String>,
        kind: OperatorKind,
        associativity: Associativity,
        precedence: u8,
        operation: OperationId,
    ) -> Self {
        Self { text: text.into(), kind, associativity, precedence, operation }
    }

    /// Returns true if this is a unary operator written before its operand, such as `-x`.
    pub fn is_prefix(&self) -> bool {
        self.kind == OperatorKind::Unary && self.associativity == Associativity::Right
    }

    /// Returns true if this is a unary operator written after its operand, such as `x!`.
    pub fn is_postfix(&self) -> bool {
        self.kind == OperatorKind::Unary && self.associativity == Associativity::Left
    }

    pub fn is_binary(&self) -> bool {
        self.kind == OperatorKind::Binary
    }

    pub fn is_function(&self) -> bool {
        self.kind.is_function()
    }
}

impl Symbol for Operator {
    fn text(&self) -> &str {
        &self.text
    }
}

/// A set of operators, searchable by text and by operation.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    trie: SymbolTrie<Operator>,
    by_operation: HashMap<OperationId, Arc<Operator>>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing the standard arithmetic operators and functions.
    pub fn with_defaults() -> Self {
        use Associativity::*;
        use OperationId::*;
        use OperatorKind::*;

        let mut registry = Self::new();
        for (text, kind, associativity, precedence, operation) in [
            ("+", Binary, Left, 1, Addition),
            ("+", Unary, Right, 4, UnaryPlus),
            ("-", Binary, Left, 1, Subtraction),
            ("-", Unary, Right, 4, UnaryMinus),
            ("*", Binary, Left, 2, Multiplication),
            ("/", Binary, Left, 2, Division),
            ("!", Unary, Left, 5, Factorial),
            ("^", Binary, Right, 3, Exponentiation),
            ("root", FunctionDual, Left, 6, Root),
            ("sin", FunctionSingular, Left, 6, Sine),
            ("cos", FunctionSingular, Left, 6, Cosine),
            ("tan", FunctionSingular, Left, 6, Tangent),
            ("asin", FunctionSingular, Left, 6, ArcSine),
            ("acos", FunctionSingular, Left, 6, ArcCosine),
            ("atan", FunctionSingular, Left, 6, ArcTangent),
            ("sinh", FunctionSingular, Left, 6, HyperbolicSine),
            ("cosh", FunctionSingular, Left, 6, HyperbolicCosine),
            ("tanh", FunctionSingular, Left, 6, HyperbolicTangent),
            ("log", FunctionDual, Left, 6, Logarithm),
            ("ln", FunctionSingular, Left, 6, NaturalLogarithm),
            ("sqrt", FunctionSingular, Left, 6, SquareRoot),
            ("abs", FunctionSingular, Left, 6, AbsoluteValue),
        ] {
            registry.register(Operator::new(text, kind, associativity, precedence, operation));
        }
        registry
    }

    /// Adds an operator. If another operator already performs the same operation, it stays
    /// matchable by text but lookups by operation return the new one.
    pub fn register(&mut self, operator: Operator) -> Arc<Operator> {
        let operator = self.trie.insert(operator);
        self.by_operation.insert(operator.operation, Arc::clone(&operator));
        operator
    }

    /// Returns the operator performing the given operation.
    pub fn get(&self, operation: OperationId) -> Option<&Arc<Operator>> {
        self.by_operation.get(&operation)
    }

    /// Returns every operator spelled exactly `text`.
    pub fn get_by_text(&self, text: &str) -> &[Arc<Operator>] {
        self.trie.get(text)
    }

    /// Finds the longest operator at `offset` accepted by `predicate`.
    pub fn find_longest_match(
        &self,
        text: &str,
        offset: usize,
        predicate: impl Fn(&Operator) -> bool,
    ) -> Option<Match<'_, Operator>> {
        self.trie.find_longest_match(text, offset, predicate)
    }
}

/// The standard operators, shared by every parser and simplifier that does not supply its own.
pub static DEFAULT_OPERATORS: Lazy<Arc<OperatorRegistry>> =
    Lazy::new(|| Arc::new(OperatorRegistry::with_defaults()));

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn lookup_by_operation() {
        let minus = DEFAULT_OPERATORS.get(OperationId::UnaryMinus).unwrap();
        assert_eq!(minus.text, "-");
        assert!(minus.is_prefix());

        let factorial = DEFAULT_OPERATORS.get(OperationId::Factorial).unwrap();
        assert!(factorial.is_postfix());
        assert_eq!(DEFAULT_OPERATORS.get_by_text("-").len(), 2);
    }

    #[test]
    fn unary_fixity_follows_associativity() {
        let prefix = Operator::new("~", OperatorKind::Unary, Associativity::Right, 4, OperationId::Custom(1));
        assert!(prefix.is_prefix() && !prefix.is_postfix());

        let postfix = Operator::new("'", OperatorKind::Unary, Associativity::Left, 5, OperationId::Custom(2));
        assert!(postfix.is_postfix() && !postfix.is_prefix());

        let power = DEFAULT_OPERATORS.get(OperationId::Exponentiation).unwrap();
        assert!(!power.is_prefix() && !power.is_postfix());
    }

    #[test]
    fn disambiguate_by_kind() {
        let found = DEFAULT_OPERATORS
            .find_longest_match("-x", 0, |op| op.kind == OperatorKind::Unary)
            .unwrap();
        assert_eq!(found.symbol.operation, OperationId::UnaryMinus);

        let found = DEFAULT_OPERATORS
            .find_longest_match("-x", 0, Operator::is_binary)
            .unwrap();
        assert_eq!(found.symbol.operation, OperationId::Subtraction);
    }

    #[test]
    fn function_names() {
        let found = DEFAULT_OPERATORS.find_longest_match("sinhabc", 0, |_| true).unwrap();
        assert_eq!((found.symbol.operation, found.len), (OperationId::HyperbolicSine, 4));

        let found = DEFAULT_OPERATORS.find_longest_match("cosabc", 0, |_| true).unwrap();
        assert_eq!((found.symbol.operation, found.len), (OperationId::Cosine, 3));

        assert!(DEFAULT_OPERATORS.find_longest_match("taa", 0, |_| true).is_none());
    }

    #[test]
    fn arity() {
        assert_eq!(OperatorKind::Unary.arity(), Some(1));
        assert_eq!(OperatorKind::FunctionDual.arity(), Some(2));
        assert_eq!(OperatorKind::FunctionMultiple.arity(), None);
        assert!(!OperatorKind::Binary.is_function());
    }
}
