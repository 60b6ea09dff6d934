//! Symbols recognized by the parser, and the registries that store them.
//!
//! Every registry is backed by a [`SymbolTrie`], which resolves the longest registered symbol at
//! a position in the input. The default registries are built once and shared.

mod irrational;
mod operator;
mod paren;
mod trie;
mod variable;

pub use irrational::{Irrational, IrrationalId, IrrationalRegistry, DEFAULT_IRRATIONALS};
pub use operator::{
    Associativity,
    OperationId,
    Operator,
    OperatorKind,
    OperatorRegistry,
    DEFAULT_OPERATORS,
};
pub use paren::{Parenthesis, ParenthesisRegistry, DEFAULT_PARENTHESES};
pub use trie::{Match, SymbolTrie};
pub use variable::Variable;

/// A piece of text with a registered meaning.
pub trait Symbol {
    /// The text that spells this symbol in an expression.
    fn text(&self) -> &str;
}
