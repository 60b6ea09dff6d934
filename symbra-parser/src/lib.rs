//! Reads infix mathematical expressions, such as `2x^2 + sin(pi / 4)`, into expression trees.
//!
//! The [`symbol`] module holds the registries of operators, constants, parentheses and declared
//! variables that the [`parser`] matches against the input. The result of parsing is an
//! [`ast::Node`] tree.

pub mod ast;
pub mod parser;
pub mod symbol;

pub use ast::{Node, OperatorNode};
pub use parser::{error::Error, Parser, ParserSettings};
