//! Simplification of expression trees produced by [`symbra_parser`].
//!
//! The [`Simplifier`] rewrites a tree bottom-up using ordered lists of rules bound to each
//! operation. The default rules fold rational arithmetic exactly, remove identity operands, and
//! combine like terms.
//!
//! ```
//! use symbra_compute::Simplifier;
//! use symbra_parser::Parser;
//!
//! let tree = Parser::default().parse("x + 0 + 2x").unwrap();
//! let simplified = Simplifier::global().simplify(&tree);
//! assert_eq!(simplified.to_string(), "3 * x");
//! ```

pub mod simplify;

pub use simplify::{step::{Step, StepCollector}, Rule, RuleList, Simplifier};
