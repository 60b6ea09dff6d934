#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use super::Symbol;

/// A free variable, either declared up front or seen for the first time while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Symbol for Variable {
    fn text(&self) -> &str {
        &self.name
    }
}
