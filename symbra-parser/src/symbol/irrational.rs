use once_cell::sync::Lazy;
use std::sync::Arc;
use super::{trie::{Match, SymbolTrie}, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a well-known irrational constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IrrationalId {
    Pi,
    E,
    Phi,
}

/// A named irrational constant, such as `pi`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Irrational {
    pub text: String,

    /// An approximation of the constant, for presentation only.
    pub value: f64,

    pub id: IrrationalId,
}

impl Irrational {
    pub fn new(text: impl Into<String>, value: f64, id: IrrationalId) -> Self {
        Self { text: text.into(), value, id }
    }
}

impl Symbol for Irrational {
    fn text(&self) -> &str {
        &self.text
    }
}

/// A set of irrational constants, searchable by text.
#[derive(Debug, Clone, Default)]
pub struct IrrationalRegistry {
    trie: SymbolTrie<Irrational>,
}

impl IrrationalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing `pi`, `e` and `phi`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Irrational::new("pi", std::f64::consts::PI, IrrationalId::Pi));
        registry.register(Irrational::new("e", std::f64::consts::E, IrrationalId::E));
        registry.register(Irrational::new("phi", 1.618_033_988_749_895, IrrationalId::Phi));
        registry
    }

    pub fn register(&mut self, irrational: Irrational) -> Arc<Irrational> {
        self.trie.insert(irrational)
    }

    /// Returns the constant with the given identity.
    pub fn get(&self, id: IrrationalId) -> Option<&Arc<Irrational>> {
        self.trie.iter().find(|irrational| irrational.id == id)
    }

    pub fn find_longest_match(&self, text: &str, offset: usize) -> Option<Match<'_, Irrational>> {
        self.trie.find_longest_match(text, offset, |_| true)
    }
}

pub static DEFAULT_IRRATIONALS: Lazy<Arc<IrrationalRegistry>> =
    Lazy::new(|| Arc::new(IrrationalRegistry::with_defaults()));

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn phi_is_not_shadowed_by_pi() {
        let found = DEFAULT_IRRATIONALS.find_longest_match("2phi", 1).unwrap();
        assert_eq!((found.symbol.id, found.len), (IrrationalId::Phi, 3));
        assert!(DEFAULT_IRRATIONALS.find_longest_match("ph", 0).is_none());
        assert_eq!(DEFAULT_IRRATIONALS.get(IrrationalId::E).map(|e| e.text.as_str()), Some("e"));
    }
}
