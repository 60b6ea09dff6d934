use once_cell::sync::Lazy;
use std::sync::Arc;
use super::{trie::{Match, SymbolTrie}, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of a parenthesis pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parenthesis {
    pub text: String,
    pub is_open: bool,

    /// Both sides of a pair share this identifier.
    pub pair: usize,
}

impl Parenthesis {
    /// Returns true if `other` is the other side of this parenthesis' pair.
    pub fn is_opposite(&self, other: &Parenthesis) -> bool {
        self.pair == other.pair && self.is_open != other.is_open
    }
}

impl Symbol for Parenthesis {
    fn text(&self) -> &str {
        &self.text
    }
}

/// A set of parenthesis pairs.
#[derive(Debug, Clone, Default)]
pub struct ParenthesisRegistry {
    trie: SymbolTrie<Parenthesis>,
    pairs: Vec<(Arc<Parenthesis>, Arc<Parenthesis>)>,
}

impl ParenthesisRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing `()`, `[]` and `{}`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (open, close) in [("(", ")"), ("[", "]"), ("{", "}")] {
            registry.register_pair(open, close);
        }
        registry
    }

    /// Registers a new pair of parentheses and returns both sides.
    pub fn register_pair(
        &mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> (Arc<Parenthesis>, Arc<Parenthesis>) {
        let pair = self.pairs.len();
        let open = self.trie.insert(Parenthesis { text: open.into(), is_open: true, pair });
        let close = self.trie.insert(Parenthesis { text: close.into(), is_open: false, pair });
        self.pairs.push((Arc::clone(&open), Arc::clone(&close)));
        (open, close)
    }

    /// Returns the other side of the given parenthesis.
    pub fn opposite(&self, paren: &Parenthesis) -> Option<&Arc<Parenthesis>> {
        let (open, close) = self.pairs.get(paren.pair)?;
        Some(if paren.is_open { close } else { open })
    }

    pub fn find_longest_match(&self, text: &str, offset: usize) -> Option<Match<'_, Parenthesis>> {
        self.trie.find_longest_match(text, offset, |_| true)
    }
}

pub static DEFAULT_PARENTHESES: Lazy<Arc<ParenthesisRegistry>> =
    Lazy::new(|| Arc::new(ParenthesisRegistry::with_defaults()));
