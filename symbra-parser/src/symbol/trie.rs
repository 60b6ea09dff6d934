use std::{collections::BTreeMap, sync::Arc};
use super::Symbol;

/// A node in a [`SymbolTrie`].
#[derive(Debug, Clone)]
struct TrieNode<T> {
    /// Symbols whose text ends at this node. Several symbols may share the same text, such as
    /// unary and binary `-`.
    symbols: Vec<Arc<T>>,

    children: BTreeMap<char, TrieNode<T>>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self { symbols: Vec::new(), children: BTreeMap::new() }
    }
}

impl<T> TrieNode<T> {
    fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.children.is_empty()
    }

    /// Removes the symbols stored at the node reached by `chars`, pruning nodes left empty on the
    /// way back up.
    fn remove_path(&mut self, mut chars: std::str::Chars) -> Vec<Arc<T>> {
        let Some(c) = chars.next() else {
            return std::mem::take(&mut self.symbols);
        };
        let Some(child) = self.children.get_mut(&c) else {
            return Vec::new();
        };

        let removed = child.remove_path(chars);
        if child.is_empty() {
            self.children.remove(&c);
        }
        removed
    }
}

/// The result of a successful [`SymbolTrie::find_longest_match`].
#[derive(Debug, PartialEq)]
pub struct Match<'a, T> {
    /// The first symbol at the deepest matching node that satisfied the predicate.
    pub symbol: &'a Arc<T>,

    /// The length of the matched text, in bytes.
    pub len: usize,
}

/// A character-indexed prefix tree of symbols, used for longest-match tokenization.
#[derive(Debug, Clone)]
pub struct SymbolTrie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> Default for SymbolTrie<T> {
    fn default() -> Self {
        Self { root: TrieNode::default(), len: 0 }
    }
}

impl<T: Symbol> SymbolTrie<T> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of symbols in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a symbol, keeping any symbols that already share its text. Returns the shared
    /// handle stored in the trie.
    pub fn insert(&mut self, symbol: impl Into<Arc<T>>) -> Arc<T> {
        let symbol = symbol.into();
        let node = symbol.text()
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());
        node.symbols.push(Arc::clone(&symbol));
        self.len += 1;
        symbol
    }

    /// Removes every symbol whose text is exactly `text`. Symbols with longer text sharing the
    /// same prefix are kept.
    pub fn remove(&mut self, text: &str) -> Vec<Arc<T>> {
        let removed = self.root.remove_path(text.chars());
        self.len -= removed.len();
        removed
    }

    /// Returns the symbols whose text is exactly `text`.
    pub fn get(&self, text: &str) -> &[Arc<T>] {
        let mut node = &self.root;
        for c in text.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.symbols
    }

    /// Finds the longest symbol that starts at byte `offset` of `text` and satisfies
    /// `predicate`. Among symbols sharing the longest text, the first inserted one that satisfies
    /// the predicate wins.
    ///
    /// Returns [`None`] if no symbol matches, or if `offset` is not on a character boundary.
    pub fn find_longest_match(
        &self,
        text: &str,
        offset: usize,
        predicate: impl Fn(&T) -> bool,
    ) -> Option<Match<'_, T>> {
        let mut node = &self.root;
        let mut best = None;

        for (index, c) in text.get(offset..)?.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }

            if let Some(symbol) = node.symbols.iter().find(|symbol| predicate(symbol)) {
                best = Some(Match { symbol, len: index + c.len_utf8() });
            }
        }

        best
    }

    /// Returns an iterator over every symbol in the trie, in lexicographic order of their text.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values().rev());
            Some(node.symbols.iter())
        })
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Word(&'static str, u8);

    impl Symbol for Word {
        fn text(&self) -> &str {
            self.0
        }
    }

    fn trie() -> SymbolTrie<Word> {
        let mut trie = SymbolTrie::new();
        for (word, tag) in [("sin", 0), ("sinh", 0), ("cos", 0), ("-", 1), ("-", 2)] {
            trie.insert(Word(word, tag));
        }
        trie
    }

    #[test]
    fn longest_match_wins() {
        let trie = trie();
        let found = trie.find_longest_match("sinhabc", 0, |_| true).unwrap();
        assert_eq!((found.symbol.0, found.len), ("sinh", 4));

        let found = trie.find_longest_match("sinabc", 0, |_| true).unwrap();
        assert_eq!((found.symbol.0, found.len), ("sin", 3));

        assert_eq!(trie.find_longest_match("taa", 0, |_| true), None);
        assert_eq!(trie.find_longest_match("si", 0, |_| true), None);
    }

    #[test]
    fn match_at_offset() {
        let trie = trie();
        let found = trie.find_longest_match("2*cos(x)", 2, |_| true).unwrap();
        assert_eq!((found.symbol.0, found.len), ("cos", 3));
        assert_eq!(trie.find_longest_match("é", 1, |_| true), None);
    }

    #[test]
    fn predicate_filters_candidates() {
        let trie = trie();
        let found = trie.find_longest_match("-x", 0, |word| word.1 == 2).unwrap();
        assert_eq!(found.symbol.as_ref(), &Word("-", 2));

        // a rejected longer symbol falls back to a shorter accepted one
        let found = trie.find_longest_match("sinh", 0, |word| word.0 != "sinh").unwrap();
        assert_eq!(found.symbol.0, "sin");
    }

    #[test]
    fn remove_keeps_longer_symbols() {
        let mut trie = trie();
        assert_eq!(trie.len(), 5);

        let removed = trie.remove("sin");
        assert_eq!(removed.len(), 1);
        assert_eq!(trie.len(), 4);
        assert!(trie.get("sin").is_empty());
        assert_eq!(trie.get("sinh").len(), 1);

        assert!(trie.remove("sin").is_empty());
        assert_eq!(trie.remove("-").len(), 2);
        assert_eq!(
            trie.iter().map(|word| word.0).collect::<Vec<_>>(),
            vec!["cos", "sinh"],
        );
    }

    #[test]
    fn remove_prunes_branches() {
        let mut trie = SymbolTrie::new();
        trie.insert(Word("abc", 0));
        trie.remove("abc");
        assert!(trie.is_empty());
        assert!(trie.root.is_empty());
    }
}
