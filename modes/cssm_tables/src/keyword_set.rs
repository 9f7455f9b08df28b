//! Insertion-ordered keyword set.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Deduplicated set of static words with O(1) membership.
///
/// Iteration yields words in first-insertion order, which is the order
/// completion lists present them in.
#[derive(Clone, Debug, Default)]
pub struct KeywordSet {
    words: Vec<&'static str>,
    index: FxHashSet<&'static str>,
}

impl KeywordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a word list, dropping repeats.
    pub fn from_words(words: &[&'static str]) -> Self {
        words.iter().copied().collect()
    }

    /// Insert `word`. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &'static str) -> bool {
        if self.index.insert(word) {
            self.words.push(word);
            true
        } else {
            false
        }
    }

    /// Exact, case-sensitive membership test.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    /// Words in insertion order, as a slice.
    pub fn as_slice(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<&'static str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<&'static str> for KeywordSet {
    fn extend<I: IntoIterator<Item = &'static str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

static EMPTY: OnceLock<KeywordSet> = OnceLock::new();

/// Shared empty set, for tables a dialect does not provide.
pub fn empty() -> &'static KeywordSet {
    EMPTY.get_or_init(KeywordSet::new)
}
