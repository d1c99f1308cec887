//! Character trie with the three keyword traversals.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index,
//! so the parent links used by replace backtracking carry no ownership.
//!
//! ## Example
//!
//! ```
//! use keyword_trie::Trie;
//!
//! let trie = Trie::from_words(["cat", "dog"], true);
//!
//! assert!(trie.is_match("Hot DOGS"));
//! assert_eq!(trie.replace("cats and dogs", "*"), "*s and *s");
//!
//! let found: Vec<_> = trie.find_iter("a cat").collect();
//! assert_eq!(found[0].value(), "cat");
//! assert_eq!(found[0].start_index(), 2);
//! ```

mod matches;
mod scan;

use std::collections::HashMap;

use crate::error::{KeywordError, Result};
use crate::fold;

pub use matches::Matches;

/// Index of a node in the arena
pub(crate) type NodeId = usize;

/// The root is always the first node in the arena.
pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Character on the edge from the parent (unused at the root)
    pub(crate) label: char,
    /// Path length from the root
    pub(crate) depth: usize,
    /// A dictionary word ends exactly here
    pub(crate) is_word: bool,
    pub(crate) parent: Option<NodeId>,
    /// Keyed by the folded character when case folding is on
    pub(crate) children: HashMap<char, NodeId>,
}

impl Node {
    fn new(label: char, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            label,
            depth,
            is_word: false,
            parent,
            children: HashMap::new(),
        }
    }
}

/// Keyword trie.
///
/// All offsets and lengths taken or returned by the traversals count `char`s.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    ignore_case: bool,
}

impl Trie {
    /// Create an empty trie.
    ///
    /// With `ignore_case`, ASCII letters match regardless of case.
    pub fn new(ignore_case: bool) -> Self {
        Self {
            nodes: vec![Node::new('\0', 0, None)],
            ignore_case,
        }
    }

    /// Build a trie holding every word of `words`.
    pub fn from_words<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(ignore_case);
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word. Inserting the same word again changes nothing.
    ///
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = ROOT;
        for c in word.chars() {
            let key = fold::key(c, self.ignore_case);
            node = match self.nodes[node].children.get(&key) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    let depth = self.nodes[node].depth + 1;
                    self.nodes.push(Node::new(c, depth, Some(node)));
                    self.nodes[node].children.insert(key, child);
                    child
                }
            };
        }
        self.nodes[node].is_word = true;
    }

    /// Whether letter case is ignored
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no word has been inserted
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Check whether `word` is exactly one of the inserted words.
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .try_fold(ROOT, |node, c| self.child(node, c))
            .is_some_and(|node| node != ROOT && self.nodes[node].is_word)
    }

    /// All stored words, sorted.
    ///
    /// Each word is spelled with the characters it was first inserted with.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_word)
            .map(|(id, _)| self.spell(id))
            .collect();
        words.sort();
        words
    }

    /// Reconstruct the path from the root to `id` through parent links.
    fn spell(&self, mut id: NodeId) -> String {
        let mut chars = Vec::with_capacity(self.nodes[id].depth);
        while let Some(parent) = self.nodes[id].parent {
            chars.push(self.nodes[id].label);
            id = parent;
        }
        chars.iter().rev().collect()
    }

    #[inline]
    pub(crate) fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node]
            .children
            .get(&fold::key(c, self.ignore_case))
            .copied()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Decode `text` and validate the scanning window `[start, start + length)`.
///
/// Returns the decoded chars (with byte offsets) and the window end.
pub(crate) fn window(
    text: &str,
    start: usize,
    length: usize,
) -> Result<(Vec<(usize, char)>, usize)> {
    if length == 0 {
        return Err(KeywordError::invalid_argument(
            "length",
            "must be greater than 0",
        ));
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let end = start
        .checked_add(length)
        .filter(|&end| end <= chars.len())
        .ok_or_else(|| {
            KeywordError::invalid_argument(
                "start",
                format!(
                    "window {}+{} exceeds text of {} chars",
                    start,
                    length,
                    chars.len()
                ),
            )
        })?;
    Ok((chars, end))
}
