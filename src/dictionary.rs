//! Dictionary facade.
//!
//! Holds the word list and the trie built from it. Every `load` rebuilds the
//! trie from scratch; there are no incremental updates.

use std::time::SystemTime;

use log::debug;

use crate::trie::{Matches, Trie};

/// Dictionary options.
#[derive(Debug, Clone)]
pub struct DictionaryOptions {
    /// Ignore ASCII letter case when matching
    pub ignore_case: bool,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self { ignore_case: true }
    }
}

impl DictionaryOptions {
    /// Create new dictionary options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case folding.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// Keyword dictionary.
///
/// Queries take `&self` and `load` takes `&mut self`, so a reload can never
/// race an in-flight query on the same instance. Callers sharing one
/// dictionary between threads publish a freshly loaded one instead.
#[derive(Debug, Clone)]
pub struct Dictionary {
    options: DictionaryOptions,
    words: Vec<String>,
    trie: Trie,
    updated_at: Option<SystemTime>,
}

impl Dictionary {
    /// Create an empty dictionary with default options.
    pub fn new() -> Self {
        Self::with_options(DictionaryOptions::default())
    }

    /// Create an empty dictionary.
    pub fn with_options(options: DictionaryOptions) -> Self {
        let trie = Trie::new(options.ignore_case);
        Self {
            options,
            words: Vec::new(),
            trie,
            updated_at: None,
        }
    }

    /// Replace the word list and rebuild the trie.
    pub fn load<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let trie = Trie::from_words(&words, self.options.ignore_case);

        debug!(
            "loaded {} words into {} trie nodes (ignore_case: {})",
            words.len(),
            trie.len(),
            self.options.ignore_case
        );

        self.words = words;
        self.trie = trie;
        self.updated_at = Some(SystemTime::now());
    }

    /// Check whether `text` contains any word.
    pub fn exists(&self, text: &str) -> bool {
        self.trie.is_match(text)
    }

    /// Enumerate the words found in `text` with their positions.
    pub fn find<'a>(&'a self, text: &'a str) -> Matches<'a> {
        self.trie.find_iter(text)
    }

    /// Copy `text` with every word found replaced by `placeholder`.
    pub fn replace(&self, text: &str, placeholder: &str) -> String {
        self.trie.replace(text, placeholder)
    }

    /// Words as supplied to the last `load`
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Time of the last `load`, `None` if never loaded
    pub fn updated_at(&self) -> Option<SystemTime> {
        self.updated_at
    }

    /// The underlying trie, for windowed queries
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Options this dictionary was created with
    pub fn options(&self) -> &DictionaryOptions {
        &self.options
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dictionary_is_empty() {
        let dict = Dictionary::new();
        assert!(dict.words().is_empty());
        assert!(dict.updated_at().is_none());
        assert!(!dict.exists("anything"));
        assert_eq!(dict.find("anything").count(), 0);
        assert_eq!(dict.replace("anything", "*"), "anything");
    }

    #[test]
    fn test_load_sets_words_and_timestamp() {
        let mut dict = Dictionary::new();
        let before = SystemTime::now();
        dict.load(["foo", "bar", "foo"]);

        assert_eq!(dict.words(), ["foo", "bar", "foo"]);
        assert!(dict.updated_at().is_some_and(|t| t >= before));
        assert_eq!(dict.trie().words(), vec!["bar", "foo"]);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut dict = Dictionary::new();
        dict.load(vec!["old".to_string()]);
        assert!(dict.exists("an old text"));

        dict.load(vec!["new".to_string()]);
        assert!(!dict.exists("an old text"));
        assert!(dict.exists("a new text"));
        assert_eq!(dict.words(), ["new"]);
    }

    #[test]
    fn test_options_case_sensitive() {
        let mut dict = Dictionary::with_options(DictionaryOptions::new().with_ignore_case(false));
        dict.load(["cat"]);
        assert!(!dict.options().ignore_case);
        assert!(dict.exists("cat"));
        assert!(!dict.exists("CAT"));
    }

    #[test]
    fn test_default_folds_case() {
        let mut dict = Dictionary::default();
        dict.load(["cat"]);
        assert!(dict.exists("Cat"));
        assert_eq!(dict.replace("CAT", "*"), "*");
    }
}
