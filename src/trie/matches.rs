//! Lazy match enumeration.

use std::iter::FusedIterator;

use super::{window, Trie, ROOT};
use crate::error::Result;
use crate::types::MatchedSpan;

/// Iterator over the words found in a text, in increasing start order.
///
/// Spans never overlap, and the char right after a span never starts the
/// next one. Created by [`Trie::find_iter`] and [`Trie::find_in`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    trie: &'a Trie,
    text: &'a str,
    /// Byte offset of every char of `text`
    chars: Vec<(usize, char)>,
    cursor: usize,
    end: usize,
}

impl<'a> Matches<'a> {
    fn new(
        trie: &'a Trie,
        text: &'a str,
        chars: Vec<(usize, char)>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            trie,
            text,
            chars,
            cursor: start,
            end,
        }
    }

    /// Slice the chars `[start, end)` out of the original text.
    fn span(&self, start: usize, end: usize) -> MatchedSpan {
        let from = self.chars[start].0;
        let to = self
            .chars
            .get(end)
            .map_or(self.text.len(), |&(offset, _)| offset);
        MatchedSpan::new(&self.text[from..to], start, end - start)
    }
}

impl Iterator for Matches<'_> {
    type Item = MatchedSpan;

    fn next(&mut self) -> Option<MatchedSpan> {
        while self.cursor < self.end {
            let i = self.cursor;
            self.cursor += 1;

            let Some(mut node) = self.trie.child(ROOT, self.chars[i].1) else {
                continue;
            };

            // Follow the longest path; intermediate word nodes are not tested
            let mut j = i + 1;
            while j < self.end {
                match self.trie.child(node, self.chars[j].1) {
                    Some(next) => {
                        node = next;
                        j += 1;
                    }
                    None => break,
                }
            }

            let deepest = self.trie.node(node);
            if deepest.is_word {
                // The char that stopped the extension is skipped too
                self.cursor = j + 1;
                return Some(self.span(j - deepest.depth, j));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(self.cursor)))
    }
}

impl FusedIterator for Matches<'_> {}

impl Trie {
    /// Find all words in `text`.
    ///
    /// Only the deepest node reached from each start is tested, so a word that
    /// is a strict prefix of a longer path is reported only if that path ends
    /// on a word too.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> Matches<'a> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let end = chars.len();
        Matches::new(self, text, chars, 0, end)
    }

    /// Find words inside the window `[start, start + length)`.
    ///
    /// Fails with [`KeywordError::InvalidArgument`](crate::KeywordError) if
    /// `length` is 0 or the window reaches past the end of `text`.
    pub fn find_in<'a>(
        &'a self,
        text: &'a str,
        start: usize,
        length: usize,
    ) -> Result<Matches<'a>> {
        let (chars, end) = window(text, start, length)?;
        Ok(Matches::new(self, text, chars, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(trie: &Trie, text: &str) -> Vec<(String, usize, usize)> {
        trie.find_iter(text)
            .map(|m| (m.value().to_string(), m.start_index(), m.length()))
            .collect()
    }

    #[test]
    fn test_deepest_match_wins() {
        let trie = Trie::from_words(["cat", "catalog"], true);
        assert_eq!(spans(&trie, "catalog"), vec![("catalog".to_string(), 0, 7)]);
    }

    #[test]
    fn test_greedy_then_fallback() {
        let trie = Trie::from_words(["cat", "dog"], true);
        assert_eq!(spans(&trie, "cats"), vec![("cat".to_string(), 0, 3)]);
    }

    #[test]
    fn test_embedded_word_skipped() {
        // The path runs on to "catal", which is not a word; "cat" is not reported
        let trie = Trie::from_words(["cat", "catalog"], true);
        assert!(spans(&trie, "catalx").is_empty());
    }

    #[test]
    fn test_multiple_matches_in_order() {
        let trie = Trie::from_words(["cat", "dog"], true);
        assert_eq!(
            spans(&trie, "a Cat and a DOG"),
            vec![("Cat".to_string(), 2, 3), ("DOG".to_string(), 12, 3)]
        );
    }

    #[test]
    fn test_char_after_match_never_starts_next() {
        // 'c' stopped the extension of "ab", so "cd" is not reported
        let trie = Trie::from_words(["ab", "cd"], true);
        assert_eq!(spans(&trie, "abcd"), vec![("ab".to_string(), 0, 2)]);

        // With a separator in between both words are found
        assert_eq!(
            spans(&trie, "ab cd"),
            vec![("ab".to_string(), 0, 2), ("cd".to_string(), 3, 2)]
        );
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let trie = Trie::from_words(["词"], true);
        let found: Vec<_> = trie.find_iter("敏感词x词").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value(), "词");
        assert_eq!(found[0].start_index(), 2);
        assert_eq!(found[1].start_index(), 4);
        assert_eq!(found[1].length(), 1);
    }

    #[test]
    fn test_lazy_early_stop() {
        let trie = Trie::from_words(["a"], true);
        let mut iter = trie.find_iter("aaaa");
        assert_eq!(iter.next().map(|m| m.start_index()), Some(0));
        assert_eq!(iter.next().map(|m| m.start_index()), Some(2));
        drop(iter);
        assert_eq!(trie.find_iter("aaaa").count(), 2);
    }

    #[test]
    fn test_empty_text_and_empty_trie() {
        let trie = Trie::from_words(["a"], true);
        assert_eq!(trie.find_iter("").next(), None);

        let empty = Trie::new(true);
        assert_eq!(empty.find_iter("anything").count(), 0);
    }

    #[test]
    fn test_find_window() {
        let trie = Trie::from_words(["cat"], true);
        let found: Vec<_> = trie.find_in("cat cat cat", 4, 7).unwrap().collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start_index(), 4);
        assert_eq!(found[1].start_index(), 8);

        // Window cuts the second word short
        let found: Vec<_> = trie.find_in("cat cat", 0, 6).unwrap().collect();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_find_window_invalid() {
        let trie = Trie::from_words(["cat"], true);
        assert!(trie.find_in("cat", 0, 0).is_err());
        assert!(trie.find_in("cat", 1, 3).is_err());
    }
}
