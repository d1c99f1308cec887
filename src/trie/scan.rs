//! Existence check and replacement.

use super::{window, Trie, ROOT};
use crate::error::Result;

impl Trie {
    /// Check whether any word occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.scan_exists(&chars, 0, chars.len())
    }

    /// Check whether any word starts inside the window `[start, start + length)`.
    ///
    /// Fails with [`KeywordError::InvalidArgument`](crate::KeywordError) if
    /// `length` is 0 or the window reaches past the end of `text`.
    pub fn is_match_in(&self, text: &str, start: usize, length: usize) -> Result<bool> {
        let (chars, end) = window(text, start, length)?;
        let chars: Vec<char> = chars.into_iter().map(|(_, c)| c).collect();
        Ok(self.scan_exists(&chars, start, end))
    }

    /// Replace every word found in `text` with `placeholder`.
    pub fn replace(&self, text: &str, placeholder: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        self.scan_replace(&chars, placeholder, 0, chars.len())
    }

    /// Replace words inside the window `[start, start + length)`.
    ///
    /// Only the chars of the window are written to the output.
    pub fn replace_in(
        &self,
        text: &str,
        placeholder: &str,
        start: usize,
        length: usize,
    ) -> Result<String> {
        let (chars, end) = window(text, start, length)?;
        let chars: Vec<char> = chars.into_iter().map(|(_, c)| c).collect();
        Ok(self.scan_replace(&chars, placeholder, start, end))
    }

    /// Word status is tested at every depth along each extension.
    fn scan_exists(&self, chars: &[char], start: usize, end: usize) -> bool {
        for i in start..end {
            let Some(mut node) = self.child(ROOT, chars[i]) else {
                continue;
            };
            if self.node(node).is_word {
                return true;
            }
            for &c in &chars[i + 1..end] {
                match self.child(node, c) {
                    Some(next) if self.node(next).is_word => return true,
                    Some(next) => node = next,
                    None => break,
                }
            }
        }
        false
    }

    /// Greedy extension with backtracking to the nearest word boundary.
    fn scan_replace(&self, chars: &[char], placeholder: &str, start: usize, end: usize) -> String {
        let mut out = String::with_capacity(end - start);
        let mut i = start;

        while i < end {
            let first = chars[i];
            i += 1;

            if let Some(mut node) = self.child(ROOT, first) {
                let mut j = i;
                // Set once an extension step reaches a word node
                let mut recall = false;

                while j < end {
                    match self.child(node, chars[j]) {
                        Some(next) => {
                            node = next;
                            recall |= self.node(node).is_word;
                            j += 1;
                        }
                        None => {
                            if recall {
                                while !self.node(node).is_word {
                                    match self.node(node).parent {
                                        Some(parent) => {
                                            node = parent;
                                            j -= 1;
                                        }
                                        None => break,
                                    }
                                }
                            }
                            break;
                        }
                    }
                }

                if self.node(node).is_word {
                    out.push_str(placeholder);
                    i = j;
                    continue;
                }
            }

            out.push(first);
        }

        out
    }
}
