use std::fmt;

/// A dictionary word found in a text.
///
/// Offsets and lengths are counted in `char`s of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedSpan {
    value: String,
    start_index: usize,
    length: usize,
}

impl MatchedSpan {
    pub(crate) fn new(value: impl Into<String>, start_index: usize, length: usize) -> Self {
        Self {
            value: value.into(),
            start_index,
            length,
        }
    }

    /// The matched substring, exactly as it appears in the text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Offset of the first matched char
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of matched chars
    pub fn length(&self) -> usize {
        self.length
    }

    /// Offset one past the last matched char
    pub fn end_index(&self) -> usize {
        self.start_index + self.length
    }
}

impl fmt::Display for MatchedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
