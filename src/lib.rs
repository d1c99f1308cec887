//! Keyword Trie - a multi-pattern keyword engine for content filtering
//!
//! This library checks texts against a fixed dictionary of words:
//! - Existence check (does the text contain any word?)
//! - Match enumeration (which words, and where?)
//! - Replacement (mask every word with a placeholder)
//! - ASCII case folding, on by default
//!
//! # Example
//!
//! ```rust
//! use keyword_trie::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.load(["spam", "scam"]);
//!
//! assert!(dict.exists("This is SPAM"));
//!
//! for m in dict.find("spam or scam?") {
//!     println!("{} at {}", m.value(), m.start_index());
//! }
//!
//! assert_eq!(dict.replace("no spam please", "****"), "no **** please");
//! ```
//!
//! # Matching rules
//!
//! The three operations scan the text left to right from every start offset,
//! following the trie as far as the text allows. They differ in which word
//! boundaries they accept:
//!
//! | Operation | Accepts |
//! |-----------|---------|
//! | `exists`  | Any word node along the path |
//! | `find`    | Only the deepest node reached |
//! | `replace` | The deepest word node at or above where the path stopped |
//!
//! Offsets and lengths count `char`s, not bytes.

pub mod dictionary;
pub mod error;
pub mod fold;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use dictionary::{Dictionary, DictionaryOptions};
pub use error::{KeywordError, Result};
pub use trie::{Matches, Trie};
pub use types::MatchedSpan;
