// src/models.rs
use serde::Serialize;

/// One entry in the word-frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Descriptive statistics for a single text file.
///
/// Built once per invocation by [`crate::core::analyzer::analyze`] and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    /// Base name of the input path.
    pub file_name: String,
    /// Raw byte length of the file.
    pub byte_size: u64,
    /// Byte length, kept as a proxy for the character count. Multi-byte
    /// UTF-8 sequences count once per byte here, not once per character.
    pub char_count: u64,
    pub word_count: usize,
    /// Number of line segments; an empty file still has one.
    pub line_count: usize,
    pub non_whitespace_char_count: usize,
    pub paragraph_count: usize,
    /// Mean character length of the words, 0.0 when there are none.
    pub average_word_length: f64,
    /// Up to five words ranked by descending occurrence count.
    pub common_words: Vec<WordFrequency>,
}
