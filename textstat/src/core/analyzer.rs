// src/core/analyzer.rs
use std::collections::HashMap;

use crate::models::{TextStats, WordFrequency};

/// Maximum number of entries in the word-frequency ranking.
const TOP_WORDS: usize = 5;

/// Computes descriptive statistics for a file's raw contents.
///
/// The bytes are decoded as UTF-8, lossily, so the function is total over
/// arbitrary input and never fails. `char_count` mirrors the raw byte
/// length rather than the decoded character count; every other count
/// operates on the decoded text.
///
/// # Arguments
///
/// * `file_name` - Display name recorded in the resulting statistics
/// * `bytes` - The file's contents, possibly empty
///
/// # Returns
///
/// A fully populated [`TextStats`] record. An empty input yields the
/// zero record with `line_count` 1.
#[must_use]
pub fn analyze(file_name: &str, bytes: &[u8]) -> TextStats {
    let content = String::from_utf8_lossy(bytes);
    let byte_size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);

    let words: Vec<&str> = content.split_whitespace().collect();

    // Splitting on '\n' covers CRLF too: the '\r' stays attached to the
    // preceding segment and never changes the segment count.
    let line_count = content.split('\n').count();

    let non_whitespace_char_count = content.chars().filter(|c| !c.is_whitespace()).count();

    TextStats {
        file_name: file_name.to_owned(),
        byte_size,
        char_count: byte_size,
        word_count: words.len(),
        line_count,
        non_whitespace_char_count,
        paragraph_count: count_paragraphs(&content),
        average_word_length: average_word_length(&words),
        common_words: rank_words(&words),
    }
}

/// Counts blank-line-delimited blocks that still contain text. Runs of
/// consecutive blank (whitespace-only) lines collapse into one boundary.
fn count_paragraphs(content: &str) -> usize {
    let mut paragraphs: usize = 0;
    let mut in_paragraph = false;

    for line in content.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs = paragraphs.saturating_add(1);
            in_paragraph = true;
        }
    }

    paragraphs
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn average_word_length(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total_chars: usize = words.iter().map(|word| word.chars().count()).sum();
    total_chars as f64 / words.len() as f64
}

/// Ranks the lowercased words by occurrence count, most frequent first,
/// truncated to [`TOP_WORDS`] entries. Equal counts order alphabetically
/// so the ranking is reproducible across runs.
fn rank_words(words: &[&str]) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let mut ranking: Vec<(String, usize)> = counts.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking.truncate(TOP_WORDS);

    ranking
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect()
}
