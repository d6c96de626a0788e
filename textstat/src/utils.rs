// src/utils.rs
use crate::models::TextStats;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Formats a byte count with binary prefixes (1024 scale), rounded to two
/// decimal places with trailing zeros trimmed.
///
/// # Examples
///
/// ```
/// use textstat::utils::format_size;
///
/// assert_eq!(format_size(512), "512 Bytes");
/// assert_eq!(format_size(2048), "2 KB");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn format_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{} GB", trim_decimals(bytes as f64 / GB as f64))
    } else if bytes >= MB {
        format!("{} MB", trim_decimals(bytes as f64 / MB as f64))
    } else if bytes >= KB {
        format!("{} KB", trim_decimals(bytes as f64 / KB as f64))
    } else {
        format!("{bytes} Bytes")
    }
}

fn trim_decimals(value: f64) -> String {
    format!("{value:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Prints the base report for a single file.
pub fn print_report(stats: &TextStats) {
    println!("File: {}", stats.file_name);
    println!("Size: {}", format_size(stats.byte_size));
    println!("Characters: {}", stats.char_count);
    println!("Words: {}", stats.word_count);
    println!("Lines: {}", stats.line_count);
}

/// Prints the extended section shown when `--detail` is set.
pub fn print_detail(stats: &TextStats) {
    println!("Non-whitespace characters: {}", stats.non_whitespace_char_count);
    println!("Paragraphs: {}", stats.paragraph_count);
    println!(
        "Average word length: {:.2} characters",
        stats.average_word_length
    );
    println!("Most common words:");
    for entry in &stats.common_words {
        println!("  \"{}\": {} occurrences", entry.word, entry.count);
    }
}
