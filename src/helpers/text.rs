//! Text-derived metadata: reading time and excerpts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated reading time of a body of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Human-readable form, e.g. "3 min read"
    pub text: String,
    /// Unrounded minutes
    pub minutes: f64,
    /// Counted words
    pub words: usize,
}

impl ReadingTime {
    /// Estimate the reading time of `text` at `words_per_minute`
    ///
    /// Whitespace separates words, and every CJK character counts as a
    /// word of its own.
    pub fn estimate(text: &str, words_per_minute: usize) -> Self {
        let words = count_words(text);
        let minutes = words as f64 / words_per_minute.max(1) as f64;
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

        Self {
            text: format!("{} min read", displayed),
            minutes,
            words,
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn count_words(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }

    words
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}'     // Hangul Jamo
        | '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A0}'..='\u{30FF}'   // Katakana
        | '\u{3130}'..='\u{318F}'   // Hangul Compatibility Jamo
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}'   // Hangul Syllables
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
    )
}

/// Build a plain-text preview from the first `length` characters of `content`
///
/// Heading markers and line breaks become spaces; the result always ends
/// with "...".
pub fn excerpt(content: &str, length: usize) -> String {
    let head: String = content
        .chars()
        .take(length)
        .map(|c| match c {
            '#' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect();

    format!("{}...", head.trim())
}
