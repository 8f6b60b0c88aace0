//! Slug helpers

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_WORD_ASCII: Regex = Regex::new(r"[^A-Za-z0-9_-]").unwrap();
    static ref NON_WORD_UNICODE: Regex = Regex::new(r"[^\w-]").unwrap();
}

/// Which characters count as word characters in a slug
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// ASCII letters, digits and `_` (default); Hangul and other scripts are dropped
    #[default]
    Ascii,
    /// Any Unicode word character
    Unicode,
}

/// Normalize text into a URL-safe slug
///
/// Lowercases, turns whitespace runs into `-` and drops anything that is
/// neither a word character nor `-`.
///
/// # Examples
/// ```ignore
/// slugify("Rust Ownership!", SlugMode::Ascii) // -> "rust-ownership"
/// slugify("도커 정리", SlugMode::Unicode)       // -> "도커-정리"
/// ```
pub fn slugify(text: &str, mode: SlugMode) -> String {
    let lower = text.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lower, "-");
    let non_word = match mode {
        SlugMode::Ascii => &*NON_WORD_ASCII,
        SlugMode::Unicode => &*NON_WORD_UNICODE,
    };
    non_word.replace_all(&dashed, "").into_owned()
}

/// Slug for a post file: `<parent>-<stem>` for series posts, else `<stem>`
pub fn post_slug(stem: &str, series_dir: Option<&str>, mode: SlugMode) -> String {
    match series_dir {
        Some(dir) => slugify(&format!("{}-{}", dir, stem), mode),
        None => slugify(stem, mode),
    }
}

/// URL slug of a series name
///
/// # Examples
/// ```ignore
/// series_slug("Elastic Search") // -> "elastic-search"
/// ```
pub fn series_slug(name: &str) -> String {
    WHITESPACE
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Rust Ownership!", SlugMode::Ascii), "rust-ownership");
        assert_eq!(slugify("2025.05.15_TIL", SlugMode::Ascii), "20250515_til");
        assert_eq!(slugify("  spaced   out ", SlugMode::Ascii), "-spaced-out-");
        assert_eq!(slugify("docker-compose 정리", SlugMode::Ascii), "docker-compose-");
        assert_eq!(slugify("도커 정리", SlugMode::Ascii), "-");
    }

    #[test]
    fn test_slugify_unicode_keeps_hangul() {
        assert_eq!(slugify("도커 정리", SlugMode::Unicode), "도커-정리");
        assert_eq!(slugify("Rust Ownership!", SlugMode::Unicode), "rust-ownership");
    }

    #[test]
    fn test_post_slug_series_prefix() {
        assert_eq!(
            post_slug("ElasticSearch 1 : 개요", Some("ElasticSearch"), SlugMode::Ascii),
            "elasticsearch-elasticsearch-1--"
        );
        assert_eq!(
            post_slug("ElasticSearch 1 : 개요", Some("ElasticSearch"), SlugMode::Unicode),
            "elasticsearch-elasticsearch-1--개요"
        );
        assert_eq!(post_slug("Hello World", None, SlugMode::Ascii), "hello-world");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Kafka 2 : Producer & Consumer", SlugMode::Ascii);
        assert_eq!(slugify(&once, SlugMode::Ascii), once);
    }

    #[test]
    fn test_slug_mode_from_yaml() {
        let mode: SlugMode = serde_yaml::from_str("unicode").unwrap();
        assert_eq!(mode, SlugMode::Unicode);
        assert_eq!(SlugMode::default(), SlugMode::Ascii);
    }

    #[test]
    fn test_series_slug() {
        assert_eq!(series_slug("Elastic Search"), "elastic-search");
        assert_eq!(series_slug("Kafka"), "kafka");
    }
}
