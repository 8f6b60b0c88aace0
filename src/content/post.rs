//! Post model and category enumeration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::helpers::ReadingTime;

/// A study-note post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Slug (URL-friendly name), unique per collection
    pub slug: String,

    /// Post title
    pub title: String,

    /// Markdown body with the front-matter stripped
    pub content: String,

    /// Publication date
    pub date: NaiveDate,

    /// Category, decided by the top-level directory
    pub category: Category,

    /// Series name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Position within the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<u32>,

    /// Reading time estimate
    pub reading_time: ReadingTime,

    /// Plain-text preview of the body
    pub excerpt: String,

    /// Source file path, relative to the content directory
    pub source: String,

    /// Front-matter keys not recognized by the loader
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Position used when ordering a series; missing order sorts first
    pub fn order_key(&self) -> u32 {
        self.series_order.unwrap_or(0)
    }

    /// Check if this post belongs to the named series
    pub fn in_series(&self, name: &str) -> bool {
        self.series.as_deref() == Some(name)
    }
}

/// The fixed set of post categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Development,
    Series,
    Til,
    Ai,
}

impl Category {
    /// All categories, in discovery order
    pub const ALL: [Category; 4] = [
        Category::Development,
        Category::Series,
        Category::Til,
        Category::Ai,
    ];

    /// Lowercase key used in URLs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Series => "series",
            Category::Til => "til",
            Category::Ai => "ai",
        }
    }

    /// Display label shown on the blog
    pub fn label(&self) -> &'static str {
        match self {
            Category::Development => "개발",
            Category::Series => "시리즈",
            Category::Til => "TIL",
            Category::Ai => "AI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}. Available: development, series, til, ai")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
