//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Category;
use crate::helpers::SlugMode;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub title: String,

    // Directory
    pub content_dir: String,
    #[serde(default)]
    pub categories: CategoryDirs,
    pub markdown_extensions: Vec<String>,

    // Derived metadata
    pub slug_mode: SlugMode,
    pub words_per_minute: usize,
    pub excerpt_length: usize,
    pub missing_date: MissingDatePolicy,

    // Home page
    pub recent_posts: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "MyStudy Blog".to_string(),
            content_dir: "content".to_string(),
            categories: CategoryDirs::default(),
            markdown_extensions: vec!["md".to_string()],
            slug_mode: SlugMode::Ascii,
            words_per_minute: 200,
            excerpt_length: 200,
            missing_date: MissingDatePolicy::Today,
            recent_posts: 6,
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a file extension counts as markdown
    pub fn is_markdown_extension(&self, ext: &str) -> bool {
        self.markdown_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Top-level directory name for each category, relative to `content_dir`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDirs {
    pub development: String,
    pub series: String,
    pub til: String,
    pub ai: String,
}

impl Default for CategoryDirs {
    fn default() -> Self {
        Self {
            development: "Development".to_string(),
            series: "Series".to_string(),
            til: "TIL".to_string(),
            ai: "AI".to_string(),
        }
    }
}

impl CategoryDirs {
    /// Directory holding the posts of a category
    pub fn dir_for(&self, category: Category) -> &str {
        match category {
            Category::Development => &self.development,
            Category::Series => &self.series,
            Category::Til => &self.til,
            Category::Ai => &self.ai,
        }
    }
}

/// What to do with a post whose date can't be found anywhere
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDatePolicy {
    /// Use the local date at load time
    #[default]
    Today,
    /// Fail the load
    Error,
}
