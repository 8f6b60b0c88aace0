//! Free-text search with an optional category filter

use super::Library;
use crate::content::{Category, Post};

/// A search over titles and bodies
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    text: String,
    category: Option<Category>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            category: None,
        }
    }

    /// Restrict results to one category
    pub fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Case-insensitive substring match on title or content
    pub fn matches(&self, post: &Post) -> bool {
        if self.category.is_some_and(|c| c != post.category) {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        post.title.to_lowercase().contains(&self.text)
            || post.content.to_lowercase().contains(&self.text)
    }
}

impl Library {
    /// Posts matching a query, newest first
    pub fn search(&self, query: &SearchQuery) -> Vec<&Post> {
        self.posts.iter().filter(|p| query.matches(p)).collect()
    }
}
