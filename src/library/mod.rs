//! Library - an in-memory snapshot of every post, with query views
//!
//! The snapshot is built once per load and handed to callers by reference;
//! [`Library::reload`] is the only way it changes.

mod archive;
mod search;
mod series;

use crate::content::{Category, ContentLoader, Post};
use crate::error::LoadError;
use crate::Blog;

pub use archive::MonthGroup;
pub use search::SearchQuery;
pub use series::{Series, SeriesNav};

/// All posts of the blog, newest first
#[derive(Debug, Clone, Default)]
pub struct Library {
    posts: Vec<Post>,
}

impl Library {
    /// Load every post of a blog
    pub fn load(blog: &Blog) -> Result<Self, LoadError> {
        Self::load_with(&ContentLoader::new(blog))
    }

    /// Load with a preconfigured loader
    pub fn load_with(loader: &ContentLoader<'_>) -> Result<Self, LoadError> {
        let posts = loader.load_posts()?;
        tracing::info!("Loaded {} posts", posts.len());
        Ok(Self::from_posts(posts))
    }

    /// Build a snapshot from already-loaded posts
    pub fn from_posts(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { posts }
    }

    /// Re-read everything from disk, replacing the snapshot
    ///
    /// On error the previous snapshot is kept.
    pub fn reload(&mut self, blog: &Blog) -> Result<(), LoadError> {
        *self = Self::load(blog)?;
        Ok(())
    }

    /// All posts, newest first
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by slug
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts of one category, newest first
    pub fn posts_by_category(&self, category: Category) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.category == category).collect()
    }

    /// The `n` newest posts
    pub fn recent(&self, n: usize) -> &[Post] {
        &self.posts[..n.min(self.posts.len())]
    }
}
