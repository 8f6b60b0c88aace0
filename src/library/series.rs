//! Series grouping and navigation

use indexmap::IndexMap;
use serde::Serialize;

use super::Library;
use crate::content::Post;
use crate::helpers::series_slug;

/// A named series and its posts in reading order
#[derive(Debug, Clone, Serialize)]
pub struct Series<'a> {
    pub name: &'a str,
    /// URL slug of the series name
    pub slug: String,
    pub posts: Vec<&'a Post>,
}

impl<'a> Series<'a> {
    fn new(name: &'a str, mut posts: Vec<&'a Post>) -> Self {
        sort_by_order(&mut posts);
        Self {
            name,
            slug: series_slug(name),
            posts,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Previous and next post within a series
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SeriesNav<'a> {
    pub prev: Option<&'a Post>,
    pub next: Option<&'a Post>,
}

/// Stable sort by series order; a missing order counts as 0
fn sort_by_order(posts: &mut [&Post]) {
    posts.sort_by_key(|p| p.order_key());
}

impl Library {
    /// Posts of a series in reading order
    pub fn posts_by_series(&self, name: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| p.in_series(name)).collect();
        sort_by_order(&mut posts);
        posts
    }

    /// Every series, in order of first appearance in the collection
    pub fn all_series(&self) -> Vec<Series<'_>> {
        let mut groups: IndexMap<&str, Vec<&Post>> = IndexMap::new();
        for post in &self.posts {
            if let Some(name) = post.series.as_deref().filter(|s| !s.is_empty()) {
                groups.entry(name).or_default().push(post);
            }
        }

        groups
            .into_iter()
            .map(|(name, posts)| Series::new(name, posts))
            .collect()
    }

    /// Find a series from its URL slug
    ///
    /// Matches case-insensitively, reading `-` as a space, so both
    /// `elastic-search` and `Elastic Search` find "Elastic Search".
    pub fn series_by_slug(&self, slug: &str) -> Option<Series<'_>> {
        let wanted = slug.replace('-', " ").to_lowercase();
        self.all_series().into_iter().find(|s| {
            s.slug == slug || s.name.to_lowercase() == wanted
        })
    }

    /// The posts before and after `post` in its series
    pub fn series_neighbors(&self, post: &Post) -> SeriesNav<'_> {
        let Some(name) = post.series.as_deref() else {
            return SeriesNav::default();
        };
        let posts = self.posts_by_series(name);
        let Some(pos) = posts.iter().position(|p| p.slug == post.slug) else {
            return SeriesNav::default();
        };

        SeriesNav {
            prev: pos.checked_sub(1).map(|i| posts[i]),
            next: posts.get(pos + 1).copied(),
        }
    }
}
