//! Monthly archive of TIL posts

use indexmap::IndexMap;
use serde::Serialize;

use super::Library;
use crate::content::{Category, Post};
use crate::helpers::month_key;

/// Posts written in one month
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup<'a> {
    /// "YYYY-MM"
    pub month: String,
    pub posts: Vec<&'a Post>,
}

impl Library {
    /// TIL posts grouped by month, latest month first
    pub fn til_by_month(&self) -> Vec<MonthGroup<'_>> {
        let mut months: IndexMap<String, Vec<&Post>> = IndexMap::new();
        for post in self.posts.iter().filter(|p| p.category == Category::Til) {
            months.entry(month_key(&post.date)).or_default().push(post);
        }
        months.sort_by(|a, _, b, _| b.cmp(a));

        months
            .into_iter()
            .map(|(month, posts)| MonthGroup { month, posts })
            .collect()
    }
}
