//! Search posts

use anyhow::Result;

use super::list::format_line;
use crate::content::Category;
use crate::library::{Library, SearchQuery};
use crate::Blog;

/// Search titles and bodies
pub fn run(blog: &Blog, text: &str, category: Option<Category>) -> Result<()> {
    let library = Library::load(blog)?;

    let mut query = SearchQuery::new(text);
    if let Some(category) = category {
        query = query.in_category(category);
    }

    let found = library.search(&query);
    println!("Found {} posts:", found.len());
    for post in found {
        println!("  {}", format_line(post));
    }

    Ok(())
}
