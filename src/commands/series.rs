//! List series

use anyhow::Result;

use crate::library::Library;
use crate::Blog;

/// List every series, or the posts of one
pub fn run(blog: &Blog, name: Option<&str>) -> Result<()> {
    let library = Library::load(blog)?;

    match name {
        Some(name) => {
            // Accept both the display name and the URL slug
            let posts = library.posts_by_series(name);
            let (name, posts) = if posts.is_empty() {
                match library.series_by_slug(name) {
                    Some(series) => (series.name, series.posts),
                    None => (name, posts),
                }
            } else {
                (name, posts)
            };

            println!("{} ({}):", name, posts.len());
            for post in posts {
                let order = post
                    .series_order
                    .map(|o| o.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("  {:>3}. {} ({})", order, post.title, post.slug);
            }
        }
        None => {
            let all = library.all_series();
            println!("Series ({}):", all.len());
            for series in all {
                println!("  {} [{}] ({})", series.name, series.slug, series.len());
            }
        }
    }

    Ok(())
}
