//! List posts

use anyhow::Result;

use crate::content::{Category, Post};
use crate::library::Library;
use crate::Blog;

/// List posts, optionally only one category
pub fn run(blog: &Blog, category: Option<Category>) -> Result<()> {
    let library = Library::load(blog)?;

    let posts: Vec<&Post> = match category {
        Some(category) => library.posts_by_category(category),
        None => library.all_posts().iter().collect(),
    };

    match category {
        Some(category) => println!("{} posts ({}):", category.label(), posts.len()),
        None => println!("Posts ({}):", posts.len()),
    }
    for post in posts {
        println!("  {}", format_line(post));
    }

    Ok(())
}

/// One-line summary of a post
pub fn format_line(post: &Post) -> String {
    format!(
        "{} [{}] {} ({}) - {}",
        post.date.format("%Y-%m-%d"),
        post.category,
        post.title,
        post.slug,
        post.source
    )
}
