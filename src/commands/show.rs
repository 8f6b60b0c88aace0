//! Show a single post

use anyhow::Result;

use crate::library::Library;
use crate::Blog;

/// Print a post's metadata and body
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let library = Library::load(blog)?;

    let Some(post) = library.post_by_slug(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    println!("{}", post.title);
    println!("  date:     {}", post.date.format("%Y-%m-%d"));
    println!("  category: {} ({})", post.category.label(), post.category);
    if let Some(series) = &post.series {
        match post.series_order {
            Some(order) => println!("  series:   {} #{}", series, order),
            None => println!("  series:   {}", series),
        }
        let nav = library.series_neighbors(post);
        if let Some(prev) = nav.prev {
            println!("  prev:     {}", prev.slug);
        }
        if let Some(next) = nav.next {
            println!("  next:     {}", next.slug);
        }
    }
    println!("  reading:  {}", post.reading_time);
    println!("  source:   {}", post.source);
    println!();
    println!("{}", post.content);

    Ok(())
}
