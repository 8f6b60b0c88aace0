//! TIL archive

use anyhow::Result;

use crate::library::Library;
use crate::Blog;

/// Print TIL posts grouped by month
pub fn run(blog: &Blog) -> Result<()> {
    let library = Library::load(blog)?;

    for group in library.til_by_month() {
        println!("{} ({})", group.month, group.posts.len());
        for post in group.posts {
            println!("  {} ({})", post.title, post.slug);
        }
    }

    Ok(())
}
