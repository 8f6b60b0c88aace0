//! Export the loaded content as JSON for the page renderer

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::Post;
use crate::library::{Library, MonthGroup, Series};
use crate::Blog;

/// Everything a page renderer needs
#[derive(Debug, Serialize)]
pub struct SiteData<'a> {
    pub title: &'a str,
    pub posts: &'a [Post],
    pub recent: &'a [Post],
    pub series: Vec<Series<'a>>,
    pub til: Vec<MonthGroup<'a>>,
}

impl<'a> SiteData<'a> {
    pub fn new(blog: &'a Blog, library: &'a Library) -> Self {
        Self {
            title: &blog.config.title,
            posts: library.all_posts(),
            recent: library.recent(blog.config.recent_posts),
            series: library.all_series(),
            til: library.til_by_month(),
        }
    }
}

/// Write the site data to `output`, or stdout when `None`
pub fn run(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let library = Library::load(blog)?;
    let json = serde_json::to_string_pretty(&SiteData::new(blog, &library))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!("Exported {} posts to {:?}", library.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
