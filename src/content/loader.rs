//! Content loader - loads posts from the category directories

use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::meta::{self, FileContext};
use super::{Category, FrontMatter, Post};
use crate::config::MissingDatePolicy;
use crate::error::LoadError;
use crate::helpers::{excerpt, post_slug, ReadingTime};
use crate::Blog;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    /// Date given to posts without one, fixed for the whole load
    today: NaiveDate,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            today: Local::now().date_naive(),
        }
    }

    /// Override the load-time date used for undated posts
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load all posts from every category directory, newest first
    ///
    /// Posts sharing a date keep their discovery order.
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let mut posts = Vec::new();

        for category in Category::ALL {
            for path in self.discover(category)? {
                posts.push(self.load_post(&path, category)?);
            }
        }

        warn_duplicate_slugs(&posts);

        // Stable sort: equal dates keep discovery order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.blog.content_dir);
        Ok(posts)
    }

    /// Markdown files under a category directory, in file-name order
    pub fn discover(&self, category: Category) -> Result<Vec<PathBuf>, LoadError> {
        let dir = self.category_dir(category);
        if !dir.is_dir() {
            tracing::debug!("Skipping missing {} directory {:?}", category, dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|source| LoadError::Walk {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && self.is_markdown_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Directory holding a category's posts
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.blog
            .content_dir
            .join(self.blog.config.categories.dir_for(category))
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, category: Category) -> Result<Post, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&raw);

        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Series posts are namespaced by the directory they sit in
        let series_dir = match category {
            Category::Series => path
                .parent()
                .and_then(|p| p.file_name())
                .map(|s| s.to_string_lossy().into_owned()),
            _ => None,
        };
        let slug = post_slug(&stem, series_dir.as_deref(), self.blog.config.slug_mode);

        let found = meta::resolve(&FileContext {
            stem: &stem,
            category,
            front_matter: &fm,
        });

        let date = match (found.date, self.blog.config.missing_date) {
            (Some(date), _) => date,
            (None, MissingDatePolicy::Today) => {
                tracing::debug!("{:?} has no date, using {}", path, self.today);
                self.today
            }
            (None, MissingDatePolicy::Error) => {
                return Err(LoadError::MissingDate(path.to_path_buf()))
            }
        };

        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let config = &self.blog.config;
        Ok(Post {
            slug,
            title: found.title.unwrap_or(file_name),
            content: body.to_string(),
            date,
            category,
            series: found.series,
            series_order: found.series_order,
            reading_time: ReadingTime::estimate(body, config.words_per_minute),
            excerpt: excerpt(body, config.excerpt_length),
            source,
            extra: fm.extra,
        })
    }

    fn is_markdown_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.blog.config.is_markdown_extension(e))
            .unwrap_or(false)
    }
}

fn warn_duplicate_slugs(posts: &[Post]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            tracing::warn!(
                "Duplicate slug {:?} ({}); lookups return the newest post",
                post.slug,
                post.source
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::helpers::SlugMode;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join("content").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_til_without_front_matter() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "TIL/2025.05.15_TIL.md", "# 오늘 배운 것\n\nRust 소유권");

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).with_today(today()).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(post.title, "TIL - 2025.05.15");
        assert_eq!(post.category, Category::Til);
        assert_eq!(post.slug, "20250515_til");
        assert_eq!(post.source, Path::new("TIL").join("2025.05.15_TIL.md").to_string_lossy());
    }

    #[test]
    fn test_series_file_name_pattern() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "Series/ElasticSearch/ElasticSearch 1 : 개요.md",
            "검색 엔진 소개",
        );

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).with_today(today()).load_posts().unwrap();

        let post = &posts[0];
        assert_eq!(post.series.as_deref(), Some("ElasticSearch"));
        assert_eq!(post.series_order, Some(1));
        assert_eq!(post.title, "ElasticSearch 1 : 개요");
        assert_eq!(post.slug, "elasticsearch-elasticsearch-1--");
        assert_eq!(post.category, Category::Series);
        assert_eq!(post.date, today());
    }

    #[test]
    fn test_hangul_slugs_follow_slug_mode() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Development/도커 정리.md", "---\ndate: 2024-01-01\n---\n컨테이너");

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].slug, "-");

        let config = BlogConfig {
            slug_mode: SlugMode::Unicode,
            ..Default::default()
        };
        let blog = Blog::with_config(dir.path(), config);
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].slug, "도커-정리");
    }

    #[test]
    fn test_mistyped_front_matter_field_keeps_title_and_date() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "Development/a.md",
            "---\ntitle: Real Title\ndate: 2024-03-01\nseriesOrder: 1.5\n---\nA",
        );
        write(
            dir.path(),
            "Development/b.md",
            "---\ntitle: [Rust, Notes]\ndate: 2024-03-02\n---\nB",
        );

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).with_today(today()).load_posts().unwrap();

        assert_eq!(posts[0].slug, "b");
        assert_eq!(posts[0].title, "b");
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(posts[1].title, "Real Title");
        assert_eq!(posts[1].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(posts[1].series_order, None);
    }

    #[test]
    fn test_front_matter_wins_and_body_is_stripped() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "Development/rust-errors.md",
            "---\ntitle: Error handling in Rust\ndate: 2024-03-01\ntags: [rust]\n---\nUse `?`.",
        );

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let post = &posts[0];
        assert_eq!(post.title, "Error handling in Rust");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(post.content, "Use `?`.");
        assert_eq!(post.excerpt, "Use `?`....");
        assert!(post.extra.contains_key("tags"));
        assert_eq!(post.slug, "rust-errors");
    }

    #[test]
    fn test_missing_directories_are_empty() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "AI/notes.txt", "not a post");
        write(dir.path(), "AI/images/diagram.png", "");
        write(dir.path(), "AI/nested/deeper/llm-basics.md", "---\ndate: 2024-06-01\n---\nLLM");

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "llm basics");
        assert_eq!(posts[0].category, Category::Ai);
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Development/a.md", "---\ndate: 2024-01-01\n---\nA");
        write(dir.path(), "Development/b.md", "---\ndate: 2024-06-01\n---\nB");
        write(dir.path(), "Development/c.md", "---\ndate: 2024-01-01\n---\nC");
        write(dir.path(), "AI/d.md", "---\ndate: 2024-01-01\n---\nD");

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_missing_date_policy_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Development/undated.md", "No date here");

        let config = BlogConfig {
            missing_date: MissingDatePolicy::Error,
            ..Default::default()
        };
        let blog = Blog::with_config(dir.path(), config);
        let err = ContentLoader::new(&blog).load_posts().unwrap_err();
        assert!(matches!(err, LoadError::MissingDate(_)));
    }

    #[test]
    fn test_custom_category_directory() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Notes/2024.12.24_TIL.md", "xmas");

        let mut config = BlogConfig::default();
        config.categories.til = "Notes".to_string();
        let blog = Blog::with_config(dir.path(), config);
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].category, Category::Til);
        assert_eq!(posts[0].title, "TIL - 2024.12.24");
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content/Development/binary.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let err = ContentLoader::new(&blog).load_posts().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_slugs_are_deterministic() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Series/Kafka/Kafka 1 : Intro.md", "x");
        write(dir.path(), "Development/Hello World.md", "y");

        let blog = Blog::with_config(dir.path(), BlogConfig::default());
        let first: Vec<_> = ContentLoader::new(&blog)
            .load_posts()
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        let second: Vec<_> = ContentLoader::new(&blog)
            .load_posts()
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(first, second);
    }
}
