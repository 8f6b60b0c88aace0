//! mystudy: content loader for a markdown study-notes blog
//!
//! Markdown notes live under one directory per category (development,
//! series, TIL, AI). This crate discovers them, reads their front-matter,
//! fills missing metadata from file names and exposes the result as a
//! [`library::Library`] snapshot that page renderers query.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod library;

use anyhow::Result;
use std::path::Path;

pub use error::LoadError;

/// The main blog handle
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Load every post into a queryable snapshot
    pub fn load(&self) -> Result<library::Library, LoadError> {
        library::Library::load(self)
    }
}
