//! Content module - handles post discovery, parsing and metadata

mod frontmatter;
pub mod loader;
pub mod meta;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use post::{Category, Post, UnknownCategory};
