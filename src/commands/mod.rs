//! CLI command implementations

pub mod export;
pub mod list;
pub mod search;
pub mod series;
pub mod show;
pub mod til;
