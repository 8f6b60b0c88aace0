//! Helper functions shared by the loader and the queries

mod date;
mod slug;
mod text;

pub use date::*;
pub use slug::*;
pub use text::*;
