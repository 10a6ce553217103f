//! Content module - front matter, Markdown rendering, and file loading

mod document;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{Document, Layout};
pub use frontmatter::{FrontMatter, ParseError};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
