//! Content file model

use std::path::PathBuf;

use crate::content::FrontMatter;

/// Which document shell wraps a rendered body
///
/// Decided by where the file lives under the content root, not by
/// anything in the file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Blog post shell with a title and date byline
    Post,
    /// Standalone page shell with a title only
    Page,
    /// The site-wide external template, when one is configured
    Shell,
}

/// A single Markdown content file on its way through a build
#[derive(Debug, Clone)]
pub struct Document {
    /// Full source file path
    pub source: PathBuf,

    /// Path relative to the content root; drives the output location
    pub rel_path: PathBuf,

    /// Shell selected for this file
    pub layout: Layout,

    /// Parsed front-matter block
    pub front_matter: FrontMatter,

    /// Markdown body with the front matter stripped
    pub body: String,

    /// Rendered HTML body
    pub content: String,
}

impl Document {
    /// Output path relative to the output root: same location as the
    /// source, with an `.html` extension.
    pub fn output_rel_path(&self) -> PathBuf {
        self.rel_path.with_extension("html")
    }
}
