//! Content loader - discovers and parses Markdown files under the content root

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{Document, FrontMatter, Layout, MarkdownRenderer};
use crate::helpers::fs::list_files_with_extension;
use crate::Site;

/// Loads content files from the content root
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every Markdown file under the content root.
    ///
    /// A missing content root is an empty site, not an error. A file
    /// with malformed front matter aborts the whole load.
    pub fn load_all(&self) -> Result<Vec<Document>> {
        let files = list_files_with_extension(&self.site.content_dir, "md");

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            documents.push(self.load_document(&path)?);
        }

        Ok(documents)
    }

    fn load_document(&self, path: &Path) -> Result<Document> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;

        let (front_matter, body) = FrontMatter::parse(&raw)
            .with_context(|| format!("Bad front matter in {:?}", path))?;

        let rel_path = path
            .strip_prefix(&self.site.content_dir)
            .unwrap_or(path)
            .to_path_buf();
        let layout = self.classify(&rel_path);
        let content = self.renderer.render(body);

        Ok(Document {
            source: path.to_path_buf(),
            rel_path,
            layout,
            front_matter,
            body: body.to_string(),
            content,
        })
    }

    /// Pick a shell by the file's location: the posts subtree gets the
    /// blog layout, the pages subtree the page layout, anything else
    /// the external site template.
    fn classify(&self, rel_path: &Path) -> Layout {
        if rel_path.starts_with(&self.site.config.posts_dir) {
            Layout::Post
        } else if rel_path.starts_with(&self.site.config.pages_dir) {
            Layout::Page
        } else {
            Layout::Shell
        }
    }
}
