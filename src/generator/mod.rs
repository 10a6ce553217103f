//! Generator module - mirrors assets and writes rendered pages into the
//! output directory

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::time::Duration;

use crate::content::{Document, Layout};
use crate::helpers::fs::{copy_dir_all, copy_file, ensure_dir};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Counts reported by a completed build
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildSummary {
    /// Files rendered with the blog-post shell
    pub posts: usize,
    /// Files rendered with the page shell
    pub pages: usize,
    /// Files rendered with the external site template
    pub documents: usize,
    /// Static files copied through unchanged
    pub assets: usize,
    /// Wall-clock build time
    pub elapsed: Duration,
}

impl BuildSummary {
    /// Total number of rendered HTML pages
    pub fn rendered(&self) -> usize {
        self.posts + self.pages + self.documents
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} posts, {} pages, {} documents, {} assets in {:.2}s",
            self.posts,
            self.pages,
            self.documents,
            self.assets,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Renders documents and mirrors static assets
pub struct Generator<'a> {
    site: &'a Site,
    templates: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator, loading the external site template if
    /// one exists.
    pub fn new(site: &'a Site) -> Result<Self> {
        let templates = TemplateRenderer::new(site)?;
        Ok(Self { site, templates })
    }

    /// Run the asset and content stages against an already loaded set
    /// of documents. Assets are mirrored first, then every document is
    /// rendered and written.
    pub fn generate(&self, documents: &[Document]) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();

        self.copy_assets(&mut summary)?;
        self.render_documents(documents, &mut summary)?;

        Ok(summary)
    }

    /// Mirror configured asset directories and copy allow-listed files.
    ///
    /// Missing directories and files are skipped: a site without images
    /// is not an error.
    fn copy_assets(&self, summary: &mut BuildSummary) -> Result<()> {
        for dir in &self.site.config.asset_dirs {
            let src = self.site.source_dir.join(dir);
            if !src.is_dir() {
                tracing::debug!("No asset directory {:?}, skipped", src);
                continue;
            }

            let dest = self.site.output_dir.join(dir);
            let copied = copy_dir_all(&src, &dest)?;
            summary.assets += copied;
            tracing::info!("Copied {} files from {:?}", copied, src);
        }

        for file in &self.site.config.copy_files {
            let src = self.site.source_dir.join(file);
            if !src.is_file() {
                tracing::debug!("No file {:?}, skipped", src);
                continue;
            }

            let dest = self.site.output_dir.join(file);
            copy_file(&src, &dest)?;
            summary.assets += 1;
            tracing::info!("Copied: {:?} -> {:?}", src, dest);
        }

        Ok(())
    }

    /// Write one HTML file per document, at the source's relative path
    /// with an `.html` extension.
    fn render_documents(&self, documents: &[Document], summary: &mut BuildSummary) -> Result<()> {
        if !self.templates.has_shell() {
            tracing::debug!("No site template; only the posts and pages subtrees render");
        }

        for document in documents {
            let Some(html) = self.templates.render(document) else {
                tracing::warn!("No site template for {:?}, skipped", document.rel_path);
                continue;
            };

            let output_path = self.site.output_dir.join(document.output_rel_path());
            if let Some(parent) = output_path.parent() {
                ensure_dir(parent)?;
            }
            fs::write(&output_path, html)
                .with_context(|| format!("Failed to write {:?}", output_path))?;

            match document.layout {
                Layout::Post => summary.posts += 1,
                Layout::Page => summary.pages += 1,
                Layout::Shell => summary.documents += 1,
            }
            tracing::info!(
                "Processed: {:?} -> {:?}",
                document.rel_path,
                document.output_rel_path()
            );
        }

        Ok(())
    }
}
