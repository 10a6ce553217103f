//! mdsite: a minimal static site generator
//!
//! Reads Markdown content with YAML front matter, renders it to HTML,
//! wraps it in one of three document shells, and mirrors static assets
//! into a disposable output directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the site root
pub const CONFIG_FILE: &str = "site.yml";

/// A site to build: configuration plus its resolved directories
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Site root directory
    pub base_dir: PathBuf,
    /// Source directory
    pub source_dir: PathBuf,
    /// Content root inside the source directory
    pub content_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// External site template file
    pub template_file: PathBuf,
}

impl Site {
    /// Create a site from its root directory.
    ///
    /// Reads `site.yml` when present; otherwise every setting keeps its
    /// default, so an unconfigured site still builds.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let content_dir = source_dir.join(&config.content_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let template_file = base_dir.join(&config.template_file);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            content_dir,
            output_dir,
            template_file,
        })
    }

    /// Build the site
    pub fn build(&self) -> Result<generator::BuildSummary> {
        commands::build::run(self)
    }

    /// Delete the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
