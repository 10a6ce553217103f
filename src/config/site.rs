//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Every field has a default matching the conventional site layout, so
/// a site without a `site.yml` builds out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Directory
    pub source_dir: String,
    pub output_dir: String,
    /// Content root, relative to the source directory
    pub content_dir: String,
    /// Subtree of the content root rendered with the blog-post shell
    pub posts_dir: String,
    /// Subtree of the content root rendered with the page shell
    pub pages_dir: String,
    /// Asset directories under the source directory, mirrored into the
    /// output when present
    pub asset_dirs: Vec<String>,
    /// Individual files under the source directory copied through
    /// unchanged when present
    pub copy_files: Vec<String>,

    // Templates
    /// Site template in the site root, wrapping content outside the
    /// posts and pages subtrees
    pub template_file: String,

    // Build
    /// Delete the output directory before building
    pub clean_output: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Static Site".to_string(),

            source_dir: "src".to_string(),
            output_dir: "dist".to_string(),
            content_dir: "content".to_string(),
            posts_dir: "blog/posts".to_string(),
            pages_dir: "pages".to_string(),
            asset_dirs: vec![
                "assets/css".to_string(),
                "assets/js".to_string(),
                "assets/images".to_string(),
            ],
            copy_files: vec!["index.html".to_string(), "blog/index.html".to_string()],

            template_file: "template.html".to_string(),

            clean_output: true,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config {:?}", path.as_ref()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", path.as_ref()))?;
        Ok(config)
    }
}
