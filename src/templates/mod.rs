//! Document shells and placeholder substitution
//!
//! The blog-post and page shells are embedded in the binary. A third,
//! site-provided template file can wrap any other content. All three
//! use literal `{{key}}` placeholders, no template engine involved.

use anyhow::{Context, Result};
use std::fs;

use crate::content::{Document, FrontMatter, Layout};
use crate::Site;

/// Shell for blog posts: heading and date byline above the body
const POST_SHELL: &str = include_str!("post.html");

/// Shell for standalone pages: body only
const PAGE_SHELL: &str = include_str!("page.html");

/// Substituted when a referenced front-matter key has no value
const MISSING_VALUE: &str = "undefined";

/// Renders documents into complete HTML pages
pub struct TemplateRenderer {
    site_title: String,
    shell: Option<String>,
}

impl TemplateRenderer {
    /// Create a renderer, reading the external site template once when
    /// the configured file exists.
    pub fn new(site: &Site) -> Result<Self> {
        let shell = if site.template_file.is_file() {
            let text = fs::read_to_string(&site.template_file).with_context(|| {
                format!("Failed to read site template {:?}", site.template_file)
            })?;
            Some(text)
        } else {
            None
        };

        Ok(Self {
            site_title: site.config.title.clone(),
            shell,
        })
    }

    /// True when an external site template was found
    pub fn has_shell(&self) -> bool {
        self.shell.is_some()
    }

    /// Render a document into a full page.
    ///
    /// Returns `None` for a document that needs the external site
    /// template when none is configured.
    pub fn render(&self, document: &Document) -> Option<String> {
        match document.layout {
            Layout::Post => Some(self.render_fixed(POST_SHELL, document)),
            Layout::Page => Some(self.render_fixed(PAGE_SHELL, document)),
            Layout::Shell => self
                .shell
                .as_deref()
                .map(|shell| substitute(shell, &document.front_matter, &document.content)),
        }
    }

    /// Fixed shells substitute exactly the site title, page title, date,
    /// and body. A missing title or date renders as placeholder text
    /// rather than failing the build.
    fn render_fixed(&self, shell: &str, document: &Document) -> String {
        let fm = &document.front_matter;
        shell
            .replace("{{site_title}}", &self.site_title)
            .replace("{{title}}", &field(fm, "title"))
            .replace("{{date}}", &field(fm, "date"))
            .replace("{{content}}", &document.content)
    }
}

fn field(fm: &FrontMatter, key: &str) -> String {
    fm.get_str(key).unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Replace every `{{key}}` with its front-matter value, then drop the
/// rendered body in for `{{content}}`. Tokens without a matching key
/// stay in the output verbatim.
fn substitute(template: &str, fm: &FrontMatter, content: &str) -> String {
    let mut out = template.to_string();
    for (key, value) in fm.scalars() {
        if key == "content" {
            // Reserved for the rendered body
            continue;
        }
        let token = format!("{{{{{}}}}}", key);
        out = out.replace(&token, &value);
    }
    out.replace("{{content}}", content)
}
