//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown-to-HTML renderer
///
/// The dialect is fixed for the whole site: GFM extensions (tables,
/// strikethrough, task lists), typographic quotes and dashes, and
/// single newlines rendered as `<br>`. Raw HTML in the source passes
/// through untouched, so content files can embed forms and the like.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        // Soft breaks become hard breaks so single newlines survive
        // into the rendered page
        let events = parser.map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });

        let mut html_output = String::new();
        html::push_html(&mut html_output, events);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
