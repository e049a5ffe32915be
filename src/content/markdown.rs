//! Markdown rendering for post pages

use pulldown_cmark::{html, Options, Parser};

use super::FrontMatter;
use crate::client::HtmlConverter;

/// Markdown renderer backed by pulldown-cmark
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
    strip_frontmatter: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // YAML metadata blocks stay disabled; front-matter is handled by FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self {
            options,
            strip_frontmatter: true,
        }
    }

    /// Render front-matter blocks as ordinary markdown instead of dropping them
    pub fn keep_frontmatter(mut self) -> Self {
        self.strip_frontmatter = false;
        self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let source = if self.strip_frontmatter {
            FrontMatter::parse(markdown).1
        } else {
            markdown
        };

        let parser = Parser::new_ext(source, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlConverter for MarkdownRenderer {
    fn to_html(&self, markdown: &str) -> String {
        self.render(markdown)
    }
}
