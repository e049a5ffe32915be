//! Source documents and the post metadata derived from them

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::FrontMatter;
use crate::config::BlogConfig;
use crate::helpers::format_utc_date;

/// Default excerpt length in characters
pub const EXCERPT_LENGTH: usize = 150;

/// Excerpt used when a post has no body text
pub const NO_CONTENT_EXCERPT: &str = "No content.";

lazy_static! {
    /// A level-1 heading: `#`, one or more spaces, then text
    static ref H1_RE: Regex = Regex::new(r"(?m)^# +(.*\S.*)$").unwrap();
    /// Markdown punctuation dropped from excerpts
    static ref MARKUP_RE: Regex = Regex::new(r"[#*_`\[\]()]").unwrap();
}

/// A markdown source file
#[derive(Debug, Clone)]
pub struct Document {
    /// File name including extension, e.g. `hello.md`
    pub filename: String,

    /// Raw file content
    pub content: String,

    /// Last modification time
    pub modified: DateTime<Utc>,
}

/// One entry of the post index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Identifier derived from the filename
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date (`YYYY-MM-DD`)
    pub date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Plain-text preview
    pub excerpt: String,

    /// Source file name, used to fetch the body again
    pub file: String,
}

/// Knobs for deriving metadata
#[derive(Debug, Clone)]
pub struct DeriveOptions {
    pub excerpt_length: usize,
    pub no_content_text: String,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            excerpt_length: EXCERPT_LENGTH,
            no_content_text: NO_CONTENT_EXCERPT.to_string(),
        }
    }
}

impl From<&BlogConfig> for DeriveOptions {
    fn from(config: &BlogConfig) -> Self {
        Self {
            excerpt_length: config.excerpt_length,
            no_content_text: config.no_content_text.clone(),
        }
    }
}

impl PostMetadata {
    /// Parse a document and derive its metadata
    pub fn from_document(doc: &Document, options: &DeriveOptions) -> Self {
        let (fm, body) = FrontMatter::parse(&doc.content);
        Self::derive(&doc.filename, doc.modified, &fm, body, options)
    }

    /// Build metadata from already-parsed front-matter and body.
    /// Explicit front-matter values win over anything derived from the body.
    pub fn derive(
        filename: &str,
        modified: DateTime<Utc>,
        fm: &FrontMatter,
        body: &str,
        options: &DeriveOptions,
    ) -> Self {
        let slug = slug_from_filename(filename);

        let date = fm
            .text("date")
            .unwrap_or_else(|| format_utc_date(&modified));

        let title = fm
            .text("title")
            .or_else(|| extract_title(body))
            .unwrap_or_else(|| slug.clone());

        let tags = fm.get("tags").map(|v| v.to_list()).unwrap_or_default();

        let excerpt = fm.text("excerpt").unwrap_or_else(|| {
            extract_excerpt(body, options.excerpt_length)
                .unwrap_or_else(|| options.no_content_text.clone())
        });

        Self {
            slug,
            title,
            date,
            tags,
            excerpt,
            file: filename.to_string(),
        }
    }

    /// Whether this post carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// File name without its extension
pub fn slug_from_filename(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}

/// Text of the first level-1 heading
pub fn extract_title(body: &str) -> Option<String> {
    H1_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// First line of plain text after the first level-1 heading is removed.
/// `None` when no non-empty line remains, or when that line is nothing but
/// markup (a `***` rule, say).
pub fn extract_excerpt(body: &str, max_chars: usize) -> Option<String> {
    let without_h1 = H1_RE.replace(body, "");

    let line = without_h1
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?;

    let text = MARKUP_RE.replace_all(line, "");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(truncate(text, max_chars))
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
