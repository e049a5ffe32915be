//! Content module - handles source documents, front-matter and post metadata

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, FrontValue};
pub use markdown::MarkdownRenderer;
pub use post::{
    extract_excerpt, extract_title, slug_from_filename, DeriveOptions, Document, PostMetadata,
    EXCERPT_LENGTH, NO_CONTENT_EXCERPT,
};
