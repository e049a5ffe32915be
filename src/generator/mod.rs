//! Generator module - builds and persists the post index

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{loader, DeriveOptions, Document, PostMetadata};
use crate::error::BuildError;
use crate::helpers::parse_date;
use crate::Blog;

/// Outcome of a successful index build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Posts written, newest first
    pub posts: Vec<PostMetadata>,
    /// Where the index was written
    pub output: PathBuf,
}

impl BuildReport {
    /// Whether the source directory held no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Scans the pages directory and writes the post index
pub struct IndexGenerator<'a> {
    blog: &'a Blog,
    options: DeriveOptions,
}

impl<'a> IndexGenerator<'a> {
    /// Create a new generator
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            options: DeriveOptions::from(&blog.config),
        }
    }

    /// Run a full build. Every document is read before anything is written,
    /// so a failure leaves the previous index untouched.
    pub fn generate(&self) -> Result<BuildReport, BuildError> {
        let documents = loader::load_documents(&self.blog.pages_dir)?;

        if documents.is_empty() {
            tracing::warn!(
                "No markdown files found in {:?}, writing an empty index",
                self.blog.pages_dir
            );
        }

        let posts = build_index(&documents, &self.options);
        write_index(&self.blog.index_path, &posts)?;

        tracing::info!("Indexed {} posts into {:?}", posts.len(), self.blog.index_path);

        Ok(BuildReport {
            posts,
            output: self.blog.index_path.clone(),
        })
    }
}

/// Derive metadata for every document and order the result newest first
pub fn build_index(documents: &[Document], options: &DeriveOptions) -> Vec<PostMetadata> {
    let mut posts: Vec<_> = documents
        .iter()
        .map(|doc| PostMetadata::from_document(doc, options))
        .collect();
    sort_index(&mut posts);
    posts
}

/// Stable sort by date descending; unparseable dates go last
pub fn sort_index(posts: &mut [PostMetadata]) {
    posts.sort_by_key(|post| Reverse(parse_date(&post.date)));
}

/// Serialize the index as pretty JSON, replacing any previous file
pub fn write_index(path: &Path, posts: &[PostMetadata]) -> Result<(), BuildError> {
    let json = serde_json::to_string_pretty(posts)?;

    let write_error = |source| BuildError::WriteIndex {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)?;

    Ok(())
}
