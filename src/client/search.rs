//! Search and tag filtering over the loaded index

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::content::PostMetadata;

/// Filter state of one list page
///
/// The index itself is shared and never modified; every call to
/// [`Session::filtered`] recomputes the view from scratch.
#[derive(Debug, Clone)]
pub struct Session {
    posts: Arc<[PostMetadata]>,
    tags: Vec<String>,
    search: String,
    active_tag: Option<String>,
}

impl Session {
    /// Start a session over a loaded index
    pub fn new(posts: impl Into<Arc<[PostMetadata]>>) -> Self {
        let posts = posts.into();
        let tags = collect_tags(&posts);
        Self {
            posts,
            tags,
            search: String::new(),
            active_tag: None,
        }
    }

    /// The full, unfiltered index
    pub fn posts(&self) -> &[PostMetadata] {
        &self.posts
    }

    /// Every tag in the index, sorted and deduplicated
    pub fn available_tags(&self) -> &[String] {
        &self.tags
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Select `tag`, or clear the filter if it is already selected
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
    }

    /// Posts matching the current search term and tag, in index order
    pub fn filtered(&self) -> Vec<&PostMetadata> {
        filter_posts(&self.posts, &self.search, self.active_tag.as_deref())
    }
}

/// Posts matching `term` (case-insensitive, against title, excerpt and tags)
/// and carrying `tag` when one is given
pub fn filter_posts<'a>(
    posts: &'a [PostMetadata],
    term: &str,
    tag: Option<&str>,
) -> Vec<&'a PostMetadata> {
    let term = term.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_term(post, &term) && tag.map_or(true, |t| post.has_tag(t)))
        .collect()
}

/// `term` must already be lowercase
fn matches_term(post: &PostMetadata, term: &str) -> bool {
    term.is_empty()
        || post.title.to_lowercase().contains(term)
        || post.excerpt.to_lowercase().contains(term)
        || post.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Sorted union of all tags
pub fn collect_tags(posts: &[PostMetadata]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
