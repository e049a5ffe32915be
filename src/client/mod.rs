//! Client side of the blog: loads the generated index and renders the post
//! list and single post pages through host-provided capabilities.
//!
//! The host supplies three things:
//! - a [`Fetcher`] that retrieves files relative to the site root,
//! - an [`HtmlConverter`] that turns markdown into HTML,
//! - a [`View`] that puts rendered output on screen.
//!
//! Nothing here panics or propagates on fetch failures; every error ends up
//! as an inline message on the view.

mod fetch;
pub mod list;
pub mod post;
pub mod search;
mod view;

pub use fetch::{fetch_index, DirFetcher, Fetcher};
pub use list::ListPage;
pub use post::{load_post, PostOutcome};
pub use search::Session;
pub use view::{HtmlView, View};

use crate::config::BlogConfig;

/// Converts markdown to HTML for the single post page
pub trait HtmlConverter {
    fn to_html(&self, markdown: &str) -> String;
}

/// User-facing status messages
#[derive(Debug, Clone)]
pub struct Messages {
    pub not_found: String,
    pub load_error: String,
    pub no_posts: String,
    pub no_results: String,
}

impl From<&BlogConfig> for Messages {
    fn from(config: &BlogConfig) -> Self {
        Self {
            not_found: config.not_found_text.clone(),
            load_error: config.load_error_text.clone(),
            no_posts: config.no_posts_text.clone(),
            no_results: config.no_results_text.clone(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::from(&BlogConfig::default())
    }
}

/// Where the client finds things and what it calls them
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Index path relative to the site root
    pub index_path: String,
    /// Directory holding the markdown posts, relative to the site root
    pub documents_dir: String,
    /// Site title, appended to post page titles
    pub site_title: String,
    pub messages: Messages,
}

impl From<&BlogConfig> for ClientSettings {
    fn from(config: &BlogConfig) -> Self {
        Self {
            index_path: config.index_file.clone(),
            documents_dir: config.pages_dir.clone(),
            site_title: config.title.clone(),
            messages: Messages::from(config),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from(&BlogConfig::default())
    }
}
