//! The post list page

use super::{fetch_index, ClientSettings, Fetcher, Messages, Session, View};
use crate::content::PostMetadata;
use crate::generator::sort_index;

/// A post list with search box and tag filter, bound to a view
pub struct ListPage<'v, V: View> {
    session: Session,
    view: &'v mut V,
    messages: Messages,
}

impl<'v, V: View> ListPage<'v, V> {
    /// Fetch the index and initialize the page.
    ///
    /// On failure the error is rendered into `view` and `None` is returned.
    pub async fn load<F: Fetcher>(
        fetcher: &F,
        settings: &ClientSettings,
        view: &'v mut V,
    ) -> Option<Self> {
        match fetch_index(fetcher, &settings.index_path).await {
            Ok(mut posts) => {
                sort_index(&mut posts);
                Some(Self::init(posts, view, settings.messages.clone()))
            }
            Err(e) => {
                tracing::error!("Failed to load index: {}", e);
                view.show_message(&settings.messages.load_error, Some(&e.to_string()));
                None
            }
        }
    }

    /// Bind an already loaded index to a view and render it once
    pub fn init(posts: Vec<PostMetadata>, view: &'v mut V, messages: Messages) -> Self {
        let mut page = Self {
            session: Session::new(posts),
            view,
            messages,
        };
        page.render();
        page
    }

    /// Search box input changed
    pub fn on_search_input(&mut self, term: &str) {
        self.session.set_search(term);
        self.render();
    }

    /// A tag button was clicked
    pub fn on_tag_click(&mut self, tag: &str) {
        self.session.toggle_tag(tag);
        self.render();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn render(&mut self) {
        let tags = self.session.available_tags();
        if !tags.is_empty() {
            self.view.show_tags(tags, self.session.active_tag());
        }

        if self.session.posts().is_empty() {
            self.view.show_message(&self.messages.no_posts, None);
            return;
        }

        let filtered = self.session.filtered();
        if filtered.is_empty() {
            self.view.show_message(&self.messages.no_results, None);
        } else {
            self.view.show_posts(&filtered);
        }
    }
}
