//! The single post page

use super::{fetch_index, ClientSettings, Fetcher, HtmlConverter, View};
use crate::content::PostMetadata;
use crate::error::FetchError;
use crate::helpers::{document_path, query_param};

/// What the post page ended up showing
#[derive(Debug)]
pub enum PostOutcome {
    Rendered(PostMetadata),
    NotFound,
    Failed(FetchError),
}

/// Load the post selected by the `slug` parameter of `query` and render it.
///
/// Errors are rendered into `view`; the outcome only reports what happened.
pub async fn load_post<F, C, V>(
    fetcher: &F,
    converter: &C,
    view: &mut V,
    query: &str,
    settings: &ClientSettings,
) -> PostOutcome
where
    F: Fetcher,
    C: HtmlConverter,
    V: View,
{
    let messages = &settings.messages;

    let Some(slug) = query_param(query, "slug").filter(|s| !s.is_empty()) else {
        view.show_message(&messages.not_found, None);
        return PostOutcome::NotFound;
    };

    let posts = match fetch_index(fetcher, &settings.index_path).await {
        Ok(posts) => posts,
        Err(e) => return fail(view, &messages.load_error, e),
    };

    let Some(post) = posts.into_iter().find(|p| p.slug == slug) else {
        tracing::debug!("No post with slug {:?}", slug);
        view.show_message(&messages.not_found, None);
        return PostOutcome::NotFound;
    };

    let path = document_path(&settings.documents_dir, &post.file);
    let markdown = match fetcher.fetch_text(&path).await {
        Ok(markdown) => markdown,
        Err(e) if e.is_not_found() => {
            tracing::warn!("Post {:?} is indexed but {} is missing", slug, path);
            view.show_message(&messages.not_found, None);
            return PostOutcome::NotFound;
        }
        Err(e) => return fail(view, &messages.load_error, e),
    };

    let html = converter.to_html(&markdown);
    view.set_page_title(&format!("{} - {}", post.title, settings.site_title));
    view.show_post(&post, &html);

    PostOutcome::Rendered(post)
}

fn fail<V: View>(view: &mut V, message: &str, error: FetchError) -> PostOutcome {
    tracing::error!("Failed to load post: {}", error);
    view.show_message(message, Some(&error.to_string()));
    PostOutcome::Failed(error)
}
