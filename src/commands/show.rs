//! Render one post page to stdout

use anyhow::Result;

use crate::client::{load_post, ClientSettings, DirFetcher, HtmlView, PostOutcome};
use crate::content::MarkdownRenderer;
use crate::helpers::encode_url;
use crate::Blog;

/// Render the page for `slug` the way the browser client would
pub async fn render(blog: &Blog, slug: &str) -> (PostOutcome, HtmlView) {
    let settings = ClientSettings::from(&blog.config);
    let fetcher = DirFetcher::new(&blog.base_dir);
    let converter = MarkdownRenderer::new();
    let mut view = HtmlView::default();

    let query = format!("?slug={}", encode_url(slug));
    let outcome = load_post(&fetcher, &converter, &mut view, &query, &settings).await;
    (outcome, view)
}

/// Print the rendered page; fails when the post could not be shown
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    let (outcome, view) = render(blog, slug).await;

    if !view.title.is_empty() {
        println!("<title>{}</title>", crate::helpers::html_escape(&view.title));
    }
    println!("{}", view.content);

    match outcome {
        PostOutcome::Rendered(_) => Ok(()),
        PostOutcome::NotFound => anyhow::bail!("No post with slug {:?}", slug),
        PostOutcome::Failed(e) => Err(e.into()),
    }
}
