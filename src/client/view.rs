//! Rendering targets for the client pages

use crate::content::PostMetadata;
use crate::helpers::{message_tag, post_article, post_card, tag_button};

/// The UI surface a page renders into
pub trait View {
    /// Replace the post list
    fn show_posts(&mut self, posts: &[&PostMetadata]);

    /// Replace the tag filter buttons
    fn show_tags(&mut self, tags: &[String], active: Option<&str>);

    /// Replace the main content with a status message
    fn show_message(&mut self, message: &str, detail: Option<&str>);

    /// Replace the main content with a rendered post
    fn show_post(&mut self, post: &PostMetadata, body_html: &str);

    /// Set the document title
    fn set_page_title(&mut self, title: &str);
}

/// A [`View`] that renders to HTML strings
#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    /// Post list, or the post page when a single post is shown
    pub content: String,
    /// Tag filter buttons
    pub tags: String,
    /// Document title
    pub title: String,
}

impl View for HtmlView {
    fn show_posts(&mut self, posts: &[&PostMetadata]) {
        self.content = posts.iter().map(|post| post_card(post)).collect();
    }

    fn show_tags(&mut self, tags: &[String], active: Option<&str>) {
        self.tags = tags
            .iter()
            .map(|tag| tag_button(tag, active == Some(tag.as_str())))
            .collect();
    }

    fn show_message(&mut self, message: &str, detail: Option<&str>) {
        self.content = message_tag(message);
        if let Some(detail) = detail {
            self.content.push_str(&message_tag(detail));
        }
    }

    fn show_post(&mut self, post: &PostMetadata, body_html: &str) {
        self.content = post_article(post, body_html);
    }

    fn set_page_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str) -> PostMetadata {
        PostMetadata {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            date: "2024-01-01".to_string(),
            tags: vec![],
            excerpt: String::new(),
            file: format!("{}.md", slug),
        }
    }

    #[test]
    fn test_show_posts_replaces_content() {
        let (a, b) = (post("a"), post("b"));
        let mut view = HtmlView::default();
        view.show_message("loading", None);
        view.show_posts(&[&a, &b]);
        assert!(view.content.contains("slug=a"));
        assert!(view.content.contains("slug=b"));
        assert!(!view.content.contains("loading"));
    }

    #[test]
    fn test_show_tags_marks_active() {
        let mut view = HtmlView::default();
        view.show_tags(&["go".to_string(), "rust".to_string()], Some("rust"));
        assert!(view.tags.contains(r#"<button class="tag-btn" data-tag="go">"#));
        assert!(view.tags.contains(r#"<button class="tag-btn active" data-tag="rust">"#));
    }

    #[test]
    fn test_show_message_with_detail() {
        let mut view = HtmlView::default();
        view.show_message("Failed", Some("not found: posts.json"));
        assert_eq!(
            view.content,
            r#"<p class="loading">Failed</p><p class="loading">not found: posts.json</p>"#
        );
    }
}
