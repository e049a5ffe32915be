//! HTML helper functions

use super::url::post_url;
use crate::content::PostMetadata;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a `<p class="loading">` status line
pub fn message_tag(message: &str) -> String {
    format!(r#"<p class="loading">{}</p>"#, html_escape(message))
}

/// Generate a `<span class="post-tag">` for each tag
pub fn tag_spans(tags: &[String], separator: &str) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="post-tag">{}</span>"#, html_escape(tag)))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Date and tags line shown under a post title
pub fn post_meta(post: &PostMetadata) -> String {
    meta_line(post, |tags| {
        tags.iter()
            .map(|t| html_escape(t))
            .collect::<Vec<_>>()
            .join(", ")
    })
}

/// The `post-meta` block, with tags rendered by `render_tags` when present
fn meta_line(post: &PostMetadata, render_tags: impl FnOnce(&[String]) -> String) -> String {
    if post.tags.is_empty() {
        format!(r#"<div class="post-meta">{}</div>"#, html_escape(&post.date))
    } else {
        format!(
            r#"<div class="post-meta">{} • {}</div>"#,
            html_escape(&post.date),
            render_tags(&post.tags)
        )
    }
}

/// Generate a linked card for the post list
pub fn post_card(post: &PostMetadata) -> String {
    let tags = if post.tags.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="post-tags">{}</div>"#,
            tag_spans(&post.tags, "")
        )
    };

    format!(
        r#"<a href="{}" class="post-card"><h2>{}</h2>{}<div class="post-excerpt">{}</div>{}</a>"#,
        html_escape(&post_url(&post.slug)),
        html_escape(&post.title),
        post_meta(post),
        html_escape(&post.excerpt),
        tags
    )
}

/// Generate a toggle button for the tag filter
pub fn tag_button(tag: &str, active: bool) -> String {
    let class = if active { "tag-btn active" } else { "tag-btn" };
    format!(
        r#"<button class="{}" data-tag="{}">{}</button>"#,
        class,
        html_escape(tag),
        html_escape(tag)
    )
}

/// Generate the full article markup for a single post
pub fn post_article(post: &PostMetadata, body_html: &str) -> String {
    format!(
        r#"<h1>{}</h1>{}<div class="post-body">{}</div>"#,
        html_escape(&post.title),
        meta_line(post, |tags| tag_spans(tags, " ")),
        body_html
    )
}
