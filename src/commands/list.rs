//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::{loader, DeriveOptions, PostMetadata};
use crate::generator::build_index;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = load_posts(blog)?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", post.date, post.title, post.file);
            }
        }
        "tag" | "tags" => {
            let posts = load_posts(blog)?;
            let tags = tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// Derive the index from the pages directory without writing it
fn load_posts(blog: &Blog) -> Result<Vec<PostMetadata>> {
    let documents = loader::load_documents(&blog.pages_dir)?;
    Ok(build_index(&documents, &DeriveOptions::from(&blog.config)))
}

/// Tags with their post counts, most used first, then by name
fn tag_counts(posts: &[PostMetadata]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
