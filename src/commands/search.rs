//! Search the generated index from the command line

use anyhow::Result;

use crate::client::search::filter_posts;
use crate::client::{fetch_index, ClientSettings, DirFetcher};
use crate::content::PostMetadata;
use crate::Blog;

/// Load the persisted index and return the posts matching `term` and `tag`
pub async fn find(blog: &Blog, term: &str, tag: Option<&str>) -> Result<Vec<PostMetadata>> {
    let settings = ClientSettings::from(&blog.config);
    let fetcher = DirFetcher::new(&blog.base_dir);

    let posts = fetch_index(&fetcher, &settings.index_path).await?;
    Ok(filter_posts(&posts, term, tag).into_iter().cloned().collect())
}

/// Print the matching posts
pub async fn run(blog: &Blog, term: &str, tag: Option<&str>) -> Result<()> {
    let matches = find(blog, term, tag).await?;

    if matches.is_empty() {
        println!("{}", blog.config.no_results_text);
        return Ok(());
    }

    for post in &matches {
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            format!(" • {}", post.tags.join(", "))
        };
        println!("{}  {}{}", post.date, post.title, tags);
        println!("    {}", post.excerpt);
    }

    Ok(())
}
