//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Write a new post with a front-matter scaffold and return its path
pub fn run(blog: &Blog, title: &str) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", title);
    }

    fs::create_dir_all(&blog.pages_dir)?;
    let file_path = blog.pages_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: \"{}\"\ndate: {}\ntags: []\n---\n\n# {}\n",
        title.replace('"', "'"),
        now.format("%Y-%m-%d"),
        title
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    #[test]
    fn test_new_post_scaffold_parses() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = run(&blog, "Hello World: Part 1").unwrap();
        assert_eq!(path, blog.pages_dir.join("hello-world-part-1.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, body) = FrontMatter::parse(&content);
        assert_eq!(fm.text("title"), Some("Hello World: Part 1".to_string()));
        assert!(fm.text("date").is_some());
        assert_eq!(fm.get("tags").map(|t| t.to_list()), Some(Vec::new()));
        assert!(body.contains("# Hello World: Part 1"));
    }

    #[test]
    fn test_new_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        run(&blog, "Twice").unwrap();
        assert!(run(&blog, "Twice").is_err());
    }

    #[test]
    fn test_new_post_needs_usable_title() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, "???").is_err());
    }
}
