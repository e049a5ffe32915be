//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,

    // Directory
    /// Directory holding the markdown posts, relative to the base directory
    pub pages_dir: String,
    /// Path of the generated index, relative to the base directory
    pub index_file: String,

    // Writing
    pub excerpt_length: usize,
    pub no_content_text: String,

    // Client messages
    pub not_found_text: String,
    pub load_error_text: String,
    pub no_posts_text: String,
    pub no_results_text: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),

            pages_dir: "pages".to_string(),
            index_file: "posts.json".to_string(),

            excerpt_length: 150,
            no_content_text: "No content.".to_string(),

            not_found_text: "Post not found.".to_string(),
            load_error_text: "An error occurred while loading posts.".to_string(),
            no_posts_text: "No posts yet.".to_string(),
            no_results_text: "No matching posts.".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.index_file, "posts.json");
        assert_eq!(config.excerpt_length, 150);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Dev Notes
pages_dir: posts
comments: giscus
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Dev Notes");
        assert_eq!(config.pages_dir, "posts");
        assert_eq!(config.index_file, "posts.json");
        assert!(config.extra.contains_key("comments"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "index_file: public/index.json\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.index_file, "public/index.json");
        assert_eq!(config.title, "My Blog");
    }
}
