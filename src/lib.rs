//! blogkit: a static blog toolkit
//!
//! At build time the markdown posts of a pages directory are reduced to a
//! JSON index (`posts.json`). The [`client`] module loads that index again to
//! drive a searchable post list and single-post pages.

pub mod client;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The blog being built
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown source directory
    pub pages_dir: PathBuf,
    /// Generated index file
    pub index_path: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let pages_dir = base_dir.join(&config.pages_dir);
        let index_path = base_dir.join(&config.index_file);

        Ok(Self {
            config,
            base_dir,
            pages_dir,
            index_path,
        })
    }

    /// Build the post index
    pub fn generate(&self) -> Result<generator::BuildReport> {
        commands::generate::run(self)
    }

    /// Remove the generated index
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::run(self, title)
    }
}
