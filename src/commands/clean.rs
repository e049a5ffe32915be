//! Remove the generated index

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Delete the index file if it exists
pub fn run(blog: &Blog) -> Result<()> {
    if blog.index_path.exists() {
        fs::remove_file(&blog.index_path)?;
        tracing::info!("Deleted: {:?}", blog.index_path);
    }

    Ok(())
}
