//! Generate the post index

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::time::Duration;

use crate::generator::{BuildReport, IndexGenerator};
use crate::Blog;

/// Build the index once
pub fn run(blog: &Blog) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    let report = IndexGenerator::new(blog).generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}

/// Re-read `_config.yml` into `blog` and build again
pub fn rebuild(blog: &mut Blog) -> Result<BuildReport> {
    *blog = Blog::new(&blog.base_dir)?;
    run(blog)
}

/// Watch the pages directory and rebuild the index on every change
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Debounce to avoid rebuilding once per editor write
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;
    debouncer
        .watcher()
        .watch(&blog.pages_dir, RecursiveMode::NonRecursive)?;

    let config_path = blog.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching {:?}. Press Ctrl+C to stop.", blog.pages_dir);

    let mut blog = blog.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    // The index itself may live inside the watched directory
                    let relevant = events.iter().any(|e| e.path != blog.index_path);
                    if !relevant {
                        continue;
                    }

                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = rebuild(&mut blog) {
                        tracing::error!("Generation failed: {}", e);
                    }
                }
                Ok(Err(e)) => {
                    tracing::error!("Watch error: {:?}", e);
                }
                Err(_) => break,
            }
        }
    })
    .await?;

    Ok(())
}
