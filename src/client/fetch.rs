//! Fetching the index and post sources

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::content::PostMetadata;
use crate::error::FetchError;

/// Retrieves text files relative to the site root
///
/// One request per call, no retries.
pub trait Fetcher {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetch and decode the post index
pub async fn fetch_index<F: Fetcher>(
    fetcher: &F,
    path: &str,
) -> Result<Vec<PostMetadata>, FetchError> {
    let text = fetcher.fetch_text(path).await?;
    serde_json::from_str(&text).map_err(|source| FetchError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Serves files from a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve a request path below the root. Paths escaping the root are
    /// treated as missing.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if safe {
            Some(self.root.join(relative))
        } else {
            None
        }
    }
}

impl Fetcher for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let full = self
            .resolve(path)
            .ok_or_else(|| FetchError::NotFound(path.to_string()))?;

        tracing::debug!("Fetching {:?}", full);

        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::NotFound(path.to_string())),
            Err(e) => Err(FetchError::Io {
                path: path.to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_dir_fetcher_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("pages").join("a.md"), "# A").unwrap();

        let fetcher = DirFetcher::new(dir.path());
        assert_eq!(fetcher.fetch_text("pages/a.md").await.unwrap(), "# A");
        assert_eq!(fetcher.fetch_text("/pages/a.md").await.unwrap(), "# A");
    }

    #[tokio::test]
    async fn test_dir_fetcher_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path());

        let err = fetcher.fetch_text("missing.json").await.unwrap_err();
        assert!(err.is_not_found());

        let err = fetcher.fetch_text("../etc/passwd").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_index_decodes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("posts.json"),
            r#"[{"slug":"a","title":"A","date":"2024-01-01","tags":["x"],"excerpt":"e","file":"a.md"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let fetcher = DirFetcher::new(dir.path());
        let posts = fetch_index(&fetcher, "posts.json").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].tags, vec!["x"]);

        let err = fetch_index(&fetcher, "broken.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
