//! Content loader - reads markdown documents from the pages directory

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::Document;
use crate::error::BuildError;

/// Read every `.md` file directly inside `dir`, in file name order.
///
/// Any unreadable entry aborts the whole scan.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>, BuildError> {
    if !dir.is_dir() {
        return Err(BuildError::SourceDirMissing(dir.to_path_buf()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BuildError::Scan {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }

        let document = load_document(path)?;
        tracing::debug!("Loaded {}", document.filename);
        documents.push(document);
    }

    Ok(documents)
}

/// Read a single document along with its modification time
pub fn load_document(path: &Path) -> Result<Document, BuildError> {
    let read_error = |source| BuildError::DocumentRead {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(read_error)?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(read_error)?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Document {
        filename,
        content,
        modified: DateTime::<Utc>::from(modified),
    })
}

/// Check if a file is a markdown post
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(".md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_documents_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "# B\n").unwrap();
        fs::write(dir.path().join("a.md"), "# A\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("draft.markdown"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.md"), "ignored").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
        assert_eq!(docs[0].content, "# A\n");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("pages");
        let err = load_documents(&missing).unwrap_err();
        assert!(matches!(err, BuildError::SourceDirMissing(_)));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_documents(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        let err = load_documents(dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::DocumentRead { .. }));
    }
}
