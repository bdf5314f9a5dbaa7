// Local filesystem adapter - Directory listings for inputs and assets

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default, Clone)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for LocalFsAdapter {
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
        if !dir.is_dir() {
            return Err(DomainError::FsFail(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                DomainError::FsFail(format!("Failed to list {}: {}", dir.display(), e))
            })?;
            entries.push(entry.into_path());
        }

        debug!(dir = %dir.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn list_image_source(&self, source: &Path) -> Result<Vec<PathBuf>, DomainError> {
        if source.is_file() {
            return Ok(vec![source.to_path_buf()]);
        }

        if source.is_dir() {
            let mut images = self.list_dir(source)?;
            images.sort_by(|a, b| b.cmp(a));
            return Ok(images);
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.mp4"), b"a").unwrap();
        fs::write(temp.path().join("b.mp4"), b"b").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("c.mp4"), b"c").unwrap();

        let mut entries = LocalFsAdapter::new().list_dir(temp.path()).unwrap();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                temp.path().join("a.mp4"),
                temp.path().join("b.mp4"),
                temp.path().join("nested"),
            ]
        );
    }

    #[test]
    fn test_list_dir_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = LocalFsAdapter::new().list_dir(&temp.path().join("missing"));
        assert!(matches!(result, Err(DomainError::FsFail(_))));
    }

    #[test]
    fn test_single_image_file_is_one_entry() {
        let temp = TempDir::new().unwrap();
        let image = temp.path().join("logo.png");
        fs::write(&image, b"png").unwrap();

        let images = LocalFsAdapter::new().list_image_source(&image).unwrap();
        assert_eq!(images, vec![image]);
    }

    #[test]
    fn test_image_directory_sorted_in_reverse() {
        let temp = TempDir::new().unwrap();
        for name in ["a.png", "c.png", "b.png"] {
            fs::write(temp.path().join(name), b"png").unwrap();
        }

        let images = LocalFsAdapter::new().list_image_source(temp.path()).unwrap();
        assert_eq!(
            images,
            vec![
                temp.path().join("c.png"),
                temp.path().join("b.png"),
                temp.path().join("a.png"),
            ]
        );
    }

    #[test]
    fn test_missing_image_source_is_empty() {
        let temp = TempDir::new().unwrap();
        let images = LocalFsAdapter::new()
            .list_image_source(&temp.path().join("nothing.png"))
            .unwrap();
        assert!(images.is_empty());
    }
}
