//! Sequential output file naming

use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::rules;
use crate::engine::OUTPUT_EXTENSION;
use crate::ports::FsPort;

/// Names outputs `1.mp4`, `2.mp4`, ... after the highest existing number
pub struct OutputNamer<'a> {
    fs: &'a dyn FsPort,
    dir: PathBuf,
}

impl<'a> OutputNamer<'a> {
    pub fn new(fs: &'a dyn FsPort, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    /// Next free index, read fresh from the directory
    pub fn next_index(&self) -> Result<u64, DomainError> {
        let entries = self.fs.list_dir(&self.dir)?;
        let stems = entries
            .iter()
            .map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .ok_or_else(|| {
                        DomainError::NonNumericOutputName(path.display().to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rules::next_output_index(stems)
    }

    /// Output path for a given index
    pub fn path_for(&self, index: u64) -> PathBuf {
        self.dir.join(format!("{}.{}", index, OUTPUT_EXTENSION))
    }

    /// Path of the next output file
    pub fn next_path(&self) -> Result<PathBuf, DomainError> {
        Ok(self.path_for(self.next_index()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalFsAdapter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_starts_at_one() {
        let temp = TempDir::new().unwrap();
        let fs_port = LocalFsAdapter::new();
        let namer = OutputNamer::new(&fs_port, temp.path());
        assert_eq!(namer.next_path().unwrap(), temp.path().join("1.mp4"));
    }

    #[test]
    fn test_next_after_highest_number() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("3.mp4"), b"").unwrap();
        fs::write(temp.path().join("7.mp4"), b"").unwrap();

        let fs_port = LocalFsAdapter::new();
        let namer = OutputNamer::new(&fs_port, temp.path());
        assert_eq!(namer.next_index().unwrap(), 8);
        assert_eq!(namer.next_path().unwrap(), temp.path().join("8.mp4"));
    }

    #[test]
    fn test_non_numeric_name_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("3.mp4"), b"").unwrap();
        fs::write(temp.path().join("notes.txt"), b"").unwrap();

        let fs_port = LocalFsAdapter::new();
        let namer = OutputNamer::new(&fs_port, temp.path());
        assert_eq!(
            namer.next_index().unwrap_err(),
            DomainError::NonNumericOutputName("notes".to_string())
        );
    }
}
