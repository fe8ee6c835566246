use crate::config::InputConfig;
use crate::error::{Result, SeederError};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct TestFile {
    pub path: PathBuf,
    pub filename: String,
    pub size: u64,
}

impl TestFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            path,
            filename,
            size,
        }
    }
}

/// Enumerates the test files one directory level deep, filtered by extension
/// and sorted lexicographically so every run visits files in the same order.
pub struct TestScanner {
    tests_dir: PathBuf,
    extension: String,
}

impl TestScanner {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            tests_dir: config.tests_dir.clone(),
            extension: config.extension.to_lowercase(),
        }
    }

    pub fn scan(&self) -> Result<Vec<TestFile>> {
        if !self.tests_dir.exists() {
            return Err(SeederError::TestsDirMissing {
                path: self.tests_dir.clone(),
            });
        }

        if !self.tests_dir.is_dir() {
            return Err(SeederError::InvalidPath {
                path: format!("{} is not a directory", self.tests_dir.display()),
            });
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.tests_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(|e| SeederError::InvalidPath {
                path: format!("Scan error under {}: {}", self.tests_dir.display(), e),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.matches_extension(entry.path()) {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(TestFile::new(entry.path().to_path_buf(), size));
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(files)
    }

    fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.to_lowercase() == self.extension)
    }
}
