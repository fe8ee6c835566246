use crate::config::CorpusConfig;
use crate::error::{Result, SeederError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

const FINGERPRINT_LEN: usize = 16;

/// Content fingerprint used as the deduplication key and output filename.
/// Equal content always yields an equal fingerprint.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    format!("{:x}", digest)[..FINGERPRINT_LEN].to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusEntry {
    pub fingerprint: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusStats {
    pub total_snippets: usize,
    pub unique_snippets: usize,
    pub files_written: usize,
    pub stage_directories: Vec<PathBuf>,
}

/// Deduplicates extracted snippets and replicates the unique set into one
/// directory per fuzzing stage.
pub struct CorpusBuilder {
    base_directory: PathBuf,
    stages: Vec<String>,
}

impl CorpusBuilder {
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            base_directory: config.base_directory.clone(),
            stages: config.stages.clone(),
        }
    }

    pub fn stage_directories(&self) -> Vec<PathBuf> {
        self.stages
            .iter()
            .map(|stage| self.base_directory.join(stage))
            .collect()
    }

    /// Drops whitespace-only snippets and retains the first occurrence of
    /// each distinct fingerprint, in extraction order.
    pub fn dedupe(snippets: &[String]) -> Vec<CorpusEntry> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::new();

        for snippet in snippets {
            if snippet.trim().is_empty() {
                continue;
            }

            let fingerprint = fingerprint(snippet);
            if seen.insert(fingerprint.clone()) {
                unique.push(CorpusEntry {
                    fingerprint,
                    content: snippet.clone(),
                });
            }
        }

        unique
    }

    /// Creates every stage directory, parents included. Pre-existing
    /// directories and their unrelated files are left untouched.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in self.stage_directories() {
            fs::create_dir_all(&dir).map_err(|source| SeederError::CorpusWrite {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Writes one file per entry into every stage directory, named by
    /// fingerprint, overwriting same-named files. A failed write is fatal.
    pub fn write_entries(&self, entries: &[CorpusEntry]) -> Result<usize> {
        let mut files_written = 0;

        for dir in self.stage_directories() {
            for entry in entries {
                let path = dir.join(&entry.fingerprint);
                fs::write(&path, &entry.content).map_err(|source| SeederError::CorpusWrite {
                    path,
                    source,
                })?;
                files_written += 1;
            }
        }

        Ok(files_written)
    }

    pub fn build(&self, snippets: &[String]) -> Result<CorpusStats> {
        let entries = Self::dedupe(snippets);

        self.ensure_directories()?;
        let files_written = self.write_entries(&entries)?;

        Ok(CorpusStats {
            total_snippets: snippets.len(),
            unique_snippets: entries.len(),
            files_written,
            stage_directories: self.stage_directories(),
        })
    }
}
