pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, CorpusConfig, InputConfig};
pub use error::{Result, SeederError, UserFriendlyError};

// Core functionality re-exports
pub use corpus::{fingerprint, CorpusBuilder, CorpusEntry, CorpusStats};
pub use extractor::SnippetExtractor;
pub use scanner::{TestFile, TestScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct FileSnippetCount {
    pub filename: String,
    pub snippets: usize,
}

/// Final run report: per-file counts, skipped inputs and the corpus totals.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub files_scanned: usize,
    pub file_counts: Vec<FileSnippetCount>,
    pub skipped_files: Vec<String>,
    pub stats: CorpusStats,
    pub dry_run: bool,
    pub generated_at: DateTime<Utc>,
}

impl SeedReport {
    fn nothing_to_do(dry_run: bool) -> Self {
        Self {
            files_scanned: 0,
            file_counts: Vec::new(),
            skipped_files: Vec::new(),
            stats: CorpusStats::default(),
            dry_run,
            generated_at: Utc::now(),
        }
    }
}

/// Main library interface for corpus seeding.
pub struct CorpusSeeder {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    dry_run: bool,
}

impl CorpusSeeder {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);

        Self {
            config,
            output_formatter,
            progress_manager,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Create a CorpusSeeder instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(config, output_mode, cli_args.verbose, cli_args.quiet).with_dry_run(cli_args.dry_run))
    }

    /// Run the single linear pass: scan the test directory, extract every
    /// embedded snippet, deduplicate, and replicate the unique set into each
    /// corpus stage directory.
    pub fn seed_corpus(&self) -> Result<SeedReport> {
        self.output_formatter
            .start_operation("Seeding fuzzing corpus from test snippets");

        let scanner = TestScanner::new(&self.config.input);
        let files = match scanner.scan() {
            Ok(files) => files,
            // An absent test directory means there is nothing to do, not
            // that the run failed.
            Err(SeederError::TestsDirMissing { path }) => {
                self.output_formatter.warning(&format!(
                    "Test directory not found: {}",
                    path.display()
                ));
                return Ok(SeedReport::nothing_to_do(self.dry_run));
            }
            Err(e) => return Err(e),
        };

        self.output_formatter.info(&format!(
            "Found {} test files in {}",
            files.len(),
            self.config.input.tests_dir.display()
        ));

        let (snippets, file_counts, skipped_files) = self.extract_snippets(&files);

        let builder = CorpusBuilder::new(&self.config.corpus);
        let stats = if self.dry_run {
            let entries = CorpusBuilder::dedupe(&snippets);
            CorpusStats {
                total_snippets: snippets.len(),
                unique_snippets: entries.len(),
                files_written: 0,
                stage_directories: builder.stage_directories(),
            }
        } else {
            builder.build(&snippets)?
        };

        Ok(SeedReport {
            files_scanned: files.len(),
            file_counts,
            skipped_files,
            stats,
            dry_run: self.dry_run,
            generated_at: Utc::now(),
        })
    }

    /// Read each test file once and accumulate its snippets in scan order.
    /// Unreadable files are skipped and recorded, never silently dropped.
    fn extract_snippets(
        &self,
        files: &[TestFile],
    ) -> (Vec<String>, Vec<FileSnippetCount>, Vec<String>) {
        let extractor = SnippetExtractor::new();
        let progress = self.progress_manager.create_file_progress(files.len() as u64);

        let mut all_snippets = Vec::new();
        let mut file_counts = Vec::new();
        let mut skipped_files = Vec::new();

        for file in files {
            progress.set_message(format!("Extracting {}", file.filename));

            match fs::read_to_string(&file.path) {
                Ok(content) => {
                    let snippets = extractor.extract(&content);
                    if !snippets.is_empty() {
                        self.progress_manager.suspend(|| {
                            self.output_formatter
                                .file_count(&file.filename, snippets.len())
                        });
                        file_counts.push(FileSnippetCount {
                            filename: file.filename.clone(),
                            snippets: snippets.len(),
                        });
                    }
                    all_snippets.extend(snippets);
                }
                Err(source) => {
                    let error = SeederError::UnreadableInput {
                        path: file.path.clone(),
                        source,
                    };
                    self.progress_manager
                        .suspend(|| self.output_formatter.warning(&error.user_message()));
                    skipped_files.push(file.path.display().to_string());
                }
            }

            progress.inc(1);
        }

        ui::progress::finish_progress_with_summary(
            &progress,
            &format!(
                "Extracted {} snippets from {} files",
                all_snippets.len(),
                files.len()
            ),
            progress.elapsed(),
        );

        (all_snippets, file_counts, skipped_files)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(SeederError::Io)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn progress_manager(&self) -> &ProgressManager {
        &self.progress_manager
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &SeederError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeder_for(tests_dir: &Path, corpus_dir: &Path) -> CorpusSeeder {
        let mut config = Config::default();
        config.input.tests_dir = tests_dir.to_path_buf();
        config.corpus.base_directory = corpus_dir.to_path_buf();

        CorpusSeeder::new(config, OutputMode::Plain, 0, true)
    }

    #[test]
    fn test_seeder_creation() {
        let config = Config::default();
        let seeder = CorpusSeeder::new(config, OutputMode::Human, 1, false);
        assert_eq!(seeder.config().corpus.stages.len(), 3);
        assert!(!seeder.dry_run);
    }

    #[test]
    fn test_end_to_end_three_call_forms() {
        let temp_dir = TempDir::new().unwrap();
        let tests_dir = temp_dir.path().join("tests");
        let corpus_dir = temp_dir.path().join("corpus");
        fs::create_dir_all(&tests_dir).unwrap();

        fs::write(
            tests_dir.join("basic.rs"),
            r#"
            eval("1 + 1");
            eval_result("2");
            throws_error("bad", "TypeError");
            "#,
        )
        .unwrap();

        let report = seeder_for(&tests_dir, &corpus_dir).seed_corpus().unwrap();

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.stats.total_snippets, 3);
        assert_eq!(report.stats.unique_snippets, 3);
        assert_eq!(report.stats.files_written, 9);

        for stage in ["lexer", "parser", "interpreter"] {
            let dir = corpus_dir.join(stage);
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 3);
            for (name, content) in [("1 + 1", "1 + 1"), ("2", "2"), ("bad", "bad")] {
                let path = dir.join(fingerprint(name));
                assert_eq!(fs::read_to_string(path).unwrap(), content);
            }
        }
    }

    #[test]
    fn test_cross_file_deduplication() {
        let temp_dir = TempDir::new().unwrap();
        let tests_dir = temp_dir.path().join("tests");
        let corpus_dir = temp_dir.path().join("corpus");
        fs::create_dir_all(&tests_dir).unwrap();

        fs::write(tests_dir.join("first.rs"), r#"eval("x");"#).unwrap();
        fs::write(tests_dir.join("second.rs"), r#"eval("x");"#).unwrap();

        let report = seeder_for(&tests_dir, &corpus_dir).seed_corpus().unwrap();

        assert_eq!(report.stats.total_snippets, 2);
        assert_eq!(report.stats.unique_snippets, 1);

        for stage in ["lexer", "parser", "interpreter"] {
            assert_eq!(fs::read_dir(corpus_dir.join(stage)).unwrap().count(), 1);
        }
    }

    #[test]
    fn test_missing_tests_dir_is_graceful() {
        let temp_dir = TempDir::new().unwrap();
        let report = seeder_for(
            &temp_dir.path().join("no-such-dir"),
            &temp_dir.path().join("corpus"),
        )
        .seed_corpus()
        .unwrap();

        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.stats.unique_snippets, 0);
        assert!(!temp_dir.path().join("corpus").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let tests_dir = temp_dir.path().join("tests");
        let corpus_dir = temp_dir.path().join("corpus");
        fs::create_dir_all(&tests_dir).unwrap();
        fs::write(tests_dir.join("basic.rs"), r#"eval("1 + 1");"#).unwrap();

        let report = seeder_for(&tests_dir, &corpus_dir)
            .with_dry_run(true)
            .seed_corpus()
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.stats.unique_snippets, 1);
        assert_eq!(report.stats.files_written, 0);
        assert!(!corpus_dir.exists());
    }

    #[test]
    fn test_whitespace_only_snippets_never_become_files() {
        let temp_dir = TempDir::new().unwrap();
        let tests_dir = temp_dir.path().join("tests");
        let corpus_dir = temp_dir.path().join("corpus");
        fs::create_dir_all(&tests_dir).unwrap();

        fs::write(
            tests_dir.join("blank.rs"),
            r#"eval(""); eval("   "); eval("\n\t");"#,
        )
        .unwrap();

        let report = seeder_for(&tests_dir, &corpus_dir).seed_corpus().unwrap();

        assert_eq!(report.stats.total_snippets, 3);
        assert_eq!(report.stats.unique_snippets, 0);
        for stage in ["lexer", "parser", "interpreter"] {
            assert_eq!(fs::read_dir(corpus_dir.join(stage)).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        CorpusSeeder::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[input]"));
        assert!(content.contains("[corpus]"));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
