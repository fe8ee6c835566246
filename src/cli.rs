use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "corpus-seeder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract embedded test snippets into a deduplicated fuzzing corpus")]
#[command(
    long_about = "CorpusSeeder scans a directory of test files for embedded code snippets \
                       (eval, eval_result and throws_error call forms, plain and raw strings), \
                       deduplicates them by content hash and replicates the unique set into \
                       one corpus directory per fuzzing stage."
)]
#[command(after_help = "EXAMPLES:\n  \
    corpus-seeder\n  \
    corpus-seeder --tests-dir tests/interpreter --corpus-dir fuzz/corpus\n  \
    corpus-seeder --dry-run --verbose\n  \
    corpus-seeder --config my-config.toml --output-format json")]
pub struct Cli {
    /// Directory containing the test files to scan
    #[arg(short, long, help = "Test directory to scan (default: tests/interpreter)")]
    pub tests_dir: Option<PathBuf>,

    /// File extension of the test files
    #[arg(short, long, help = "Extension of test files to scan (default: rs)")]
    pub extension: Option<String>,

    /// Base directory for the corpus stage directories
    #[arg(long, help = "Corpus base directory (default: fuzz/corpus)")]
    pub corpus_dir: Option<PathBuf>,

    /// Corpus stages to replicate into
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Stage directories to populate (default: lexer,parser,interpreter)"
    )]
    pub stages: Option<Vec<String>>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (extract and report without writing corpus files)
    #[arg(long, help = "Show what would be written without actually writing it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_tests_dir(self.tests_dir.clone())
            .with_extension(self.extension.clone())
            .with_corpus_dir(self.corpus_dir.clone())
            .with_stages(self.stages.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
