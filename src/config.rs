use crate::error::{Result, SeederError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub tests_dir: PathBuf,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub base_directory: PathBuf,
    pub stages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            corpus: CorpusConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tests_dir: PathBuf::from("tests/interpreter"),
            extension: "rs".to_string(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from("fuzz/corpus"),
            stages: vec![
                "lexer".to_string(),
                "parser".to_string(),
                "interpreter".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SeederError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SeederError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| SeederError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["corpus-seeder.toml", ".corpus-seeder.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref tests_dir) = cli_args.tests_dir {
            self.input.tests_dir = tests_dir.clone();
        }

        if let Some(ref extension) = cli_args.extension {
            self.input.extension = extension.trim_start_matches('.').to_lowercase();
        }

        if let Some(ref corpus_dir) = cli_args.corpus_dir {
            self.corpus.base_directory = corpus_dir.clone();
        }

        if let Some(ref stages) = cli_args.stages {
            self.corpus.stages = stages.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| SeederError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| SeederError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.extension.is_empty() {
            return Err(SeederError::Config {
                message: "Input file extension must not be empty".to_string(),
            });
        }

        if self.corpus.stages.is_empty() {
            return Err(SeederError::Config {
                message: "At least one corpus stage must be specified".to_string(),
            });
        }

        // Stage names become directory names under the corpus root
        for stage in &self.corpus.stages {
            if stage.is_empty()
                || stage.contains('/')
                || stage.contains('\\')
                || stage.contains("..")
            {
                return Err(SeederError::Config {
                    message: format!("Invalid stage name: {:?}", stage),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub tests_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub corpus_dir: Option<PathBuf>,
    pub stages: Option<Vec<String>>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tests_dir(mut self, tests_dir: Option<PathBuf>) -> Self {
        self.tests_dir = tests_dir;
        self
    }

    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_corpus_dir(mut self, corpus_dir: Option<PathBuf>) -> Self {
        self.corpus_dir = corpus_dir;
        self
    }

    pub fn with_stages(mut self, stages: Option<Vec<String>>) -> Self {
        self.stages = stages;
        self
    }
}
