use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Test directory not found: {path}")]
    TestsDirMissing { path: PathBuf },

    #[error("Failed to read test file {path}: {source}")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write corpus file {path}: {source}")]
    CorpusWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for SeederError {
    fn user_message(&self) -> String {
        match self {
            SeederError::TestsDirMissing { path } => {
                format!("Test directory not found: {}", path.display())
            }
            SeederError::UnreadableInput { path, source } => {
                format!("Could not read test file {}: {}", path.display(), source)
            }
            SeederError::CorpusWrite { path, source } => {
                format!("Could not write corpus file {}: {}", path.display(), source)
            }
            SeederError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            SeederError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            SeederError::TestsDirMissing { .. } => Some(
                "Check that you are running from the project root, or point at the test suite with --tests-dir.".to_string()
            ),
            SeederError::CorpusWrite { .. } => Some(
                "Ensure the corpus directory is writable and has free space, or choose another location with --corpus-dir.".to_string()
            ),
            SeederError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for SeederError {
    fn from(error: toml::de::Error) -> Self {
        SeederError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = SeederError::TestsDirMissing {
            path: PathBuf::from("tests/interpreter"),
        };
        assert!(error.user_message().contains("Test directory not found"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_corpus_write_suggestion() {
        let error = SeederError::CorpusWrite {
            path: PathBuf::from("fuzz/corpus/lexer/abc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.user_message().contains("abc"));
        assert!(error.suggestion().unwrap().contains("--corpus-dir"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let error = SeederError::from(toml_error);
        assert!(matches!(error, SeederError::Config { .. }));
    }
}
