use std::fmt;
use std::io;
use std::path::PathBuf;

use gridsearch_core::ConfigError;

/// Errors that end the program with a non-zero status.
#[derive(Debug)]
pub enum AppError {
    /// Bad command line.
    Usage(String),
    /// The menu answer was not one of the listed choices.
    InvalidChoice(String),
    Config(ConfigError),
    /// The results directory could not be created.
    Results { path: PathBuf, source: io::Error },
    /// Reading stdin or driving the terminal failed.
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg} (try --help)"),
            Self::InvalidChoice(answer) => write!(f, "invalid choice '{}'", answer.trim()),
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Results { path, source } => {
                write!(f, "cannot create {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Results { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Usage(_) | Self::InvalidChoice(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
