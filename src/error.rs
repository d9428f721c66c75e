use std::fmt;
use std::path::PathBuf;

/// A JSON parse failure with its position. Recoverable: it drives the repair
/// chain and is only surfaced to the user when the chain is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseFailure {
    pub fn from_serde(err: &serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json messages already carry "at line L column C".
        if self.message.contains(" line ") {
            write!(f, "{}", self.message)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.message, self.line, self.column
            )
        }
    }
}

impl std::error::Error for ParseFailure {}

/// Environment-level failures. The repair pipeline never produces these;
/// malformed JSON is its expected input, not an error. An I/O failure stays
/// local to one file and never aborts the batch.
#[derive(Debug, thiserror::Error)]
pub enum MendError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl MendError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MendError>;
