use thiserror::Error;

/// Unified error type for devscripts operations
#[derive(Error, Debug)]
pub enum DevscriptsError {
    #[error("Version-control invocation failed: {0}")]
    Invocation(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid script pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in devscripts
pub type Result<T> = std::result::Result<T, DevscriptsError>;

impl DevscriptsError {
    /// Create an invocation error with context
    pub fn invocation(msg: impl Into<String>) -> Self {
        DevscriptsError::Invocation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DevscriptsError::Config(msg.into())
    }

    /// Whether this error came from running the version-control tool
    pub fn is_invocation(&self) -> bool {
        matches!(self, DevscriptsError::Invocation(_))
    }
}
