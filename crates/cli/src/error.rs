use std::path::PathBuf;

/// acmatch error types
///
/// The matching engine itself is total; these cover the layers around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using acmatch Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes, grep-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one match
    Success = 0,
    /// Search ran but nothing matched
    NoMatches = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// I/O or internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::FileTooLarge { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
