//! Unified error type for all lvlog operations.

use crate::fmt::ParseFlagsError;
use crate::level::ParseLevelError;
use std::path::PathBuf;

/// Error type for lvlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing a line.
    Io(std::io::Error),
    /// The destination directory did not exist and could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The dated log file could not be created inside the destination.
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A `~` destination was given but no home directory is known.
    HomeDirNotFound,
    /// Unknown level name in configuration.
    InvalidLevel(String),
    /// Unknown flag name in configuration.
    InvalidFlags(String),
    /// The logger was closed. Callers must stop logging through it.
    Closed,
}

impl Error {
    /// `true` for the misuse case that must not be retried or ignored.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create log directory {}: {source}", path.display())
            }
            Self::CreateFile { path, source } => {
                write!(f, "cannot create log file {}: {source}", path.display())
            }
            Self::HomeDirNotFound => write!(f, "home directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidFlags(flags) => write!(f, "invalid log flags: {flags}"),
            Self::Closed => write!(f, "log output err, logger is closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::CreateDir { source: e, .. } | Self::CreateFile { source: e, .. } => {
                Some(e)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}

impl From<ParseFlagsError> for Error {
    fn from(e: ParseFlagsError) -> Self {
        Self::InvalidFlags(e.input().to_string())
    }
}
