use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the application.
///
/// Every failure a single URL can hit maps onto one [`ErrorKind`]:
/// - NotFound: the URL list itself could not be opened
/// - Transport: malformed URL, DNS, connect, TLS or body read failures
/// - HttpStatus: the server answered outside 200-299
/// - FileSystem: the body could not be written to the destination

/// Represents all possible errors that can occur in the application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{source}: {}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    HttpStatus { code: u16, message: String },

    #[error("{source}: '{}'", .path.display())]
    FileSystem { path: PathBuf, source: io::Error },

    #[error("No file name in URL '{0}'")]
    MissingFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Transport,
    HttpStatus,
    FileSystem,
    Other,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) | AppError::Unreadable { .. } => ErrorKind::NotFound,
            AppError::InvalidUrl { .. } | AppError::Transport(_) => ErrorKind::Transport,
            AppError::HttpStatus { .. } => ErrorKind::HttpStatus,
            AppError::FileSystem { .. } | AppError::MissingFileName(_) => ErrorKind::FileSystem,
            AppError::Io(_) | AppError::Config(_) => ErrorKind::Other,
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(error: toml::de::Error) -> Self {
        AppError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
