use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. A failure affecting a single language is not an
/// error at this level: drivers log it and continue with the remaining
/// languages.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path:?} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to list locales directory {path:?}: {source}")]
    ListLocales {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
