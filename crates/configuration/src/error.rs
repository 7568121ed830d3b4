//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing configuration.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}: {error}")]
    ParseError {
        file_path: PathBuf,
        error: serde_json::Error,
    },

    #[error("could not find configuration file: {0}")]
    CouldNotFindConfigurationFile(PathBuf),

    #[error("unsupported configuration version '{0}', expected '1'")]
    UnsupportedVersion(u32),

    #[error("error processing configuration: {0}")]
    IoError(#[from] std::io::Error),
}
