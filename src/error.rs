//! Registry loading errors.
//!
//! Selecting, filtering and dismissing are total operations and have no
//! error type; only building the token registry can fail.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse registry file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse registry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token registry is empty")]
    Empty,

    #[error("token at position {0} has an empty symbol")]
    EmptySymbol(usize),

    #[error("token symbol '{0}' is listed more than once")]
    DuplicateSymbol(String),

    #[error("recent token '{0}' is not in the registry")]
    UnknownRecent(String),

    #[error("unknown token '{0}'")]
    UnknownSymbol(String),
}
