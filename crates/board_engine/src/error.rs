use std::io;
use std::path::PathBuf;

use board_core::LoadFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no input file selected")]
    NoFileSelected,
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a json array of job objects")]
    NotAnArray,
    #[error("entry {index} is not a json object")]
    NotAnObject { index: usize },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// The user-facing failure kind for this error.
    pub fn failure(&self) -> LoadFailure {
        match self {
            LoadError::NoFileSelected => LoadFailure::NoFileSelected,
            LoadError::InvalidJson(_) | LoadError::NotAnArray | LoadError::NotAnObject { .. } => {
                LoadFailure::MalformedInput
            }
            LoadError::Io { .. } => LoadFailure::Unreadable,
        }
    }
}
