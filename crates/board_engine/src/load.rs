use std::fs;
use std::path::Path;

use board_core::Job;
use board_logging::board_info;

use crate::{decode_bytes, LoadError};

/// Loads a batch from the selected file, if any.
pub fn load_batch(path: Option<&Path>) -> Result<Vec<Job>, LoadError> {
    let path = path.ok_or(LoadError::NoFileSelected)?;
    load_file(path)
}

/// Reads `path` in full, then decodes it.
pub fn load_file(path: &Path) -> Result<Vec<Job>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    board_info!("Read {} bytes from {:?}", bytes.len(), path);
    decode_bytes(&bytes)
}
