use board_core::Job;
use board_logging::{board_debug, board_info, board_warn};
use encoding_rs::{Encoding, UTF_8};
use serde_json::Value;

use crate::{JobRecord, LoadError};

/// Decodes raw file content: BOM -> UTF-8 fallback.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding and is removed.
/// Malformed sequences are replaced rather than rejected.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<Job>, LoadError> {
    let encoding = Encoding::for_bom(bytes).map_or(UTF_8, |(enc, _)| enc);
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        board_warn!("Replaced malformed {} sequences in input", encoding.name());
    }
    decode_batch(&text)
}

/// Decodes a JSON array of job objects into a batch, preserving array order.
///
/// Missing keys default to empty text. Anything other than an array of
/// objects is rejected.
pub fn decode_batch(text: &str) -> Result<Vec<Job>, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = document else {
        return Err(LoadError::NotAnArray);
    };

    let mut jobs = Vec::with_capacity(entries.len());
    let mut defaulted = 0usize;
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            return Err(LoadError::NotAnObject { index });
        }
        let record: JobRecord = serde_json::from_value(entry)?;
        let missing = record.missing_fields();
        if !missing.is_empty() {
            board_debug!("Entry {} missing fields {:?}", index, missing);
            defaulted += missing.len();
        }
        jobs.push(record.into_job());
    }

    if defaulted > 0 {
        board_warn!(
            "Defaulted {} missing field(s) to empty text across {} job(s)",
            defaulted,
            jobs.len()
        );
    }
    board_info!("Decoded {} job(s)", jobs.len());
    Ok(jobs)
}
