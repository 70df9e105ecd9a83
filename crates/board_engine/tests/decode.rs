use std::sync::Once;

use board_core::LoadFailure;
use board_engine::{decode_batch, decode_bytes, LoadError};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

const TWO_JOBS: &str = r#"[
  {
    "Job No": "101",
    "Title": "Rust Engineer",
    "Job Page Link": "https://jobs.example.com/101",
    "Posted": "3 hours",
    "Type": "Full-time",
    "Level": "Senior",
    "Estimated Time": "6 months",
    "Skill": "Rust",
    "Detail": "Build the ingest pipeline."
  },
  {
    "Job No": 102,
    "Title": "Go Contractor",
    "Job Page Link": "https://jobs.example.com/102",
    "Posted": "1 day",
    "Type": "Contract",
    "Level": "Mid",
    "Estimated Time": "1 to 3 months",
    "Skill": "Go",
    "Detail": "Maintain services."
  }
]"#;

#[test]
fn decodes_every_field_in_array_order() {
    init_logging();
    let jobs = decode_batch(TWO_JOBS).unwrap();

    assert_eq!(jobs.len(), 2);
    let first = &jobs[0];
    assert_eq!(first.job_no(), "101");
    assert_eq!(first.title(), "Rust Engineer");
    assert_eq!(first.link(), "https://jobs.example.com/101");
    assert_eq!(first.posted(), "3 hours");
    assert_eq!(first.job_type(), "Full-time");
    assert_eq!(first.level(), "Senior");
    assert_eq!(first.estimated_time(), "6 months");
    assert_eq!(first.skill(), "Rust");
    assert_eq!(first.detail(), "Build the ingest pipeline.");

    assert_eq!(jobs[1].job_no(), "102");
    assert_eq!(jobs[1].estimated_time(), "1 to 3 months");
}

#[test]
fn missing_fields_default_to_empty_text() {
    init_logging();
    let jobs = decode_batch(r#"[{"Title": "Only a title"}, {}]"#).unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title(), "Only a title");
    assert_eq!(jobs[0].posted(), "");
    assert_eq!(jobs[1].job_no(), "");
}

#[test]
fn empty_array_is_an_empty_batch() {
    init_logging();
    assert!(decode_batch("[]").unwrap().is_empty());
}

#[test]
fn invalid_json_is_malformed() {
    init_logging();
    let err = decode_batch("[{\"Title\": ").unwrap_err();
    assert!(matches!(err, LoadError::InvalidJson(_)));
    assert_eq!(err.failure(), LoadFailure::MalformedInput);
}

#[test]
fn non_array_document_is_malformed() {
    init_logging();
    let err = decode_batch(r#"{"Title": "x"}"#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray));
    assert_eq!(err.failure(), LoadFailure::MalformedInput);
}

#[test]
fn non_object_entry_is_malformed() {
    init_logging();
    let err = decode_batch(r#"[{"Title": "x"}, null]"#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnObject { index: 1 }));
    assert_eq!(err.failure(), LoadFailure::MalformedInput);
    assert_eq!(err.to_string(), "entry 1 is not a json object");
}

#[test]
fn bytes_with_bom_and_invalid_utf8_still_decode() {
    init_logging();
    let mut bytes = "\u{feff}[{\"Title\": \"Caf".as_bytes().to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice(b"\"}]");

    let jobs = decode_bytes(&bytes).unwrap();
    assert_eq!(jobs[0].title(), "Caf\u{fffd}");
}

#[test]
fn utf16_file_with_bom_decodes() {
    init_logging();
    let json = r#"[{"Job No": "5", "Title": "Élan Engineer", "Posted": "2 hour"}]"#;
    let mut bytes = vec![0xff, 0xfe];
    for unit in json.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }

    let jobs = decode_bytes(&bytes).unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_no(), "5");
    assert_eq!(jobs[0].title(), "Élan Engineer");
    assert_eq!(jobs[0].formatted_posted_time(), "2 hours");
}

#[test]
fn utf8_bom_is_removed_before_parsing() {
    init_logging();
    let mut bytes = vec![0xef, 0xbb, 0xbf];
    bytes.extend_from_slice(br#"[{"Title": "Plain"}]"#);

    let jobs = decode_bytes(&bytes).unwrap();
    assert_eq!(jobs[0].title(), "Plain");
}
