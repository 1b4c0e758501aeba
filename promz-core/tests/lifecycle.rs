use promz_core::promz::Example;
use promz_core::{PromzError, codec, file_storage, validator};
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "version": "1.0",
    "metadata": {
        "title": "Robot stories",
        "description": "Short stories about robots.",
        "author": "Your Name",
        "tags": ["a", "b"],
        "created_at": "2024-11-23T10:00:00Z",
        "updated_at": "2024-11-23T10:00:00Z"
    },
    "content": {
        "prompt": "Write a short story about a robot who learns to love.",
        "examples": [{"input": "", "output": "X"}],
        "variables": [{"name": "genre", "description": "The genre of the story"}],
        "apps": ["app1"]
    },
    "history": [
        {"version": "0.9", "updated_at": "2024-11-22T09:00:00Z", "changes": "Initial draft."}
    ]
}"#;

#[test]
fn test_decode_modify_encode_validate() {
    let mut promz = codec::decode(DOCUMENT.as_bytes()).expect("Failed to decode document");
    let original = promz.clone();

    promz.set_prompt_text("new");
    promz.add_tag("a");
    promz.add_tag("c");

    let encoded = codec::encode(&promz).expect("Failed to encode document");
    let decoded = codec::decode(&encoded).expect("Failed to decode encoded document");

    assert_eq!("new", decoded.prompt_text());
    assert_eq!(vec!["a", "b", "c"], decoded.tags());
    assert_eq!(vec![Example::new("", "X")], decoded.examples());
    assert_eq!(original.history, decoded.history);
    assert_eq!(original.metadata.updated_at, decoded.metadata.updated_at);
    assert!(validator::validate_bytes(&encoded).is_ok());
}

#[test]
fn test_read_modify_write_validate_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("example.promz");
    let target = temp_dir.path().join("new_example.promz");
    fs::write(&source, DOCUMENT).unwrap();

    let mut promz = file_storage::read(&source).expect("Failed to read promz");
    promz.set_prompt_text("Write a poem about the sea.");
    promz.add_example(Example::new("input2", "output2"));
    promz.add_tag("new_tag");
    promz.remove_tag("new_tag");

    file_storage::write(&promz, &target).expect("Failed to write promz");
    file_storage::validate_file(&target).expect("Written file should be valid");

    let reloaded = file_storage::read(&target).unwrap();
    assert_eq!(promz, reloaded);
    assert_eq!(vec!["a", "b"], reloaded.tags());
    assert_eq!(2, reloaded.examples().len());
    assert_eq!("input2", reloaded.examples()[1].input);
}

#[test]
fn test_invalid_file_reports_every_violation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.promz");

    let broken = DOCUMENT
        .replacen("\"version\": \"1.0\",", "\"version\": 1,", 1)
        .replacen("\"apps\": [\"app1\"]", "\"apps\": \"app1\"", 1);
    fs::write(&path, broken).unwrap();

    match file_storage::validate_file(&path) {
        Err(PromzError::SchemaViolation(violations)) => {
            assert_eq!(2, violations.len());
            let message = violations.to_string();
            assert!(message.contains("/version"));
            assert!(message.contains("/content/apps"));
        }
        other => panic!("Expected SchemaViolation, got {:?}", other),
    }
}
