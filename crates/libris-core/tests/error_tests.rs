// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use libris_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    let msg = error.to_string();
    assert!(
        msg.contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_duplicate_isbn_error_formatting() {
    let error = Error::DuplicateIsbn("ISBN-TDD-001".to_string());
    assert_eq!(
        error.to_string(),
        "A book with ISBN ISBN-TDD-001 already exists"
    );
}

#[test]
fn test_not_found_error_formatting() {
    let error = Error::NotFound("ISBN-404".to_string());
    assert_eq!(error.to_string(), "Book not found: ISBN-404");
}

#[test]
fn test_invalid_transition_error_formatting() {
    let error = Error::InvalidTransition("book is already issued".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid status transition: book is already issued"
    );
}

#[test]
fn test_invalid_config_error_formatting() {
    let error = Error::InvalidConfig("data_file cannot be empty".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid configuration: data_file cannot be empty"
    );
}

#[test]
fn test_io_error_conversion() {
    fn read_missing() -> libris_core::Result<String> {
        Ok(std::fs::read_to_string("/nonexistent/libris/books.json")?)
    }

    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
