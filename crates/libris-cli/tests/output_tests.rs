// Rust guideline compliant 2026-10-19

//! Unit tests for output formatting module.

use libris_cli::create_formatter;
use libris_core::{Book, OutputFormat, Status};

fn create_test_books() -> Vec<Book> {
    vec![
        Book::new("Test Driven Development", "Kent Beck", "ISBN-TDD-001"),
        Book::with_status("Dune", "Frank Herbert", "ISBN-DUNE-1", Status::Issued),
    ]
}

#[test]
fn test_json_formatter_single_book() {
    let books = create_test_books();
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_book(&books[0]);

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value, books[0].to_record());
}

#[test]
fn test_json_formatter_book_list() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_list(&create_test_books());

    assert!(output.contains("ISBN-TDD-001"));
    assert!(output.contains("ISBN-DUNE-1"));
    assert!(output.contains("\"total\": 2"));
}

#[test]
fn test_json_formatter_keeps_record_key_order() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_book(&create_test_books()[0]);

    let title = output.find("\"title\"").expect("title key");
    let author = output.find("\"author\"").expect("author key");
    let isbn = output.find("\"isbn\"").expect("isbn key");
    let status = output.find("\"status\"").expect("status key");
    assert!(title < author && author < isbn && isbn < status);
}

#[test]
fn test_json_formatter_empty_list() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let value: serde_json::Value =
        serde_json::from_str(&formatter.format_list(&[])).expect("valid JSON");
    assert_eq!(value["total"], 0);
    assert_eq!(value["books"], serde_json::json!([]));
}

#[test]
fn test_json_formatter_message_and_error() {
    let formatter = create_formatter(OutputFormat::Json, false);
    assert_eq!(formatter.format_message("done"), r#"{"message":"done"}"#);
    assert_eq!(formatter.format_error("boom"), r#"{"error":"boom"}"#);
}

#[test]
fn test_table_formatter_book_list() {
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_list(&create_test_books());

    assert!(output.contains("ISBN"));
    assert!(output.contains("Test Driven Development"));
    assert!(output.contains("issued"));
    assert!(output.contains("available"));
}

#[test]
fn test_table_formatter_empty_list() {
    let formatter = create_formatter(OutputFormat::Table, false);
    assert_eq!(formatter.format_list(&[]), "No books found.");
}

#[test]
fn test_table_formatter_single_book() {
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_book(&create_test_books()[1]);

    assert!(output.contains("Title:   Dune"));
    assert!(output.contains("Status:  issued"));
}

#[test]
fn test_table_formatter_color_adds_escape_codes() {
    let plain = create_formatter(OutputFormat::Table, false);
    let colored = create_formatter(OutputFormat::Table, true);

    assert_eq!(plain.format_error("boom"), "Error: boom");
    let output = colored.format_error("boom");
    assert!(output.contains('\u{1b}'));
    assert!(output.ends_with("boom"));
}

#[test]
fn test_table_formatter_colors_status_column() {
    let plain = create_formatter(OutputFormat::Table, false);
    let colored = create_formatter(OutputFormat::Table, true);
    let books = create_test_books();

    let plain_output = plain.format_list(&books);
    assert!(!plain_output.contains('\u{1b}'));

    let colored_output = colored.format_list(&books);
    assert!(colored_output.contains("\u{1b}[0m\u{1b}[32mavailable"));
    assert!(colored_output.contains("\u{1b}[33missued"));
    assert_eq!(
        colored_output.lines().count(),
        plain_output.lines().count(),
        "Coloring should not change the table layout"
    );
}

#[test]
fn test_table_formatter_leaves_status_words_in_titles_alone() {
    let colored = create_formatter(OutputFormat::Table, true);
    let books = vec![Book::new("issued", "Anon", "ISBN-X")];

    let output = colored.format_list(&books);
    let title_cells = output.matches("issued").count();
    assert_eq!(title_cells, 1);
    assert!(output.contains("\u{1b}[32mavailable"));
}

#[test]
fn test_plain_formatter_lines() {
    let formatter = create_formatter(OutputFormat::Plain, false);
    let output = formatter.format_list(&create_test_books());

    assert_eq!(
        output,
        "ISBN-TDD-001\tavailable\tTest Driven Development\tKent Beck\n\
         ISBN-DUNE-1\tissued\tDune\tFrank Herbert\n"
    );
}
