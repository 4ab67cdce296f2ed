// Rust guideline compliant 2026-10-19

//! Output formatting module for the Libris CLI.
//!
//! This module provides functionality for formatting books in various output
//! formats (JSON, table, plain text).

use libris_core::{Book, OutputFormat, Status};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different output formats.
pub trait OutputFormatter {
    /// Formats a single Book for display.
    fn format_book(&self, book: &Book) -> String;

    /// Formats a list of Books for display.
    fn format_list(&self, books: &[Book]) -> String;

    /// Formats a success message for display.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats books as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_book(&self, book: &Book) -> String {
        serde_json::to_string_pretty(&book.to_record())
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize book" }).to_string())
    }

    fn format_list(&self, books: &[Book]) -> String {
        let records: Vec<serde_json::Value> = books.iter().map(Book::to_record).collect();
        let output = json!({
            "books": records,
            "total": books.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize book list" }).to_string())
    }

    fn format_message(&self, message: &str) -> String {
        json!({ "message": message }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats books as human-readable tables, optionally colored.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_cell(&self, status: Status) -> String {
        if !self.use_color {
            return status.to_string();
        }
        let color = match status {
            Status::Available => Color::Green,
            Status::Issued => Color::Yellow,
        };
        paint(status.as_str(), color, false)
    }

    /// Colors the Status cells of a rendered table.
    ///
    /// Runs after rendering so escape codes do not count towards column
    /// widths. Only cells holding exactly a status value are touched.
    fn color_status_column(&self, table: &str) -> String {
        table
            .lines()
            .map(|line| {
                let mut cells = line.splitn(4, '│');
                match (cells.next(), cells.next(), cells.next(), cells.next()) {
                    (Some(lead), Some(isbn), Some(cell), Some(rest)) => {
                        let word = cell.trim();
                        match [Status::Available, Status::Issued]
                            .into_iter()
                            .find(|status| status.as_str() == word)
                        {
                            Some(status) => {
                                let cell = cell.replacen(word, &self.status_cell(status), 1);
                                format!("{}│{}│{}│{}", lead, isbn, cell, rest)
                            }
                            None => line.to_string(),
                        }
                    }
                    _ => line.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for TableFormatter {
    fn format_book(&self, book: &Book) -> String {
        let mut output = String::new();

        output.push_str(&format!("Title:   {}\n", book.title()));
        output.push_str(&format!("Author:  {}\n", book.author()));
        output.push_str(&format!("ISBN:    {}\n", book.isbn()));
        output.push_str(&format!("Status:  {}\n", self.status_cell(book.status())));

        output
    }

    fn format_list(&self, books: &[Book]) -> String {
        if books.is_empty() {
            return "No books found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ISBN", "Status", "Title", "Author"]);

        for book in books {
            builder.push_record(vec![
                book.isbn().to_string(),
                book.status().to_string(),
                book.title().to_string(),
                book.author().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        if self.use_color {
            self.color_status_column(&table.to_string())
        } else {
            table.to_string()
        }
    }

    fn format_message(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", paint("✓", Color::Green, true), message)
        } else {
            format!("✓ {}", message)
        }
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            format!("{}{}", paint("Error: ", Color::Red, true), error)
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats books as tab-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_book(&self, book: &Book) -> String {
        format!(
            "{}\t{}\t{}\t{}\n",
            book.isbn(),
            book.status(),
            book.title(),
            book.author()
        )
    }

    fn format_list(&self, books: &[Book]) -> String {
        if books.is_empty() {
            return "No books found.".to_string();
        }

        books.iter().map(|book| self.format_book(book)).collect()
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Renders `text` with ANSI color codes.
fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
