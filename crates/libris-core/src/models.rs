// Rust guideline compliant 2026-10-19

//! Core data models for Libris.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability status of a Book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Book is on the shelf and can be issued.
    #[default]
    Available,
    /// Book is lent out.
    Issued,
}

impl Status {
    /// Parses a persisted status value.
    ///
    /// Anything other than `"available"` or `"issued"` normalizes to
    /// [`Status::Available`].
    pub fn normalize(value: &str) -> Self {
        match value {
            "issued" => Status::Issued,
            _ => Status::Available,
        }
    }

    /// Returns the persisted string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Issued => "issued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Book tracked by the inventory.
///
/// Title, author and ISBN are trimmed on construction and never change
/// afterwards. The status only moves through [`Book::issue`] and
/// [`Book::return_book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookEntry")]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    status: Status,
}

/// Raw shape of a persisted Book entry.
///
/// Missing fields default to empty strings. A status that is absent, not a
/// string, or not a known value becomes Available.
#[derive(Debug, Deserialize)]
struct BookEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    status: Option<serde_json::Value>,
}

impl From<BookEntry> for Book {
    fn from(entry: BookEntry) -> Self {
        let status = match entry.status {
            Some(serde_json::Value::String(s)) => Status::normalize(&s),
            _ => Status::Available,
        };
        Book::with_status(&entry.title, &entry.author, &entry.isbn, status)
    }
}

impl Book {
    /// Creates a new available Book.
    ///
    /// # Arguments
    ///
    /// * `title` - The book title
    /// * `author` - The book author
    /// * `isbn` - The ISBN, used as the unique identifier in an inventory
    ///
    /// # Returns
    ///
    /// A Book with all text fields trimmed and status Available. Empty
    /// strings are accepted as-is.
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::with_status(title, author, isbn, Status::Available)
    }

    /// Creates a Book with an explicit status.
    pub fn with_status(title: &str, author: &str, isbn: &str, status: Status) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            isbn: isbn.trim().to_string(),
            status,
        }
    }

    /// Returns the book title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the book author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the ISBN.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if the book can be issued.
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Marks the book as issued.
    ///
    /// # Returns
    ///
    /// True if the book was available and is now issued. False leaves the
    /// status unchanged.
    pub fn issue(&mut self) -> bool {
        self.transition_to(Status::Issued).is_ok()
    }

    /// Marks the book as available again.
    ///
    /// # Returns
    ///
    /// True if the book was issued and is now available. False leaves the
    /// status unchanged.
    pub fn return_book(&mut self) -> bool {
        self.transition_to(Status::Available).is_ok()
    }

    /// Moves the book to `target` if the FSM allows it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransition`] if the book is already in
    /// `target`; the status is left unchanged.
    pub fn transition_to(&mut self, target: Status) -> crate::Result<()> {
        self.status.can_transition_to(target)?;
        self.status = target;
        Ok(())
    }

    /// Returns the persisted record form of the book.
    ///
    /// The object has exactly the keys `title`, `author`, `isbn` and `status`.
    pub fn to_record(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "author": self.author,
            "isbn": self.isbn,
            "status": self.status.as_str(),
        })
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
