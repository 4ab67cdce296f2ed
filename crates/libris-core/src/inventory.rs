// Rust guideline compliant 2026-10-19

//! Inventory store backed by a JSON array file.
//!
//! The inventory keeps every Book in memory, in load/append order, and
//! rewrites the whole file after each mutation. Load problems never escape:
//! corrupted files are moved aside and replaced with an empty array, missing
//! files are recreated, and bad entries are skipped one by one.

use crate::events::{EventSink, InventoryEvent, TracingSink};
use crate::{Book, Error, Result, Status};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Contents written to a fresh data file.
const EMPTY_ARRAY: &str = "[]";

/// Extension given to a corrupted data file when it is moved aside.
const CORRUPT_EXTENSION: &str = "corrupt.json";

/// Whether the last file operation left the inventory in sync with disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    /// The backing file was read or written successfully.
    Ready,
    /// A file operation failed; the in-memory collection is best effort.
    Degraded(String),
}

/// Book inventory persisted to a JSON file.
pub struct Inventory {
    /// Path to the backing JSON file.
    path: PathBuf,
    /// Books in insertion order.
    books: Vec<Book>,
    /// Receiver of inventory events.
    sink: Arc<dyn EventSink>,
    /// Outcome of the most recent file operation.
    health: StoreHealth,
    /// Set when the backing file holds data that could be neither parsed nor
    /// backed up. Saves are refused until a load succeeds.
    unparsed_on_disk: bool,
}

impl Inventory {
    /// Opens an inventory at `path`.
    ///
    /// Creates the parent directory and an empty data file when they are
    /// missing, then loads the file. Failures are reported to `sink` and
    /// through [`Inventory::health`]; this never returns an error.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON data file
    /// * `sink` - Receiver of inventory events
    pub fn open(path: impl Into<PathBuf>, sink: Arc<dyn EventSink>) -> Self {
        let mut inventory = Self {
            path: path.into(),
            books: Vec::new(),
            sink,
            health: StoreHealth::Ready,
            unparsed_on_disk: false,
        };

        if let Err(e) = inventory.prepare_file() {
            inventory.emit(InventoryEvent::InitFailed {
                path: inventory.path.clone(),
                error: e.to_string(),
            });
            inventory.health = StoreHealth::Degraded(e.to_string());
        }

        inventory.load();
        inventory
    }

    /// Opens an inventory that logs through `tracing`.
    pub fn with_tracing(path: impl Into<PathBuf>) -> Self {
        Self::open(path, Arc::new(TracingSink))
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the outcome of the most recent file operation.
    pub fn health(&self) -> &StoreHealth {
        &self.health
    }

    /// Returns true if the most recent file operation succeeded.
    pub fn is_ready(&self) -> bool {
        self.health == StoreHealth::Ready
    }

    /// Returns the number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the inventory holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn emit(&self, event: InventoryEvent) {
        self.sink.emit(&event);
    }

    fn prepare_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !self.path.exists() {
            fs::write(&self.path, EMPTY_ARRAY)?;
            self.emit(InventoryEvent::FileCreated {
                path: self.path.clone(),
            });
        }

        Ok(())
    }
}

impl Inventory {
    /// Reloads the collection from the backing file.
    ///
    /// The in-memory collection is replaced in every case. On return the
    /// backing file is either loadable or untouched and the inventory is
    /// marked degraded.
    pub fn load(&mut self) {
        self.books.clear();
        self.unparsed_on_disk = false;

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.emit(InventoryEvent::FileMissing {
                    path: self.path.clone(),
                });
                self.reset_file();
                return;
            }
            Err(e) => {
                self.emit(InventoryEvent::LoadFailed {
                    path: self.path.clone(),
                    error: e.to_string(),
                });
                self.health = StoreHealth::Degraded(e.to_string());
                return;
            }
        };

        let entries = match parse_entries(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                self.recover_corrupted(&e);
                return;
            }
        };

        for entry in entries {
            match entry_to_book(&entry) {
                Ok(book) if self.contains_isbn(book.isbn()) => {
                    self.emit(InventoryEvent::EntrySkipped {
                        entry,
                        error: Error::DuplicateIsbn(book.isbn().to_string()).to_string(),
                    });
                }
                Ok(book) => self.books.push(book),
                Err(e) => {
                    self.emit(InventoryEvent::EntrySkipped {
                        entry,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.emit(InventoryEvent::Loaded {
            path: self.path.clone(),
            count: self.books.len(),
        });
        self.health = StoreHealth::Ready;
    }

    /// Moves an unparseable data file aside and starts from an empty array.
    ///
    /// Falls back to copying when the rename fails. If no backup can be made
    /// the file is left as it is and later saves are refused.
    fn recover_corrupted(&mut self, error: &Error) {
        let backup = self.path.with_extension(CORRUPT_EXTENSION);

        if let Err(e) = fs::rename(&self.path, &backup) {
            if let Err(copy_err) = fs::copy(&self.path, &backup) {
                let message = format!(
                    "{}; could not back it up to {}: {} ({})",
                    error,
                    backup.display(),
                    e,
                    copy_err
                );
                self.emit(InventoryEvent::LoadFailed {
                    path: self.path.clone(),
                    error: message.clone(),
                });
                self.health = StoreHealth::Degraded(message);
                self.unparsed_on_disk = true;
                return;
            }
        }

        self.emit(InventoryEvent::CorruptionDetected {
            backup,
            error: error.to_string(),
        });
        self.reset_file();
    }

    /// Writes an empty array to the backing file.
    fn reset_file(&mut self) {
        match fs::write(&self.path, EMPTY_ARRAY) {
            Ok(()) => self.health = StoreHealth::Ready,
            Err(e) => {
                self.emit(InventoryEvent::InitFailed {
                    path: self.path.clone(),
                    error: e.to_string(),
                });
                self.health = StoreHealth::Degraded(e.to_string());
            }
        }
    }

    /// Writes the whole collection to the backing file.
    ///
    /// The file is overwritten in a single write, pretty-printed with
    /// 4-space indentation. Failures are reported to the sink and through
    /// [`Inventory::health`] and never returned. Nothing is written while the
    /// file holds unparsed data that could not be backed up.
    pub fn save(&mut self) {
        if self.unparsed_on_disk {
            let message = format!(
                "refusing to overwrite {}: it holds unparsed data with no backup",
                self.path.display()
            );
            self.emit(InventoryEvent::SaveFailed {
                path: self.path.clone(),
                error: message.clone(),
            });
            self.health = StoreHealth::Degraded(message);
            return;
        }

        match self.write_books() {
            Ok(()) => {
                self.emit(InventoryEvent::Saved {
                    path: self.path.clone(),
                    count: self.books.len(),
                });
                self.health = StoreHealth::Ready;
            }
            Err(e) => {
                self.emit(InventoryEvent::SaveFailed {
                    path: self.path.clone(),
                    error: e.to_string(),
                });
                self.health = StoreHealth::Degraded(e.to_string());
            }
        }
    }

    fn write_books(&self) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.books.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;
        Ok(())
    }
}

impl Inventory {
    /// Adds a book and persists the inventory.
    ///
    /// # Arguments
    ///
    /// * `book` - The book to add
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIsbn`] if a book with the same ISBN exists.
    /// The collection is left unchanged in that case.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if self.contains_isbn(book.isbn()) {
            self.emit(InventoryEvent::DuplicateRejected {
                isbn: book.isbn().to_string(),
            });
            return Err(Error::DuplicateIsbn(book.isbn().to_string()));
        }

        let event = InventoryEvent::BookAdded {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
        };
        self.books.push(book);
        self.save();
        self.emit(event);
        Ok(())
    }

    /// Returns books whose title contains `query`, ignoring case.
    ///
    /// The query is trimmed first. Results keep collection order.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let query = query.trim().to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title().to_lowercase().contains(&query))
            .collect()
    }

    /// Returns the book with the given ISBN, if any.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        let isbn = isbn.trim();
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// Returns a copy of every book in collection order.
    pub fn list_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Issues a book.
    ///
    /// # Returns
    ///
    /// True if the book exists and was available. Unknown ISBNs and books
    /// that are already issued both return false.
    pub fn issue_book(&mut self, isbn: &str) -> bool {
        self.try_issue_book(isbn).is_ok()
    }

    /// Returns a book.
    ///
    /// # Returns
    ///
    /// True if the book exists and was issued.
    pub fn return_book(&mut self, isbn: &str) -> bool {
        self.try_return_book(isbn).is_ok()
    }

    /// Removes a book.
    ///
    /// # Returns
    ///
    /// True if a book with the ISBN existed and was removed.
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        self.try_remove_book(isbn).is_ok()
    }

    /// Issues a book, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No book has the ISBN ([`Error::NotFound`])
    /// - The book is already issued ([`Error::InvalidTransition`])
    pub fn try_issue_book(&mut self, isbn: &str) -> Result<()> {
        let isbn = isbn.trim();
        match self.transition(isbn, Status::Issued) {
            Ok(()) => {
                self.save();
                self.emit(InventoryEvent::BookIssued {
                    isbn: isbn.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                self.emit(InventoryEvent::IssueFailed {
                    isbn: isbn.to_string(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Returns a book, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No book has the ISBN ([`Error::NotFound`])
    /// - The book is not issued ([`Error::InvalidTransition`])
    pub fn try_return_book(&mut self, isbn: &str) -> Result<()> {
        let isbn = isbn.trim();
        match self.transition(isbn, Status::Available) {
            Ok(()) => {
                self.save();
                self.emit(InventoryEvent::BookReturned {
                    isbn: isbn.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                self.emit(InventoryEvent::ReturnFailed {
                    isbn: isbn.to_string(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Removes a book, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no book has the ISBN.
    pub fn try_remove_book(&mut self, isbn: &str) -> Result<()> {
        let isbn = isbn.trim();
        let Some(pos) = self.books.iter().position(|book| book.isbn() == isbn) else {
            let error = Error::NotFound(isbn.to_string());
            self.emit(InventoryEvent::RemoveFailed {
                isbn: isbn.to_string(),
                reason: error.to_string(),
            });
            return Err(error);
        };

        self.books.remove(pos);
        self.save();
        self.emit(InventoryEvent::BookRemoved {
            isbn: isbn.to_string(),
        });
        Ok(())
    }

    fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|book| book.isbn() == isbn)
    }

    fn transition(&mut self, isbn: &str, target: Status) -> Result<()> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| Error::NotFound(isbn.to_string()))?;
        book.transition_to(target)
    }
}

/// Parses the data file into its array elements.
///
/// A root that is valid JSON but not an array is reported as a JSON error so
/// it goes through the same recovery as malformed input.
fn parse_entries(bytes: &[u8]) -> Result<Vec<serde_json::Value>> {
    match serde_json::from_slice::<serde_json::Value>(bytes)? {
        serde_json::Value::Array(entries) => Ok(entries),
        _ => Err(serde_json::Error::custom("JSON root is not an array").into()),
    }
}

fn entry_to_book(entry: &serde_json::Value) -> Result<Book> {
    if !entry.is_object() {
        return Err(serde_json::Error::custom("entry is not a JSON object").into());
    }
    Ok(Book::deserialize(entry)?)
}
