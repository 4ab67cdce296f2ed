// Rust guideline compliant 2026-10-19

//! Structured inventory events and the sinks that receive them.
//!
//! The inventory never configures logging itself. It reports what happened
//! to an injected [`EventSink`]; the binary decides where events end up.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Severity of an inventory event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operation.
    Info,
    /// Recoverable anomaly.
    Warning,
    /// Failure that was absorbed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

/// Something the inventory did or failed to do.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    /// A fresh empty data file was written.
    FileCreated { path: PathBuf },
    /// The data directory or file could not be prepared.
    InitFailed { path: PathBuf, error: String },
    /// The data file was loaded.
    Loaded { path: PathBuf, count: usize },
    /// A single entry could not become a Book and was skipped.
    EntrySkipped {
        entry: serde_json::Value,
        error: String,
    },
    /// The data file was unparseable and moved aside.
    CorruptionDetected { backup: PathBuf, error: String },
    /// The data file vanished between initialization and load.
    FileMissing { path: PathBuf },
    /// Loading failed for any other reason.
    LoadFailed { path: PathBuf, error: String },
    /// The collection was written to disk.
    Saved { path: PathBuf, count: usize },
    /// Writing the collection failed.
    SaveFailed { path: PathBuf, error: String },
    /// A book was added.
    BookAdded { isbn: String, title: String },
    /// A book was rejected because its ISBN already exists.
    DuplicateRejected { isbn: String },
    /// A book was issued.
    BookIssued { isbn: String },
    /// Issuing failed.
    IssueFailed { isbn: String, reason: String },
    /// A book was returned.
    BookReturned { isbn: String },
    /// Returning failed.
    ReturnFailed { isbn: String, reason: String },
    /// A book was removed.
    BookRemoved { isbn: String },
    /// Removal failed.
    RemoveFailed { isbn: String, reason: String },
}

impl InventoryEvent {
    /// Returns the severity the event should be logged at.
    pub fn severity(&self) -> Severity {
        use InventoryEvent::*;
        match self {
            FileCreated { .. } | Loaded { .. } | Saved { .. } | BookAdded { .. }
            | BookIssued { .. } | BookReturned { .. } | BookRemoved { .. } => Severity::Info,
            FileMissing { .. }
            | DuplicateRejected { .. }
            | IssueFailed { .. }
            | ReturnFailed { .. }
            | RemoveFailed { .. } => Severity::Warning,
            InitFailed { .. }
            | EntrySkipped { .. }
            | CorruptionDetected { .. }
            | LoadFailed { .. }
            | SaveFailed { .. } => Severity::Error,
        }
    }

    /// Returns the ISBN the event concerns, if any.
    ///
    /// For skipped entries this is the entry's `isbn` field when it is a
    /// string.
    pub fn isbn(&self) -> Option<&str> {
        use InventoryEvent::*;
        match self {
            BookAdded { isbn, .. }
            | DuplicateRejected { isbn }
            | BookIssued { isbn }
            | IssueFailed { isbn, .. }
            | BookReturned { isbn }
            | ReturnFailed { isbn, .. }
            | BookRemoved { isbn }
            | RemoveFailed { isbn, .. } => Some(isbn),
            EntrySkipped { entry, .. } => entry.get("isbn").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }

    /// Returns the file the event concerns, if any.
    ///
    /// Corruption events report the backup location.
    pub fn path(&self) -> Option<&Path> {
        use InventoryEvent::*;
        match self {
            FileCreated { path }
            | InitFailed { path, .. }
            | Loaded { path, .. }
            | FileMissing { path }
            | LoadFailed { path, .. }
            | Saved { path, .. }
            | SaveFailed { path, .. } => Some(path),
            CorruptionDetected { backup, .. } => Some(backup),
            _ => None,
        }
    }

    /// Returns a stable machine-readable name for the event.
    pub fn kind(&self) -> &'static str {
        use InventoryEvent::*;
        match self {
            FileCreated { .. } => "file_created",
            InitFailed { .. } => "init_failed",
            Loaded { .. } => "loaded",
            EntrySkipped { .. } => "entry_skipped",
            CorruptionDetected { .. } => "corruption_detected",
            FileMissing { .. } => "file_missing",
            LoadFailed { .. } => "load_failed",
            Saved { .. } => "saved",
            SaveFailed { .. } => "save_failed",
            BookAdded { .. } => "book_added",
            DuplicateRejected { .. } => "duplicate_rejected",
            BookIssued { .. } => "book_issued",
            IssueFailed { .. } => "issue_failed",
            BookReturned { .. } => "book_returned",
            ReturnFailed { .. } => "return_failed",
            BookRemoved { .. } => "book_removed",
            RemoveFailed { .. } => "remove_failed",
        }
    }
}

impl fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InventoryEvent::*;
        match self {
            FileCreated { path } => write!(f, "Created new data file at {}", path.display()),
            InitFailed { path, error } => {
                write!(f, "Failed to create data file {}: {}", path.display(), error)
            }
            Loaded { path, count } => write!(f, "Loaded {} books from {}", count, path.display()),
            EntrySkipped { entry, error } => {
                write!(f, "Skipping invalid JSON entry: {} | error: {}", entry, error)
            }
            CorruptionDetected { backup, error } => {
                write!(f, "Corrupted JSON moved to {}: {}", backup.display(), error)
            }
            FileMissing { path } => {
                write!(f, "{} not found; creating a new file", path.display())
            }
            LoadFailed { path, error } => {
                write!(f, "Unexpected error loading {}: {}", path.display(), error)
            }
            Saved { path, count } => write!(f, "Saved {} books to {}", count, path.display()),
            SaveFailed { path, error } => {
                write!(f, "Failed to save books to {}: {}", path.display(), error)
            }
            BookAdded { isbn, title } => write!(f, "Added book {} - {}", isbn, title),
            DuplicateRejected { isbn } => {
                write!(f, "Rejected book {}: ISBN already exists", isbn)
            }
            BookIssued { isbn } => write!(f, "Issued book {}", isbn),
            IssueFailed { isbn, reason } => write!(f, "Failed to issue {}: {}", isbn, reason),
            BookReturned { isbn } => write!(f, "Returned book {}", isbn),
            ReturnFailed { isbn, reason } => write!(f, "Failed to return {}: {}", isbn, reason),
            BookRemoved { isbn } => write!(f, "Removed book {}", isbn),
            RemoveFailed { isbn, reason } => write!(f, "Failed to remove {}: {}", isbn, reason),
        }
    }
}

/// Write-only collector of inventory events.
pub trait EventSink {
    /// Receives one event.
    fn emit(&self, event: &InventoryEvent);
}

/// Forwards events to the `tracing` macros at the matching level.
///
/// Each record carries the event kind, its [`Severity`] name and, when the
/// event has them, the ISBN and file path as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &InventoryEvent) {
        let kind = event.kind();
        let severity = event.severity();
        let isbn = event.isbn();
        let path = event.path().map(|p| p.display().to_string());
        let path = path.as_deref();
        match severity {
            Severity::Info => {
                tracing::info!(event = kind, severity = %severity, isbn, path, "{}", event)
            }
            Severity::Warning => {
                tracing::warn!(event = kind, severity = %severity, isbn, path, "{}", event)
            }
            Severity::Error => {
                tracing::error!(event = kind, severity = %severity, isbn, path, "{}", event)
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<InventoryEvent>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<InventoryEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns true if any recorded event has the given kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.events().iter().any(|event| event.kind() == kind)
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &InventoryEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &InventoryEvent) {}
}
