// Rust guideline compliant 2026-10-19

//! Libris Core Library
//!
//! This crate provides the foundational components for the Libris book tracker:
//! - Data models (Book, Status)
//! - FSM logic (issue/return transitions)
//! - Inventory store (JSON array persistence, corruption recovery)
//! - Event sink for structured inventory logging
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod inventory;
pub mod models;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use events::{EventSink, InventoryEvent, MemorySink, NullSink, Severity, TracingSink};
pub use inventory::{Inventory, StoreHealth};
pub use models::{Book, Status};
