// Rust guideline compliant 2026-10-19

//! Command implementations for the Libris CLI.

pub mod add;
pub mod init;
pub mod issue;
pub mod list;
pub mod remove;
pub mod return_book;
pub mod search;
