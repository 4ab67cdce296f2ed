// Rust guideline compliant 2026-10-19

//! Property-based tests for the inventory store.
//!
//! These tests validate ISBN uniqueness, lookup after insert, and that the
//! persisted file always reloads to the in-memory collection.

use libris_core::{Book, Inventory, NullSink};
use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

/// An inventory operation keyed by a small ISBN space so collisions happen.
#[derive(Debug, Clone)]
enum Op {
    Add(String, u8),
    Issue(u8),
    Return(u8),
    Remove(u8),
}

fn isbn(n: u8) -> String {
    format!("ISBN-{}", n)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-zA-Z ]{0,20}", 0u8..6).prop_map(|(title, n)| Op::Add(title, n)),
        (0u8..6).prop_map(Op::Issue),
        (0u8..6).prop_map(Op::Return),
        (0u8..6).prop_map(Op::Remove),
    ]
}

fn open(dir: &TempDir) -> Inventory {
    Inventory::open(dir.path().join("books.json"), Arc::new(NullSink))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A book that was added is found by its ISBN and equals the original.
    #[test]
    fn prop_add_then_search(title in any::<String>(), author in any::<String>(), raw_isbn in "[ ]{0,2}[A-Z0-9-]{1,13}[ ]{0,2}") {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut inventory = open(&dir);

        let book = Book::new(&title, &author, &raw_isbn);
        inventory.add_book(book.clone()).expect("First add should succeed");

        prop_assert_eq!(inventory.search_by_isbn(&raw_isbn), Some(&book));
    }

    /// A second book with the same ISBN is rejected and nothing changes.
    #[test]
    fn prop_duplicate_rejected(first in "[a-z]{1,10}", second in "[a-z]{1,10}", n in 0u8..6) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut inventory = open(&dir);

        inventory.add_book(Book::new(&first, "A", &isbn(n))).expect("First add should succeed");
        let before = inventory.list_all();

        prop_assert!(inventory.add_book(Book::new(&second, "B", &isbn(n))).is_err());
        prop_assert_eq!(inventory.list_all(), before);
    }

    /// After any operation sequence, ISBNs stay unique and a reload matches memory.
    #[test]
    fn prop_operations_preserve_uniqueness_and_persistence(ops in prop::collection::vec(arb_op(), 0..24)) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut inventory = open(&dir);

        for op in ops {
            match op {
                Op::Add(title, n) => {
                    let existed = inventory.search_by_isbn(&isbn(n)).is_some();
                    let result = inventory.add_book(Book::new(&title, "Author", &isbn(n)));
                    prop_assert_eq!(result.is_err(), existed);
                }
                Op::Issue(n) => {
                    let expected = inventory
                        .search_by_isbn(&isbn(n))
                        .map(|book| book.is_available())
                        .unwrap_or(false);
                    prop_assert_eq!(inventory.issue_book(&isbn(n)), expected);
                }
                Op::Return(n) => {
                    let expected = inventory
                        .search_by_isbn(&isbn(n))
                        .map(|book| !book.is_available())
                        .unwrap_or(false);
                    prop_assert_eq!(inventory.return_book(&isbn(n)), expected);
                }
                Op::Remove(n) => {
                    let existed = inventory.search_by_isbn(&isbn(n)).is_some();
                    prop_assert_eq!(inventory.remove_book(&isbn(n)), existed);
                    prop_assert!(inventory.search_by_isbn(&isbn(n)).is_none());
                }
            }
        }

        let books = inventory.list_all();
        let mut isbns: Vec<&str> = books.iter().map(|book| book.isbn()).collect();
        isbns.sort_unstable();
        isbns.dedup();
        prop_assert_eq!(isbns.len(), books.len());

        let reloaded = open(&dir);
        prop_assert_eq!(reloaded.list_all(), books);
    }
}
