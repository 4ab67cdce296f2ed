// Rust guideline compliant 2026-10-19

//! Finite State Machine module for status transitions.
//!
//! A Book has two states and two legal transitions:
//!
//! - Available → Issued (issue)
//! - Issued → Available (return)
//!
//! Requesting the state a Book is already in is rejected.

use crate::{Error, Result, Status};

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid, Err with descriptive message otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the book is already in `target`.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        if self.valid_transitions().contains(&target) {
            return Ok(());
        }

        let reason = match target {
            Status::Issued => "book is already issued",
            Status::Available => "book is not issued",
        };
        Err(Error::InvalidTransition(reason.to_string()))
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<Status> {
        match self {
            Status::Available => vec![Status::Issued],
            Status::Issued => vec![Status::Available],
        }
    }
}
