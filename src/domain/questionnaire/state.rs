//! Questionnaire session lifecycle states.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Position of a session in its lifecycle.
///
/// `AtCategory(index)` walks the catalog's category list in order;
/// `Submitting` and `Complete` are reached only from the last category,
/// and `Empty` means the loaded catalog had no categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Empty,
    AtCategory(usize),
    Submitting,
    Complete,
}

impl SessionState {
    /// True while the user can still toggle events and navigate.
    pub fn is_answerable(&self) -> bool {
        matches!(self, SessionState::AtCategory(_))
    }

    /// True once the session has produced its result.
    pub fn is_complete(&self) -> bool {
        matches!(self, SessionState::Complete)
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        match (self, target) {
            // Linear navigation, one category at a time in either direction.
            (AtCategory(a), AtCategory(b)) => a.abs_diff(*b) == 1,
            (AtCategory(_), Submitting) => true,
            (Submitting, Complete) => true,
            // Empty and Complete are terminal.
            _ => false,
        }
    }
}
