//! Persisted diagnostic history record.

use crate::domain::diagnostic::StressLevel;
use crate::domain::foundation::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A past diagnostic submission as stored by the history service.
///
/// Records are created on submission, read many times, and deleted
/// individually; no update operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    id: RecordId,
    score: u32,
    level: StressLevel,
    selected_events_count: usize,
    created_at: Timestamp,
}

impl HistoryRecord {
    /// Creates a record from its stored fields.
    pub fn new(
        id: RecordId,
        score: u32,
        level: StressLevel,
        selected_events_count: usize,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            score,
            level,
            selected_events_count,
            created_at,
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the stored score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the stored stress level.
    pub fn level(&self) -> StressLevel {
        self.level
    }

    /// Returns how many events were selected for this diagnostic.
    pub fn selected_events_count(&self) -> usize {
        self.selected_events_count
    }

    /// Returns when the diagnostic was submitted.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
