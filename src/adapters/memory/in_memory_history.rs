//! In-memory history repository for tests and local development.

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::history::HistoryRecord;
use crate::ports::HistoryRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// History repository backed by a mutex-guarded vector.
///
/// Listing returns records most recent first, matching the contract of
/// the REST repository. A `failing` instance rejects every call, for
/// exercising the unavailable-history paths.
pub struct InMemoryHistoryRepository {
    records: Mutex<Vec<HistoryRecord>>,
    fail: bool,
}

impl InMemoryHistoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Creates a repository pre-loaded with records.
    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail: false,
        }
    }

    /// Creates a repository whose every call fails.
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Adds a record.
    pub fn push(&self, record: HistoryRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Returns the current record count.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::HistoryUnavailable,
                "History store configured to fail",
            ));
        }
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(records)
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DeleteFailed,
                "History store configured to fail",
            ));
        }
        // Absent ids are fine: deletes are idempotent.
        self.records.lock().unwrap().retain(|r| r.id() != id);
        Ok(())
    }
}
