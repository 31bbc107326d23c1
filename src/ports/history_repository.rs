//! History repository port.
//!
//! Past diagnostics live in a durable record store reachable over the
//! network. The engine only lists and deletes records; creation happens
//! server-side on submission (see `DiagnosticGateway`).

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::history::HistoryRecord;
use async_trait::async_trait;

/// Port for reading and pruning the diagnostic history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Lists all records, most recent first.
    ///
    /// # Errors
    ///
    /// - `HistoryUnavailable` on transport failure
    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError>;

    /// Deletes one record by id.
    ///
    /// Deleting an id that no longer exists is a no-op, not an error;
    /// slow UIs may submit the same delete twice.
    ///
    /// # Errors
    ///
    /// - `DeleteFailed` on transport failure
    async fn delete(&self, id: RecordId) -> Result<(), DomainError>;
}
