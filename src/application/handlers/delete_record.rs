//! DeleteHistoryRecordHandler - Removes one record from the history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RecordId};
use crate::ports::HistoryRepository;
use tracing::info;

/// Command to delete one history record.
#[derive(Debug, Clone, Copy)]
pub struct DeleteRecordCommand {
    pub record_id: RecordId,
}

/// Handler for history record deletion.
///
/// The caller must not mutate any in-memory list until this succeeds;
/// statistics are recomputed from a fresh listing afterwards, so a
/// successful delete is reflected in the next snapshot.
pub struct DeleteHistoryRecordHandler {
    history: Arc<dyn HistoryRepository>,
}

impl DeleteHistoryRecordHandler {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// Deletes the record; deleting an already-deleted id is a no-op.
    ///
    /// # Errors
    ///
    /// - `DeleteFailed` on transport failure; retryable, nothing was
    ///   mutated locally
    pub async fn handle(&self, cmd: DeleteRecordCommand) -> Result<(), DomainError> {
        self.history.delete(cmd.record_id).await?;
        info!(record_id = %cmd.record_id, "history record deleted");
        Ok(())
    }
}
