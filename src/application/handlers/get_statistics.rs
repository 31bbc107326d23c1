//! GetStatisticsHandler - Computes the aggregate view over the history.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::stats::{StatisticsAnalyzer, StatsSnapshot};
use crate::ports::HistoryRepository;
use tracing::warn;

/// Handler that lists the history and analyzes it into a snapshot.
pub struct GetStatisticsHandler {
    history: Arc<dyn HistoryRepository>,
}

impl GetStatisticsHandler {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// Fetches the history and computes its snapshot.
    ///
    /// # Errors
    ///
    /// - `HistoryUnavailable` on fetch failure
    pub async fn handle(&self) -> Result<StatsSnapshot, DomainError> {
        let records = self.history.list().await?;
        Ok(StatisticsAnalyzer::analyze(&records))
    }

    /// Like [`handle`](Self::handle), but degrades an unavailable
    /// history to the empty snapshot so a statistics screen can render
    /// an insufficient-data state instead of crashing.
    pub async fn stats_or_empty(&self) -> StatsSnapshot {
        match self.handle().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "history unavailable, serving empty statistics");
                StatsSnapshot::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHistoryRepository;
    use crate::domain::diagnostic::StressLevel;
    use crate::domain::foundation::{ErrorCode, RecordId, Timestamp};
    use crate::domain::history::HistoryRecord;
    use crate::domain::stats::Trend;

    fn record(id: i64, score: u32, level: StressLevel) -> HistoryRecord {
        HistoryRecord::new(
            RecordId::new(id),
            score,
            level,
            4,
            Timestamp::now().minus_days(id),
        )
    }

    #[tokio::test]
    async fn analyzes_listed_records() {
        let repo = Arc::new(InMemoryHistoryRepository::with_records(vec![
            record(1, 100, StressLevel::Faible),
            record(2, 120, StressLevel::Faible),
            record(3, 220, StressLevel::Modere),
        ]));
        let handler = GetStatisticsHandler::new(repo);

        let snapshot = handler.handle().await.unwrap();
        assert_eq!(snapshot.total_diagnostics, 3);
        assert_eq!(snapshot.most_frequent_level, Some(StressLevel::Faible));
        assert_eq!(snapshot.average_events_count, 4);
        assert_eq!(snapshot.recent_trend, Trend::InsufficientData);
    }

    #[tokio::test]
    async fn unavailable_history_propagates_from_handle() {
        let handler = GetStatisticsHandler::new(Arc::new(InMemoryHistoryRepository::failing()));
        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::HistoryUnavailable);
    }

    #[tokio::test]
    async fn stats_or_empty_degrades_to_empty_snapshot() {
        let handler = GetStatisticsHandler::new(Arc::new(InMemoryHistoryRepository::failing()));
        assert_eq!(handler.stats_or_empty().await, StatsSnapshot::empty());
    }

    #[tokio::test]
    async fn empty_history_is_a_valid_snapshot() {
        let handler = GetStatisticsHandler::new(Arc::new(InMemoryHistoryRepository::new()));
        let snapshot = handler.handle().await.unwrap();
        assert_eq!(snapshot, StatsSnapshot::empty());
    }
}
