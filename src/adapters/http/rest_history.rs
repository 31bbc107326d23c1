//! REST implementation of the history repository.

use super::client::RestClientConfig;
use super::dto;
use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::history::HistoryRecord;
use crate::ports::HistoryRepository;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Reads and prunes the history through `GET /diagnostic/history` and
/// `DELETE /diagnostic/history/{id}`.
pub struct RestHistoryRepository {
    config: RestClientConfig,
    client: Client,
}

impl RestHistoryRepository {
    /// Creates a history repository for the configured backend.
    pub fn new(config: RestClientConfig) -> Self {
        let client = config.build_client();
        Self { config, client }
    }

    fn failed(code: ErrorCode, context: &str, err: impl std::fmt::Display) -> DomainError {
        DomainError::new(code, format!("History request failed: {}", context))
            .with_detail("cause", err.to_string())
    }
}

#[async_trait]
impl HistoryRepository for RestHistoryRepository {
    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        let url = self.config.url("/diagnostic/history");
        debug!(%url, "fetching diagnostic history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::failed(ErrorCode::HistoryUnavailable, "request error", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "history service returned an error status");
            return Err(Self::failed(
                ErrorCode::HistoryUnavailable,
                "error status",
                status,
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Self::failed(ErrorCode::HistoryUnavailable, "unparsable body", e))?;

        let records = dto::parse_history(payload);
        debug!(count = records.len(), "history normalized");
        Ok(records)
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let url = self.config.url(&format!("/diagnostic/history/{}", id));
        debug!(%url, "deleting history record");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| Self::failed(ErrorCode::DeleteFailed, "request error", e))?;

        let status = response.status();
        // An already-deleted record is a success: deletes are idempotent.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }

        warn!(%status, record_id = %id, "delete rejected by history service");
        Err(
            Self::failed(ErrorCode::DeleteFailed, "error status", status)
                .with_detail("record_id", id.to_string()),
        )
    }
}
