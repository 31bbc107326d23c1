//! REST implementation of the diagnostic submission gateway.

use super::client::RestClientConfig;
use super::dto::{SubmitRequest, SubmitResponse};
use crate::domain::diagnostic::StressLevel;
use crate::domain::foundation::{CorrelationId, DomainError, ErrorCode, EventId};
use crate::ports::{DiagnosticGateway, SubmissionAck};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Persists submissions through `POST /diagnostic/submit`.
pub struct RestDiagnosticGateway {
    config: RestClientConfig,
    client: Client,
}

impl RestDiagnosticGateway {
    /// Creates a gateway for the configured backend.
    pub fn new(config: RestClientConfig) -> Self {
        let client = config.build_client();
        Self { config, client }
    }

    fn failed(context: &str, err: impl std::fmt::Display) -> DomainError {
        DomainError::new(
            ErrorCode::SubmissionFailed,
            format!("Submission failed: {}", context),
        )
        .with_detail("cause", err.to_string())
    }
}

#[async_trait]
impl DiagnosticGateway for RestDiagnosticGateway {
    async fn submit(&self, selected: &[EventId]) -> Result<SubmissionAck, DomainError> {
        let url = self.config.url("/diagnostic/submit");
        let correlation_id = CorrelationId::new();
        let body = SubmitRequest {
            selected_event_ids: selected.iter().map(|id| id.value()).collect(),
        };
        debug!(%url, %correlation_id, count = selected.len(), "submitting diagnostic");

        let response = self
            .client
            .post(&url)
            .header("x-correlation-id", correlation_id.to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::failed("request error", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %correlation_id, "submission rejected");
            return Err(Self::failed("error status", status));
        }

        let payload: SubmitResponse = response
            .json()
            .await
            .map_err(|e| Self::failed("unparsable body", e))?;

        Ok(SubmissionAck {
            score: payload
                .score
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(|s| s.round() as u32)
                .unwrap_or(0),
            level: payload
                .stress_level
                .as_deref()
                .and_then(StressLevel::parse_label),
            interpretation: payload.interpretation,
        })
    }
}
