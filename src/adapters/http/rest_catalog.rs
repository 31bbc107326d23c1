//! REST implementation of the catalog source.

use super::client::RestClientConfig;
use super::dto;
use crate::domain::catalog::LifeEvent;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogSource;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Fetches the life event catalog from `GET /diagnostic/questions`.
pub struct RestCatalogSource {
    config: RestClientConfig,
    client: Client,
}

impl RestCatalogSource {
    /// Creates a catalog source for the configured backend.
    pub fn new(config: RestClientConfig) -> Self {
        let client = config.build_client();
        Self { config, client }
    }

    fn unavailable(context: &str, err: impl std::fmt::Display) -> DomainError {
        DomainError::new(
            ErrorCode::CatalogUnavailable,
            format!("Catalog fetch failed: {}", context),
        )
        .with_detail("cause", err.to_string())
    }
}

#[async_trait]
impl CatalogSource for RestCatalogSource {
    async fn fetch_events(&self) -> Result<Vec<LifeEvent>, DomainError> {
        let url = self.config.url("/diagnostic/questions");
        debug!(%url, "fetching event catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unavailable("request error", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "catalog service returned an error status");
            return Err(Self::unavailable("error status", status));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Self::unavailable("unparsable body", e))?;

        // Malformed-but-present payloads degrade to an empty catalog.
        let events = dto::parse_events(payload);
        debug!(count = events.len(), "catalog normalized");
        Ok(events)
    }
}
