//! Static catalog source for tests and local development.

use crate::domain::catalog::LifeEvent;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogSource;
use async_trait::async_trait;

/// Catalog source serving a fixed list of events.
pub struct StaticCatalogSource {
    events: Vec<LifeEvent>,
    fail: bool,
}

impl StaticCatalogSource {
    /// Creates a source serving the given events.
    pub fn new(events: Vec<LifeEvent>) -> Self {
        Self {
            events,
            fail: false,
        }
    }

    /// Creates a source whose fetch always fails.
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_events(&self) -> Result<Vec<LifeEvent>, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::CatalogUnavailable,
                "Catalog source configured to fail",
            ));
        }
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EventId;

    #[tokio::test]
    async fn serves_configured_events() {
        let source = StaticCatalogSource::new(vec![
            LifeEvent::new(EventId::new(1), "Évènement", 10, "Travail").unwrap(),
        ]);
        assert_eq!(source.fetch_events().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_source_reports_unavailable() {
        let source = StaticCatalogSource::failing();
        assert_eq!(
            source.fetch_events().await.unwrap_err().code,
            ErrorCode::CatalogUnavailable
        );
    }
}
