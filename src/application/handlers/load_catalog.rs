//! LoadCatalogHandler - Fetches the catalog and opens a session.

use std::sync::Arc;

use crate::domain::catalog::EventCatalog;
use crate::domain::foundation::DomainError;
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::CatalogSource;
use tracing::info;

/// Handler that loads the event catalog through its source port.
pub struct LoadCatalogHandler {
    source: Arc<dyn CatalogSource>,
}

impl LoadCatalogHandler {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetches and builds the catalog.
    ///
    /// An empty catalog is a valid outcome ("no questions available");
    /// only transport failures are errors.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` on fetch failure; no session can be created
    pub async fn handle(&self) -> Result<EventCatalog, DomainError> {
        let events = self.source.fetch_events().await?;
        let catalog = EventCatalog::new(events);
        info!(
            events = catalog.len(),
            categories = catalog.categories().len(),
            "event catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads the catalog and starts a fresh questionnaire session on it.
    pub async fn start_session(&self) -> Result<QuestionnaireSession, DomainError> {
        Ok(QuestionnaireSession::new(self.handle().await?))
    }
}
