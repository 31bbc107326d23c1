//! Catalog source port.
//!
//! The list of selectable life events lives in an external catalog
//! service. Adapters normalize its inconsistently shaped payloads into
//! canonical [`LifeEvent`]s before anything downstream sees them.

use crate::domain::catalog::LifeEvent;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for fetching the raw event catalog.
///
/// Implementations must:
/// - normalize alias field names once, at this boundary
/// - return an empty list for malformed-but-present payloads
/// - map transport failures to `CatalogUnavailable`
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches and normalizes the selectable life events.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` on transport failure
    async fn fetch_events(&self) -> Result<Vec<LifeEvent>, DomainError>;
}
