//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Fetches and normalizes the life event catalog
//! - `HistoryRepository` - Lists and deletes persisted diagnostics
//! - `DiagnosticGateway` - Persists a completed submission server-side

mod catalog_source;
mod diagnostic_gateway;
mod history_repository;

pub use catalog_source::CatalogSource;
pub use diagnostic_gateway::{DiagnosticGateway, SubmissionAck};
pub use history_repository::HistoryRepository;
