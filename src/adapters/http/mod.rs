//! REST client adapters for the diagnostic backend.
//!
//! The tolerant wire layer lives in `dto`; everything leaving this
//! module is already in canonical domain shape.

mod client;
pub mod dto;
mod rest_catalog;
mod rest_gateway;
mod rest_history;

pub use client::RestClientConfig;
pub use rest_catalog::RestCatalogSource;
pub use rest_gateway::RestDiagnosticGateway;
pub use rest_history::RestHistoryRepository;
