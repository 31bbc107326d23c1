//! In-memory adapters for tests and local development.

mod in_memory_history;
mod static_catalog;

pub use in_memory_history::InMemoryHistoryRepository;
pub use static_catalog::StaticCatalogSource;
