//! Handlers orchestrating the diagnostic flows over the ports.

mod delete_record;
mod get_statistics;
mod load_catalog;
mod run_diagnostic;

pub use delete_record::{DeleteHistoryRecordHandler, DeleteRecordCommand};
pub use get_statistics::GetStatisticsHandler;
pub use load_catalog::LoadCatalogHandler;
pub use run_diagnostic::{RunDiagnosticHandler, RunDiagnosticOutcome};
