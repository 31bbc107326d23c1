//! Application layer - Handlers coordinating domain and ports.
//!
//! The diagnostic computation itself is synchronous and pure; only the
//! calls through the ports suspend. A submission's result is fully
//! computed before the persistence call, and persistence failures are
//! reported without discarding the result.

pub mod handlers;

pub use handlers::{
    DeleteHistoryRecordHandler, DeleteRecordCommand, GetStatisticsHandler, LoadCatalogHandler,
    RunDiagnosticHandler, RunDiagnosticOutcome,
};
