//! Diagnostic submission gateway port.

use crate::domain::diagnostic::StressLevel;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Server acknowledgement of a persisted submission.
///
/// The server recomputes score and level from the submitted ids; the
/// locally computed result stays authoritative for display, the ack is
/// informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub score: u32,
    pub level: Option<StressLevel>,
    pub interpretation: Option<String>,
}

/// Port for persisting a completed diagnostic.
#[async_trait]
pub trait DiagnosticGateway: Send + Sync {
    /// Submits the selected event ids for server-side persistence.
    ///
    /// # Errors
    ///
    /// - `SubmissionFailed` on transport failure
    async fn submit(&self, selected: &[EventId]) -> Result<SubmissionAck, DomainError>;
}
