//! RunDiagnosticHandler - Persists a completed session's result.

use std::sync::Arc;

use crate::domain::diagnostic::DiagnosticResult;
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::{DiagnosticGateway, SubmissionAck};
use tracing::{info, warn};

/// Outcome of running a diagnostic.
///
/// The locally computed result is authoritative for display and is
/// always present; `persistence` reports whether the server accepted
/// the submission. A persistence failure never invalidates the result,
/// but it is carried here so the caller can surface a retry notice
/// instead of dropping it silently.
#[derive(Debug, Clone)]
pub struct RunDiagnosticOutcome {
    pub result: DiagnosticResult,
    pub persistence: Result<SubmissionAck, DomainError>,
}

/// Handler that hands a completed session's result to the gateway.
pub struct RunDiagnosticHandler {
    gateway: Arc<dyn DiagnosticGateway>,
}

impl RunDiagnosticHandler {
    pub fn new(gateway: Arc<dyn DiagnosticGateway>) -> Self {
        Self { gateway }
    }

    /// Submits a completed session for server-side persistence.
    ///
    /// The result is fully computed before the persistence call and is
    /// returned regardless of its outcome.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session has not completed
    pub async fn handle(
        &self,
        session: &QuestionnaireSession,
    ) -> Result<RunDiagnosticOutcome, DomainError> {
        let result = session
            .result()
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Cannot persist a session that has not completed",
                )
            })?;

        let selected: Vec<EventId> = session.selection().iter().copied().collect();
        let persistence = self.gateway.submit(&selected).await;

        match &persistence {
            Ok(ack) => info!(
                score = result.score(),
                server_score = ack.score,
                "diagnostic persisted"
            ),
            Err(err) => warn!(
                score = result.score(),
                error = %err,
                "diagnostic persistence failed; local result stands"
            ),
        }

        Ok(RunDiagnosticOutcome {
            result,
            persistence,
        })
    }
}
