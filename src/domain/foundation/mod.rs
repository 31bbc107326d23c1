//! Shared domain primitives.
//!
//! - `errors` - Domain error taxonomy (`DomainError`, `ErrorCode`, `ValidationError`)
//! - `ids` - Strongly-typed identifiers
//! - `timestamp` - UTC timestamp value object
//! - `state_machine` - Validated transition trait for lifecycle enums

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CorrelationId, EventId, RecordId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
