//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Canonical life events and the loaded catalog
//! - `questionnaire` - Session state machine over the catalog's categories
//! - `diagnostic` - Scoring, classification, and recommendations
//! - `history` - Persisted past diagnostics
//! - `stats` - Pure aggregation over the history

pub mod catalog;
pub mod diagnostic;
pub mod foundation;
pub mod history;
pub mod questionnaire;
pub mod stats;
