//! Adapters - Implementations of the ports.
//!
//! - `http` - REST clients for the catalog, history, and submit endpoints
//! - `memory` - In-memory implementations for tests and local development

pub mod http;
pub mod memory;
