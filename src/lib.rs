//! Sereine - Stress Diagnostic Engine
//!
//! This crate implements the diagnostic core of the Sereine
//! stress-management platform: a catalog of weighted life events, a
//! questionnaire session over its categories, scoring and
//! classification of the selection, recommendations per stress level,
//! and statistics over the diagnostic history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
