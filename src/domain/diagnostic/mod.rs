//! Pure diagnostic computation: scoring, classification, recommendations.

mod classification;
mod level;
mod recommendation;
mod result;
mod scoring;

pub use classification::{
    Classification, ClassificationPolicy, HIGH_THRESHOLD, MODERATE_THRESHOLD,
};
pub use level::StressLevel;
pub use recommendation::RecommendationGenerator;
pub use result::DiagnosticResult;
pub use scoring::ScoringEngine;
