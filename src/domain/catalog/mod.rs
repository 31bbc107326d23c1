//! Event catalog: the categorized list of selectable life events.

#[allow(clippy::module_inception)]
mod catalog;
mod event;

pub use catalog::EventCatalog;
pub use event::{LifeEvent, DEFAULT_CATEGORY};
