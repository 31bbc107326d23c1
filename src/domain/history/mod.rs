//! History records of past diagnostics.

mod record;

pub use record::HistoryRecord;
