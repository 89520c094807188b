//! Plan classification and analysis.
//!
//! This module buckets each proposed resource change into one of five kinds
//! and derives the `only_add` flag the apply gate is built on.

mod classify;
mod summary;

pub use classify::ChangeKind;
pub use summary::{ActionCounts, ChangeRow, PlanAnalysis};
