//! Plan analysis and summary construction.
//!
//! Walks a plan's resource changes once, classifying each into a
//! [`ChangeKind`] bucket and deriving the `only_add` flag that gates the
//! apply. The resulting [`PlanAnalysis`] doubles as the JSON summary
//! artifact, so what lands on disk is exactly what was computed.

use serde::{Deserialize, Serialize};

use crate::tfc::{PlanDocument, ResourceChange};

use super::classify::ChangeKind;

/// Per-category change counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    /// Pure creations.
    pub create: usize,
    /// In-place updates.
    pub update: usize,
    /// Destructions.
    pub delete: usize,
    /// Destroy-and-recreate changes.
    pub replace: usize,
    /// Unrecognized action sequences.
    pub unknown: usize,
}

impl ActionCounts {
    /// Increments the count for a change kind.
    pub const fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Create => self.create += 1,
            ChangeKind::Update => self.update += 1,
            ChangeKind::Delete => self.delete += 1,
            ChangeKind::Replace => self.replace += 1,
            ChangeKind::Unknown => self.unknown += 1,
        }
    }

    /// Total number of classified changes.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.create + self.update + self.delete + self.replace + self.unknown
    }
}

/// One resource change as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRow {
    /// Resource address.
    pub resource: String,
    /// Comma-joined action tokens (e.g. `delete, create`).
    pub action: String,
}

/// Result of analyzing a plan's resource changes.
///
/// Serializes to the `plan_summary.json` schema:
/// `{resource_changes: [{resource, action}], counts: {...}, only_add: bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAnalysis {
    /// Per-resource rows, in plan order.
    #[serde(rename = "resource_changes")]
    pub changes: Vec<ChangeRow>,
    /// Per-category counts.
    pub counts: ActionCounts,
    /// True when every change is a pure creation.
    pub only_add: bool,
}

impl PlanAnalysis {
    /// Analyzes a plan document.
    #[must_use]
    pub fn from_plan(plan: &PlanDocument) -> Self {
        Self::from_changes(&plan.resource_changes)
    }

    /// Analyzes a list of resource changes.
    ///
    /// The `only_add` flag starts true and is permanently cleared by the
    /// first non-create classification.
    #[must_use]
    pub fn from_changes(resource_changes: &[ResourceChange]) -> Self {
        let mut changes = Vec::with_capacity(resource_changes.len());
        let mut counts = ActionCounts::default();
        let mut only_add = true;

        for change in resource_changes {
            let kind = ChangeKind::classify(&change.change.actions);
            counts.record(kind);
            if !kind.preserves_only_add() {
                only_add = false;
            }

            changes.push(ChangeRow {
                resource: change.address.clone(),
                action: change.change.actions.join(", "),
            });
        }

        Self {
            changes,
            counts,
            only_add,
        }
    }

    /// Returns true when the plan proposes no changes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
