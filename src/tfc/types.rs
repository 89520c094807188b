//! Terraform Cloud API types and data structures.
//!
//! This module defines the JSON:API envelope types used for communication
//! with the Terraform Cloud API, and the [`RunId`] token extracted from a
//! run URL.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Pattern locating a run id inside a run URL.
static RUN_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"runs/(run-\w+)").expect("valid run id pattern"));

/// Identifier of a Terraform Cloud run (`run-<alphanumeric>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    /// Extracts the run id from a run URL.
    ///
    /// The first substring matching `runs/run-<word chars>` wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL contains no run id.
    pub fn from_url(url: &str) -> Result<Self> {
        RUN_ID_RE
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| ConfigError::invalid_run_url(url).into())
    }

    /// Returns the run id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Envelope returned by `GET /runs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunDocument {
    /// The run resource.
    pub data: RunData,
}

/// The run resource inside a [`RunDocument`].
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    /// Relationships to related resources.
    #[serde(default)]
    pub relationships: Option<RunRelationships>,
}

/// Relationships of a run resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRelationships {
    /// The plan computed for this run.
    #[serde(default)]
    pub plan: Option<Relationship>,
}

/// A JSON:API to-one relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    /// The related resource reference.
    #[serde(default)]
    pub data: Option<ResourceRef>,
}

/// A JSON:API resource reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    /// Opaque resource id.
    pub id: String,
}

impl RunDocument {
    /// Returns the id of the plan related to this run, if present.
    #[must_use]
    pub fn plan_id(&self) -> Option<&str> {
        self.data
            .relationships
            .as_ref()
            .and_then(|rels| rels.plan.as_ref())
            .and_then(|plan| plan.data.as_ref())
            .map(|data| data.id.as_str())
    }
}

/// Structured plan output returned by `GET /plans/{id}/json-output`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanDocument {
    /// Proposed resource changes. Absent means an empty plan.
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
}

/// One resource's proposed change within a plan.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    /// Unique resource path (e.g. `aws_s3_bucket.a`).
    pub address: String,
    /// The change proposed for this resource.
    pub change: Change,
}

/// Proposed change detail.
#[derive(Debug, Clone, Deserialize)]
pub struct Change {
    /// Ordered action tokens (e.g. `["create"]`, `["delete", "create"]`).
    #[serde(default)]
    pub actions: Vec<String>,
}

impl ResourceChange {
    /// Convenience constructor, used heavily in tests.
    #[must_use]
    pub fn new(address: impl Into<String>, actions: &[&str]) -> Self {
        Self {
            address: address.into(),
            change: Change {
                actions: actions.iter().map(|a| (*a).to_string()).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_from_app_url() {
        let url = "https://app.terraform.io/app/my-org/workspaces/ws/runs/run-CZcmD7eagjhyX0vN";
        let id = RunId::from_url(url).unwrap();
        assert_eq!(id.as_str(), "run-CZcmD7eagjhyX0vN");
    }

    #[test]
    fn test_run_id_first_match_wins() {
        let url = "https://x/runs/run-first?next=runs/run-second";
        let id = RunId::from_url(url).unwrap();
        assert_eq!(id.as_str(), "run-first");
    }

    #[test]
    fn test_run_id_stops_at_non_word_char() {
        let url = "https://x/runs/run-abc123/apply";
        let id = RunId::from_url(url).unwrap();
        assert_eq!(id.as_str(), "run-abc123");
    }

    #[test]
    fn test_run_id_missing() {
        let result = RunId::from_url("https://app.terraform.io/app/my-org/workspaces/ws");
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_id_extraction() {
        let body = r#"{
            "data": {
                "id": "run-abc",
                "relationships": {
                    "plan": { "data": { "id": "plan-xyz", "type": "plans" } }
                }
            }
        }"#;
        let doc: RunDocument = serde_json::from_str(body).unwrap();
        assert_eq!(doc.plan_id(), Some("plan-xyz"));
    }

    #[test]
    fn test_plan_id_missing_relationship() {
        let body = r#"{ "data": { "id": "run-abc" } }"#;
        let doc: RunDocument = serde_json::from_str(body).unwrap();
        assert_eq!(doc.plan_id(), None);
    }

    #[test]
    fn test_plan_document_defaults_to_empty_changes() {
        let doc: PlanDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.resource_changes.is_empty());
    }

    #[test]
    fn test_plan_document_parses_changes() {
        let body = r#"{
            "resource_changes": [
                { "address": "aws_s3_bucket.a", "change": { "actions": ["create"] } },
                { "address": "aws_instance.b", "change": { "actions": ["delete", "create"] } }
            ]
        }"#;
        let doc: PlanDocument = serde_json::from_str(body).unwrap();
        assert_eq!(doc.resource_changes.len(), 2);
        assert_eq!(doc.resource_changes[0].address, "aws_s3_bucket.a");
        assert_eq!(doc.resource_changes[1].change.actions, vec!["delete", "create"]);
    }
}
