//! Terraform Cloud API surface.
//!
//! This module holds the API client and the JSON:API envelope types for the
//! three run-gating calls (run lookup, plan JSON output, apply trigger).

mod client;
mod types;

pub use client::TfcClient;
pub use types::{Change, PlanDocument, ResourceChange, RunDocument, RunId};
