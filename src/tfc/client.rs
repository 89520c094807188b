//! Terraform Cloud API client implementation.
//!
//! This module provides the HTTP client for the three run-gating calls:
//! fetching a run's plan id, fetching the plan's JSON output, and triggering
//! an apply. Every request carries the bearer token and the JSON:API content
//! type. Failures are never retried; any non-success status is surfaced as a
//! typed error carrying the status and body.

use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GateConfig;
use crate::error::{ApiError, Result};

use super::types::{PlanDocument, RunDocument, RunId};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// JSON:API content type expected by Terraform Cloud.
const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Terraform Cloud API client.
#[derive(Debug, Clone)]
pub struct TfcClient {
    /// HTTP client.
    client: Client,
    /// Bearer token.
    token: String,
    /// API base URL (no trailing slash).
    api_base: String,
}

impl TfcClient {
    /// Creates a new Terraform Cloud API client from the gate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &GateConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: config.token.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the run document and resolves the id of its plan.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success status, or if the response has no
    /// plan relationship.
    pub async fn fetch_plan_id(&self, run_id: &RunId) -> Result<String> {
        let url = format!("{}/runs/{run_id}", self.api_base);
        let run: RunDocument = self.get_json(&url).await?;

        run.plan_id().map(str::to_string).ok_or_else(|| {
            ApiError::invalid_response(format!("Run {run_id} has no related plan")).into()
        })
    }

    /// Fetches the structured plan output for a plan id.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success status or an unparsable body.
    pub async fn fetch_plan(&self, plan_id: &str) -> Result<PlanDocument> {
        let url = format!("{}/plans/{plan_id}/json-output", self.api_base);
        self.get_json(&url).await
    }

    /// Triggers an apply of the run.
    ///
    /// Terraform Cloud acknowledges the action with 200, 201 or 202.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the status code and response body when the
    /// apply is not accepted.
    pub async fn trigger_apply(&self, run_id: &RunId) -> Result<()> {
        let url = format!("{}/runs/{run_id}/actions/apply", self.api_base);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED
        ) {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::ApplyRejected {
            status: status.as_u16(),
            body,
        }
        .into())
    }

    /// Performs a GET request and deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;

        let body = Self::check_status(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {e}")).into())
    }

    /// Returns the response body, or a typed error for non-success statuses.
    async fn check_status(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::request_failed(status.as_u16(), body).into())
        }
    }
}
