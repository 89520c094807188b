//! The apply gate.
//!
//! This module implements the linear pipeline: extract the run id from the
//! configured URL, resolve the run's plan, fetch and analyze the plan's
//! changes, persist the summary artifacts, and trigger an apply only when
//! the plan is creation-only. The gate never terminates the process; the
//! binary maps the returned outcome and errors to an exit code.

use tracing::{debug, info, warn};

use crate::analyzer::PlanAnalysis;
use crate::config::GateConfig;
use crate::error::Result;
use crate::report::SummaryWriter;
use crate::tfc::{RunId, TfcClient};

/// The gate's decision for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Plan was creation-only; apply was triggered.
    Applied,
    /// Plan contained non-create changes; apply was not attempted.
    Rejected,
}

/// Result of one gate invocation.
#[derive(Debug)]
pub struct GateReport {
    /// The run that was inspected.
    pub run_id: RunId,
    /// The analyzed plan.
    pub analysis: PlanAnalysis,
    /// The decision taken.
    pub outcome: GateOutcome,
}

/// Orchestrates the inspect-then-apply pipeline for one run.
pub struct Gate<'a> {
    /// Gate configuration.
    config: &'a GateConfig,
    /// API client.
    client: TfcClient,
    /// Artifact writer.
    writer: SummaryWriter,
}

impl<'a> Gate<'a> {
    /// Creates a gate from the configuration and artifact writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be created.
    pub fn new(config: &'a GateConfig, writer: SummaryWriter) -> Result<Self> {
        let client = TfcClient::new(config)?;
        Ok(Self {
            config,
            client,
            writer,
        })
    }

    /// Runs the pipeline once.
    ///
    /// The summary artifacts are written before the apply decision, so a
    /// rejected run still leaves its report behind.
    ///
    /// # Errors
    ///
    /// Returns an error on extraction failure, any API failure, a rejected
    /// apply trigger, or artifact write failure.
    pub async fn run(&self) -> Result<GateReport> {
        let run_id = RunId::from_url(&self.config.run_url)?;
        info!("Detected run id: {run_id}");

        let plan_id = self.client.fetch_plan_id(&run_id).await?;
        info!("Resolved plan id: {plan_id}");

        let plan = self.client.fetch_plan(&plan_id).await?;
        debug!(
            "Fetched plan with {} resource changes",
            plan.resource_changes.len()
        );

        let analysis = PlanAnalysis::from_plan(&plan);
        self.writer.write(&analysis).await?;

        let outcome = if analysis.only_add {
            info!("Plan is creation-only, triggering apply");
            self.client.trigger_apply(&run_id).await?;
            GateOutcome::Applied
        } else {
            warn!("Plan contains non-create changes, apply cancelled");
            GateOutcome::Rejected
        };

        Ok(GateReport {
            run_id,
            analysis,
            outcome,
        })
    }
}
