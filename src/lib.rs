// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Plangate
//!
//! Policy-gated automatic apply for Terraform Cloud runs.
//!
//! ## Overview
//!
//! Plangate inspects a pending Terraform Cloud run, classifies every
//! proposed resource change, and triggers an apply only when the plan is
//! creation-only:
//!
//! - Extract the run id from a run URL
//! - Fetch the run's plan and its structured JSON output
//! - Classify each change as create / update / delete / replace / unknown
//! - Render a console table and persist text + JSON summary artifacts
//! - Apply the run only when no change is destructive or modifying
//!
//! ## Modules
//!
//! - [`config`]: Environment-driven gate configuration
//! - [`tfc`]: Terraform Cloud API client and types
//! - [`analyzer`]: Change classification and plan analysis
//! - [`report`]: Summary artifact persistence
//! - [`gate`]: The inspect-then-apply pipeline
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```bash
//! export TFC_TOKEN=...
//! export RUN_URL=https://app.terraform.io/app/my-org/workspaces/ws/runs/run-abc123
//! plangate
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod report;
pub mod tfc;

// ============================================================================
// Re-exports
// ============================================================================

pub use analyzer::{ActionCounts, ChangeKind, ChangeRow, PlanAnalysis};
pub use cli::{Cli, OutputFormat, OutputFormatter};
pub use config::GateConfig;
pub use error::{ApiError, ConfigError, PlangateError, Result};
pub use gate::{Gate, GateOutcome, GateReport};
pub use report::SummaryWriter;
pub use tfc::{PlanDocument, ResourceChange, RunId, TfcClient};
