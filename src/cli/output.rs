//! Output formatting for the console.
//!
//! This module renders a plan analysis for display: a resource/action table
//! with a colored per-category count summary in text mode, or the summary
//! JSON in json mode. Formatters return `String`s; the binary decides where
//! they are printed.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::analyzer::PlanAnalysis;

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Resource change row for table display.
#[derive(Tabled)]
struct ChangeTableRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Action")]
    action: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a plan analysis for display.
    #[must_use]
    pub fn format_analysis(&self, analysis: &PlanAnalysis) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(analysis).unwrap_or_default(),
            OutputFormat::Text => Self::format_analysis_text(analysis),
        }
    }

    /// Formats an analysis as text.
    fn format_analysis_text(analysis: &PlanAnalysis) -> String {
        if analysis.is_empty() {
            return format!("{} Plan proposes no resource changes.\n", "✓".green());
        }

        let mut output = String::new();

        let rows: Vec<ChangeTableRow> = analysis
            .changes
            .iter()
            .map(|row| ChangeTableRow {
                resource: row.resource.clone(),
                action: row.action.clone(),
            })
            .collect();

        let table = Table::new(rows).to_string();
        output.push_str(&table);
        output.push('\n');

        let counts = &analysis.counts;
        let _ = write!(
            output,
            "\nPlan: {} to create, {} to update, {} to delete, {} to replace, {} unknown\n",
            counts.create.to_string().green(),
            counts.update.to_string().yellow(),
            counts.delete.to_string().red(),
            counts.replace.to_string().red(),
            counts.unknown.to_string().dimmed(),
        );

        let verdict = if analysis.only_add {
            "creation-only".green().to_string()
        } else {
            "contains non-create changes".red().to_string()
        };
        let _ = writeln!(output, "Policy: {verdict}");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfc::ResourceChange;

    fn sample_analysis() -> PlanAnalysis {
        PlanAnalysis::from_changes(&[
            ResourceChange::new("aws_s3_bucket.a", &["create"]),
            ResourceChange::new("aws_instance.b", &["update"]),
        ])
    }

    #[test]
    fn test_text_output_contains_table_and_counts() {
        let formatter = OutputFormatter::new(OutputFormat::Text);
        let output = formatter.format_analysis(&sample_analysis());

        assert!(output.contains("aws_s3_bucket.a"));
        assert!(output.contains("aws_instance.b"));
        assert!(output.contains("to create"));
        assert!(output.contains("Policy:"));
    }

    #[test]
    fn test_text_output_empty_plan() {
        let formatter = OutputFormatter::new(OutputFormat::Text);
        let output = formatter.format_analysis(&PlanAnalysis::from_changes(&[]));
        assert!(output.contains("no resource changes"));
    }

    #[test]
    fn test_json_output_is_summary_schema() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format_analysis(&sample_analysis());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["counts"]["create"], 1);
        assert_eq!(value["only_add"], serde_json::json!(false));
    }
}
