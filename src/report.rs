//! Summary artifact persistence.
//!
//! Writes the two summary files a gate invocation leaves behind:
//! `plan_summary.txt` (human-readable) and `plan_summary.json` (structured).
//! Both are overwritten unconditionally on every run.

use std::fmt::Write as _;
use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};

use crate::analyzer::PlanAnalysis;
use crate::error::Result;

/// Text summary file name.
const TEXT_FILE: &str = "plan_summary.txt";

/// JSON summary file name.
const JSON_FILE: &str = "plan_summary.json";

/// Writes summary artifacts into a directory.
#[derive(Debug)]
pub struct SummaryWriter {
    /// Directory the artifacts land in.
    out_dir: PathBuf,
}

impl SummaryWriter {
    /// Creates a writer targeting the given directory.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Path of the text artifact.
    #[must_use]
    pub fn text_path(&self) -> PathBuf {
        self.out_dir.join(TEXT_FILE)
    }

    /// Path of the JSON artifact.
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(JSON_FILE)
    }

    /// Writes both summary artifacts.
    ///
    /// The output directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or either file cannot be written.
    pub async fn write(&self, analysis: &PlanAnalysis) -> Result<()> {
        self.ensure_dir().await?;

        let text = render_text(analysis);
        fs::write(self.text_path(), text).await?;

        let json = serde_json::to_string_pretty(analysis)
            .map_err(|e| crate::error::PlangateError::internal(format!("Failed to serialize summary: {e}")))?;
        fs::write(self.json_path(), json).await?;

        info!(
            "Wrote plan summary to {} and {}",
            self.text_path().display(),
            self.json_path().display()
        );
        Ok(())
    }

    /// Reads the JSON artifact back, mainly for verification and tooling.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid summary JSON.
    pub async fn read_json(&self) -> Result<PlanAnalysis> {
        let content = fs::read_to_string(self.json_path()).await?;
        serde_json::from_str(&content).map_err(|e| {
            crate::error::PlangateError::internal(format!("Failed to parse summary JSON: {e}"))
        })
    }

    /// Ensures the output directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if !self.out_dir.exists() {
            debug!("Creating output directory: {}", self.out_dir.display());
            fs::create_dir_all(&self.out_dir).await?;
        }
        Ok(())
    }
}

/// Renders the plain-text summary artifact.
#[must_use]
pub fn render_text(analysis: &PlanAnalysis) -> String {
    let mut output = String::from("Terraform plan summary:\n\n");

    for row in &analysis.changes {
        let _ = writeln!(output, "- {} => {}", row.resource, row.action);
    }

    output.push_str("\nTotals:\n");
    let counts = &analysis.counts;
    let _ = writeln!(output, "Create: {}", counts.create);
    let _ = writeln!(output, "Update: {}", counts.update);
    let _ = writeln!(output, "Delete: {}", counts.delete);
    let _ = writeln!(output, "Replace: {}", counts.replace);
    let _ = writeln!(output, "Unknown: {}", counts.unknown);
    let _ = writeln!(output, "Only additions: {}", analysis.only_add);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfc::ResourceChange;

    fn sample_analysis() -> PlanAnalysis {
        PlanAnalysis::from_changes(&[
            ResourceChange::new("aws_s3_bucket.a", &["create"]),
            ResourceChange::new("aws_instance.b", &["delete", "create"]),
        ])
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample_analysis());

        assert!(text.starts_with("Terraform plan summary:"));
        assert!(text.contains("- aws_s3_bucket.a => create"));
        assert!(text.contains("- aws_instance.b => delete, create"));
        assert!(text.contains("Create: 1"));
        assert!(text.contains("Replace: 1"));
        assert!(text.contains("Only additions: false"));
    }

    #[tokio::test]
    async fn test_write_creates_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::new(dir.path());
        writer.write(&sample_analysis()).await.unwrap();

        assert!(writer.text_path().exists());
        assert!(writer.json_path().exists());
    }

    #[tokio::test]
    async fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::new(dir.path());
        let analysis = sample_analysis();

        writer.write(&analysis).await.unwrap();
        let read_back = writer.read_json().await.unwrap();

        assert_eq!(read_back.counts, analysis.counts);
        assert_eq!(read_back.only_add, analysis.only_add);
        assert_eq!(read_back.changes, analysis.changes);
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_summary() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::new(dir.path());

        writer.write(&sample_analysis()).await.unwrap();

        let second = PlanAnalysis::from_changes(&[ResourceChange::new("null_resource.x", &["create"])]);
        writer.write(&second).await.unwrap();

        let read_back = writer.read_json().await.unwrap();
        assert!(read_back.only_add);
        assert_eq!(read_back.changes.len(), 1);
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports");
        let writer = SummaryWriter::new(&nested);

        writer.write(&sample_analysis()).await.unwrap();
        assert!(nested.join("plan_summary.txt").exists());
    }
}
