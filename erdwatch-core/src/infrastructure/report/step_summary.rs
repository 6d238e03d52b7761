use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::application::ports::Reporter;
use crate::domain::report::CheckReport;
use crate::error::ErdwatchError;
use crate::infrastructure::report::summary::render_markdown;

/// Appends the Markdown summary to the job runner's step-summary file
/// (e.g. `$GITHUB_STEP_SUMMARY`).
pub struct StepSummaryReporter {
    path: PathBuf,
}

impl StepSummaryReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Reporter for StepSummaryReporter {
    fn report(&self, report: &CheckReport) -> Result<(), ErdwatchError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", render_markdown(report))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::classify;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_appends_instead_of_overwriting() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "# Previous step\n")?;

        let report = CheckReport {
            checked_at: "2026-01-01T00:00:00+00:00".to_string(),
            repository: "acme/shop".to_string(),
            model: "gpt-4o".to_string(),
            output_path: PathBuf::from("docs/erd.mmd"),
            schema_files: vec![],
            prompt_bytes: 0,
            truncated: false,
            had_stored_diagram: true,
            classification: classify("NO_CHANGE", Some("erDiagram")),
        };
        StepSummaryReporter::new(&path).report(&report)?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.starts_with("# Previous step\n"));
        assert!(content.contains("## ✅ ERD is up to date"));
        Ok(())
    }
}
