use crate::application::ports::Reporter;
use crate::domain::report::CheckReport;
use crate::error::ErdwatchError;

/// Machine-readable report on stdout (`--format json`).
pub struct JsonReporter;

impl JsonReporter {
    pub fn render(report: &CheckReport) -> Result<String, ErdwatchError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ErdwatchError::InternalError(format!("Cannot serialize report: {}", e)))
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &CheckReport) -> Result<(), ErdwatchError> {
        println!("{}", Self::render(report)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::classify;
    use crate::domain::schema::SchemaFileSummary;
    use anyhow::Result;
    use std::path::PathBuf;

    #[test]
    fn test_json_shape() -> Result<()> {
        let report = CheckReport {
            checked_at: "2026-01-01T00:00:00+00:00".to_string(),
            repository: "acme/shop".to_string(),
            model: "gpt-4o".to_string(),
            output_path: PathBuf::from("docs/erd.mmd"),
            schema_files: vec![SchemaFileSummary {
                path: "schema.prisma".to_string(),
                size: 42,
            }],
            prompt_bytes: 1024,
            truncated: false,
            had_stored_diagram: false,
            classification: classify("erDiagram\n  A {}", None),
        };

        let value: serde_json::Value = serde_json::from_str(&JsonReporter::render(&report)?)?;
        assert_eq!(value["classification"]["result"]["status"], "material_change");
        assert_eq!(value["classification"]["result"]["diagram"], "erDiagram\n  A {}");
        assert_eq!(value["classification"]["decided_by"], "diff");
        assert_eq!(value["schema_files"][0]["size"], 42);
        assert!(value["classification"]["contract_violation"].is_null());
        Ok(())
    }
}
