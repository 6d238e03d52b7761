// src/domain/report.rs

use serde::Serialize;
use std::path::PathBuf;

use crate::domain::diagram::Classification;
use crate::domain::schema::SchemaFileSummary;

/// Terminal result of one run, consumed once by a reporter.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub checked_at: String,
    pub repository: String,
    pub model: String,
    pub output_path: PathBuf,
    pub schema_files: Vec<SchemaFileSummary>,
    pub prompt_bytes: usize,
    pub truncated: bool,
    pub had_stored_diagram: bool,
    pub classification: Classification,
}

impl CheckReport {
    pub fn requires_update(&self) -> bool {
        self.classification.is_material()
    }
}
