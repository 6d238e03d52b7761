// src/domain/schema.rs

use serde::Serialize;

/// A schema-like source file, read once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Path relative to the project root, always '/'-separated.
    pub path: String,
    pub size: u64,
    pub content: String,
}

impl SchemaFile {
    pub fn summary(&self) -> SchemaFileSummary {
        SchemaFileSummary {
            path: self.path.clone(),
            size: self.size,
        }
    }
}

/// What the reports show about a file (never its content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFileSummary {
    pub path: String,
    pub size: u64,
}

/// Everything the prompt depends on. Same context, same prompt.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub repository: String,
    pub schema_files: Vec<SchemaFile>,
    pub current_diagram: Option<String>,
}
