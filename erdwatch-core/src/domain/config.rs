// src/domain/config.rs

use std::fmt;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::domain::error::DomainError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_SCHEMA_GLOBS: &str = "**/*.prisma,**/*.sql,**/schema.rb";
pub const DEFAULT_OUTPUT_PATH: &str = "docs/erd.mmd";

/// ORM / model-layer sources added when `include_models` is on.
pub const MODEL_LAYER_GLOBS: &[&str] = &[
    "**/models/**/*.py",
    "**/models/**/*.rb",
    "**/models/**/*.ts",
    "**/models/**/*.js",
    "**/entities/**/*.ts",
];

/// The single configuration value handed to the pipeline.
#[derive(Clone, Validate)]
pub struct CheckConfig {
    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    #[validate(length(min = 1, message = "API base URL cannot be empty"))]
    pub api_base: String,

    #[validate(length(min = 1, message = "Model identifier cannot be empty"))]
    pub model: String,

    /// Where the stored diagram lives. Relative paths resolve against `project_dir`.
    pub output_path: PathBuf,

    pub project_dir: PathBuf,

    pub repository: String,

    pub include_models: bool,

    #[validate(length(min = 1, message = "At least one schema glob is required"))]
    pub schema_globs: Vec<String>,
}

impl CheckConfig {
    /// Runs the `validator` rules and folds the report into a domain error.
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    /// Configured globs, plus the model-layer set when `include_models` is on.
    pub fn effective_globs(&self) -> Vec<String> {
        let mut globs = self.schema_globs.clone();
        if self.include_models {
            for glob in MODEL_LAYER_GLOBS {
                if !globs.iter().any(|g| g == glob) {
                    globs.push((*glob).to_string());
                }
            }
        }
        globs
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        resolve_against(&self.project_dir, &self.output_path)
    }
}

// Manual Debug: the API key never reaches logs.
impl fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("output_path", &self.output_path)
            .field("project_dir", &self.project_dir)
            .field("repository", &self.repository)
            .field("include_models", &self.include_models)
            .field("schema_globs", &self.schema_globs)
            .finish()
    }
}

/// Splits a comma-separated glob list. Blank entries are dropped.
pub fn parse_glob_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
