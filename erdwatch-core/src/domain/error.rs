// erdwatch-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("No schema files matched the configured globs: {patterns}")]
    #[diagnostic(
        code(erdwatch::domain::no_schema_files),
        help("Adjust --schema-globs (or `schema_globs` in erdwatch.yaml) so at least one schema source is selected.")
    )]
    NoSchemaFiles { patterns: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(erdwatch::domain::glob),
        help("Globs follow .gitignore syntax. Prefix with '!' to exclude.")
    )]
    InvalidGlob { pattern: String, reason: String },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(erdwatch::domain::config))]
    InvalidConfig(String),
}
