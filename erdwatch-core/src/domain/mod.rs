pub mod config;
pub mod diagram;
pub mod error;
pub mod ports;
pub mod prompt;
pub mod report;
pub mod schema;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use config::CheckConfig;
pub use diagram::{Classification, ComparisonResult, ContractViolation, Decision};
pub use error::DomainError;
pub use prompt::{ComposedPrompt, PromptComposer};
pub use report::CheckReport;
pub use schema::{PromptContext, SchemaFile};
