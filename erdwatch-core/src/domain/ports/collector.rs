use crate::domain::error::DomainError;
use crate::domain::schema::SchemaFile;
use std::path::Path;

pub trait SchemaCollector: Send + Sync {
    /// Resolves `patterns` under `root`. An empty result is not an error here;
    /// the pipeline decides whether it can proceed.
    fn collect(&self, root: &Path, patterns: &[String]) -> Result<Vec<SchemaFile>, DomainError>;
}
