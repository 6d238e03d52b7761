// erdwatch-core/src/ports/generator.rs

// The diagram generator is a non-deterministic text service.
// The pipeline only knows this contract: a prompt goes in, raw text comes out.

use crate::error::ErdwatchError;
use async_trait::async_trait;

#[async_trait]
pub trait DiagramGenerator: Send + Sync {
    /// Returns the raw completion text. Cleaning happens in the application layer.
    async fn generate(&self, prompt: &str) -> Result<String, ErdwatchError>;
}
