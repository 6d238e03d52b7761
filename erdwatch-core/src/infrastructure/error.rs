// erdwatch-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TransportError {
    #[error("Generator endpoint unreachable: {0}")]
    #[diagnostic(
        code(erdwatch::infra::transport::request),
        help("Check --api-base and network access from the runner.")
    )]
    Request(#[from] reqwest::Error),

    #[error("Generator returned HTTP {status}: {body}")]
    #[diagnostic(
        code(erdwatch::infra::transport::status),
        help("Check the API key, the model identifier and the provider's quota.")
    )]
    Status { status: u16, body: String },

    #[error("Malformed generator response: {0}")]
    #[diagnostic(code(erdwatch::infra::transport::malformed))]
    MalformedResponse(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- GENERATOR (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transport(#[from] TransportError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(erdwatch::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(erdwatch::infra::yaml),
        help("Check your erdwatch.yaml syntax (indentation, types, unknown keys).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(erdwatch::infra::config))]
    ConfigError(String),
}

// Shortcut for `?` on reqwest calls
impl From<reqwest::Error> for InfrastructureError {
    fn from(err: reqwest::Error) -> Self {
        InfrastructureError::Transport(TransportError::Request(err))
    }
}
