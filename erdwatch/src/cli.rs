// erdwatch/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "erdwatch")]
#[command(about = "Fails the build when the stored ERD no longer matches the database schema", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔎 Compares the stored ERD with a freshly generated one (fails on material change)
    Check {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Report format on stdout
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Markdown step-summary file to append the report to
        #[arg(long, env = "GITHUB_STEP_SUMMARY")]
        summary_file: Option<PathBuf>,
    },

    /// 📝 Prints the prompt that `check` would send (no network call)
    Prompt {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the schema sources and the stored diagram live.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Project directory
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Stored diagram path (relative to the project directory)
    #[arg(long, env = "ERDWATCH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Comma-separated globs selecting schema sources ('!' prefix excludes)
    #[arg(long, env = "ERDWATCH_SCHEMA_GLOBS")]
    pub schema_globs: Option<String>,

    /// Also collect ORM / model-layer files (models/, entities/)
    #[arg(long, env = "ERDWATCH_INCLUDE_MODELS", num_args = 0..=1, default_missing_value = "true")]
    pub include_models: Option<bool>,

    /// Repository identifier shown to the generator (ex: "acme/shop")
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,
}

/// How to reach the text-generation endpoint.
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// API key for the chat-completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier (ex: "gpt-4o")
    #[arg(long, env = "ERDWATCH_MODEL")]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "ERDWATCH_API_BASE")]
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
