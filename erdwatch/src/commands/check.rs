// erdwatch/src/commands/check.rs
//
// USE CASE: Fail the build when the stored ERD is out of date.

use std::path::PathBuf;

use erdwatch_core::application::ports::Reporter;
use erdwatch_core::application::run_check;
use erdwatch_core::infrastructure::collector::GitAwareCollector;
use erdwatch_core::infrastructure::generator::ChatCompletionClient;
use erdwatch_core::infrastructure::report::{ConsoleReporter, JsonReporter, StepSummaryReporter};
use tracing::{error, warn};

use crate::cli::{GeneratorArgs, OutputFormat, SourceArgs};

pub async fn execute(
    source: SourceArgs,
    generator: GeneratorArgs,
    format: OutputFormat,
    summary_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    // A. Resolve the configuration (flags > env > erdwatch.yaml > defaults)
    // Progress goes to stderr; stdout is reserved for the report.
    eprintln!("⚙️  Loading configuration...");
    let config = super::resolve_config(&source, Some(&generator))?;
    eprintln!("   Repository: {} | Model: {}", config.repository, config.model);

    // B. Adapters
    let collector = GitAwareCollector::default();
    let client = ChatCompletionClient::from_config(&config);

    // C. Pipeline (Application Layer)
    eprintln!("🕵️‍♀️  Checking {}...", config.output_path.display());
    let report = match run_check(&config, &collector, &client).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("\n💥 ERD CHECK ERROR: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    // D. Reporting
    let stdout_reporter: Box<dyn Reporter> = match format {
        OutputFormat::Text => Box::new(ConsoleReporter),
        OutputFormat::Json => Box::new(JsonReporter),
    };
    stdout_reporter.report(&report)?;

    if let Some(path) = summary_file {
        // Summary is best effort: the verdict below must not depend on it.
        if let Err(e) = StepSummaryReporter::new(&path).report(&report) {
            warn!(path = ?path, "Could not write step summary: {}", e);
        }
    }

    if report.requires_update() {
        // Logged regardless of the stdout format.
        error!(
            path = %config.output_path.display(),
            "Stored ERD is out of date: update {} with the proposed diagram",
            config.output_path.display()
        );
        eprintln!(
            "\n❌ FAILURE. The ERD at {} must be updated.",
            config.output_path.display()
        );
        std::process::exit(1);
    }

    eprintln!("\n✨ SUCCESS! Stored ERD is up to date.");
    Ok(())
}
