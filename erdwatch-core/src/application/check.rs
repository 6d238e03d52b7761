// erdwatch-core/src/application/check.rs
//
// USE CASE: is the stored ERD still current?
// Collector -> Prompt Composer -> Generator -> Change Classifier.

use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::domain::config::CheckConfig;
use crate::domain::diagram::{classify, clean_output};
use crate::domain::error::DomainError;
use crate::domain::ports::SchemaCollector;
use crate::domain::prompt::{ComposedPrompt, PromptComposer};
use crate::domain::report::CheckReport;
use crate::domain::schema::{PromptContext, SchemaFile};
use crate::error::ErdwatchError;
use crate::infrastructure::fs::read_optional_text;
use crate::ports::generator::DiagramGenerator;

struct PreparedCheck {
    files: Vec<SchemaFile>,
    stored_diagram: Option<String>,
    output_path: PathBuf,
    prompt: ComposedPrompt,
}

/// Runs the whole pipeline once. Fails before any network call when
/// the configuration is invalid or no schema file matched.
#[instrument(skip_all, fields(repository = %config.repository, model = %config.model))]
pub async fn run_check<C, G>(
    config: &CheckConfig,
    collector: &C,
    generator: &G,
) -> Result<CheckReport, ErdwatchError>
where
    C: SchemaCollector + ?Sized,
    G: DiagramGenerator + ?Sized,
{
    config.ensure_valid()?;
    let prepared = prepare(config, collector)?;

    info!("🤖 Asking {} for the diagram...", config.model);
    let start = Instant::now();
    let raw = generator.generate(&prepared.prompt.text).await?;
    debug!("Generator round-trip: {:.2?}", start.elapsed());

    let cleaned = clean_output(&raw);
    let classification = classify(&cleaned, prepared.stored_diagram.as_deref());
    info!(decided_by = ?classification.decided_by, material = classification.is_material(), "Classification done");

    Ok(CheckReport {
        checked_at: chrono::Utc::now().to_rfc3339(),
        repository: config.repository.clone(),
        model: config.model.clone(),
        output_path: config.output_path.clone(),
        schema_files: prepared.files.iter().map(SchemaFile::summary).collect(),
        prompt_bytes: prepared.prompt.text.len(),
        truncated: prepared.prompt.truncated,
        had_stored_diagram: prepared.stored_diagram.is_some(),
        classification,
    })
}

/// Dry run: the exact prompt `run_check` would send, without calling the generator.
pub fn preview_prompt<C>(config: &CheckConfig, collector: &C) -> Result<ComposedPrompt, ErdwatchError>
where
    C: SchemaCollector + ?Sized,
{
    let prepared = prepare(config, collector)?;
    debug!(
        files = prepared.files.len(),
        output = ?prepared.output_path,
        "Prompt preview ready"
    );
    Ok(prepared.prompt)
}

fn prepare<C>(config: &CheckConfig, collector: &C) -> Result<PreparedCheck, ErdwatchError>
where
    C: SchemaCollector + ?Sized,
{
    // 1. COLLECT
    let globs = config.effective_globs();
    let files = collector.collect(&config.project_dir, &globs)?;
    if files.is_empty() {
        return Err(DomainError::NoSchemaFiles {
            patterns: globs.join(","),
        }
        .into());
    }

    // 2. STORED DIAGRAM (read once, never written)
    let output_path = config.resolved_output_path();
    let stored_diagram = read_optional_text(&output_path)?;
    if stored_diagram.is_none() {
        warn!(path = ?output_path, "No stored diagram yet; any generated diagram counts as a change");
    }

    // 3. PROMPT
    let context = PromptContext {
        repository: config.repository.clone(),
        schema_files: files,
        current_diagram: stored_diagram,
    };
    let prompt = PromptComposer::default().compose(&context);
    if prompt.truncated {
        warn!(
            schema_bytes = prompt.schema_bytes,
            "Schema sources exceed the prompt budget; trailing content dropped"
        );
    }

    let PromptContext {
        schema_files,
        current_diagram,
        ..
    } = context;

    Ok(PreparedCheck {
        files: schema_files,
        stored_diagram: current_diagram,
        output_path,
        prompt,
    })
}
