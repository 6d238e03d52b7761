// erdwatch/src/commands/mod.rs

pub mod check;
pub mod prompt;

use anyhow::Context;
use std::path::{Path, PathBuf};

use erdwatch_core::domain::config::{
    CheckConfig, DEFAULT_API_BASE, DEFAULT_OUTPUT_PATH, DEFAULT_SCHEMA_GLOBS, parse_glob_list,
};
use erdwatch_core::infrastructure::config::{FileSettings, load_file_settings};

use crate::cli::{GeneratorArgs, SourceArgs};

/// Layering: CLI flag / env var > erdwatch.yaml > built-in default.
pub fn resolve_config(
    source: &SourceArgs,
    generator: Option<&GeneratorArgs>,
) -> anyhow::Result<CheckConfig> {
    let settings = load_file_settings(&source.project_dir).with_context(|| {
        format!(
            "Failed to load erdwatch settings from {:?}",
            source.project_dir
        )
    })?;
    Ok(merge(source, generator, settings))
}

fn merge(
    source: &SourceArgs,
    generator: Option<&GeneratorArgs>,
    settings: FileSettings,
) -> CheckConfig {
    let schema_globs = source
        .schema_globs
        .as_deref()
        .map(parse_glob_list)
        .or(settings.schema_globs)
        .unwrap_or_else(|| parse_glob_list(DEFAULT_SCHEMA_GLOBS));

    let repository = source
        .repository
        .clone()
        .or(settings.repository)
        .unwrap_or_else(|| repository_from_dir(&source.project_dir));

    CheckConfig {
        api_key: generator
            .and_then(|g| g.api_key.clone())
            .unwrap_or_default(),
        api_base: generator
            .and_then(|g| g.api_base.clone())
            .or(settings.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        model: generator
            .and_then(|g| g.model.clone())
            .or(settings.model)
            .unwrap_or_default(),
        output_path: source
            .output
            .clone()
            .or(settings.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        project_dir: source.project_dir.clone(),
        repository,
        include_models: source
            .include_models
            .or(settings.include_models)
            .unwrap_or(false),
        schema_globs,
    }
}

fn repository_from_dir(project_dir: &Path) -> String {
    project_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "repository".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceArgs {
        SourceArgs {
            project_dir: PathBuf::from("."),
            output: None,
            schema_globs: None,
            include_models: None,
            repository: Some("acme/shop".to_string()),
        }
    }

    fn generator() -> GeneratorArgs {
        GeneratorArgs {
            api_key: Some("sk-test".to_string()),
            model: None,
            api_base: None,
        }
    }

    #[test]
    fn test_defaults_apply_when_nothing_is_set() {
        let cfg = merge(&source(), Some(&generator()), FileSettings::default());
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cfg.schema_globs, parse_glob_list(DEFAULT_SCHEMA_GLOBS));
        assert!(!cfg.include_models);
        assert!(cfg.model.is_empty());
    }

    #[test]
    fn test_file_settings_fill_gaps_and_flags_win() {
        let settings = FileSettings {
            model: Some("gpt-4o-mini".to_string()),
            output: Some(PathBuf::from("docs/db.mmd")),
            include_models: Some(true),
            schema_globs: Some(vec!["db/*.sql".to_string()]),
            ..FileSettings::default()
        };
        let mut src = source();
        src.schema_globs = Some("**/*.prisma, **/*.sql".to_string());
        let mut gen_args = generator();
        gen_args.model = Some("gpt-4o".to_string());

        let cfg = merge(&src, Some(&gen_args), settings);
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.output_path, PathBuf::from("docs/db.mmd"));
        assert!(cfg.include_models);
        assert_eq!(cfg.schema_globs, vec!["**/*.prisma".to_string(), "**/*.sql".to_string()]);
        assert_eq!(cfg.api_key, "sk-test");
    }

    #[test]
    fn test_prompt_command_needs_no_generator_args() {
        let cfg = merge(&source(), None, FileSettings::default());
        assert!(cfg.api_key.is_empty());
        assert_eq!(cfg.repository, "acme/shop");
    }
}
