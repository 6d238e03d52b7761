// erdwatch-core/src/infrastructure/config/settings.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

const CANDIDATES: [&str; 2] = ["erdwatch.yaml", "erdwatch.yml"];

/// Optional project-level defaults. CLI flags and env vars win over these.
/// The API key is deliberately absent: secrets never live in the repo.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub output: Option<PathBuf>,
    pub repository: Option<String>,
    pub include_models: Option<bool>,
    /// Either a YAML list or a comma-separated string.
    #[serde(default, deserialize_with = "globs::deserialize")]
    pub schema_globs: Option<Vec<String>>,
}

#[instrument(skip(project_dir))]
pub fn load_file_settings(project_dir: &Path) -> Result<FileSettings, InfrastructureError> {
    let Some(path) = find_settings_file(project_dir) else {
        return Ok(FileSettings::default());
    };
    info!(path = ?path, "Loading project settings");

    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(FileSettings::default());
    }
    let settings: FileSettings = serde_yaml::from_str(&content)?;
    Ok(settings)
}

fn find_settings_file(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

mod globs {
    use crate::domain::config::parse_glob_list;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GlobsRepr {
        List(Vec<String>),
        Csv(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = Option::<GlobsRepr>::deserialize(deserializer)?;
        Ok(repr.map(|r| match r {
            GlobsRepr::List(items) => items
                .iter()
                .flat_map(|item| parse_glob_list(item))
                .collect(),
            GlobsRepr::Csv(raw) => parse_glob_list(&raw),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        assert_eq!(load_file_settings(dir.path())?, FileSettings::default());
        Ok(())
    }

    #[test]
    fn test_loads_list_and_scalars() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("erdwatch.yaml"),
            "model: gpt-4o-mini\noutput: docs/db.mmd\ninclude_models: true\nschema_globs:\n  - prisma/schema.prisma\n  - '**/*.sql'\n",
        )?;

        let settings = load_file_settings(dir.path())?;
        assert_eq!(settings.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(settings.output, Some(PathBuf::from("docs/db.mmd")));
        assert_eq!(settings.include_models, Some(true));
        assert_eq!(
            settings.schema_globs,
            Some(vec!["prisma/schema.prisma".to_string(), "**/*.sql".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_accepts_comma_separated_globs() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("erdwatch.yml"), "schema_globs: '**/*.prisma, db/*.sql'\n")?;

        let settings = load_file_settings(dir.path())?;
        assert_eq!(
            settings.schema_globs,
            Some(vec!["**/*.prisma".to_string(), "db/*.sql".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("erdwatch.yaml"), "api_key: sk-leaked\n")?;

        let err = load_file_settings(dir.path());
        assert!(matches!(err, Err(InfrastructureError::YamlError(_))));
        Ok(())
    }
}
