// erdwatch-core/src/infrastructure/collector.rs

use crate::domain::error::DomainError;
use crate::domain::ports::SchemaCollector;
use crate::domain::schema::SchemaFile;

use ignore::{DirEntry, WalkBuilder};
use ignore::overrides::{Override, OverrideBuilder};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Files at or above this size are never read.
pub const MAX_FILE_BYTES: u64 = 1_000_000;

/// Walks the project honouring .gitignore / .git/info/exclude,
/// keeping files matched by the configured globs.
pub struct GitAwareCollector {
    max_file_bytes: u64,
}

impl Default for GitAwareCollector {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_FILE_BYTES,
        }
    }
}

impl SchemaCollector for GitAwareCollector {
    fn collect(&self, root: &Path, patterns: &[String]) -> Result<Vec<SchemaFile>, DomainError> {
        self.discover(root, patterns)
    }
}

impl GitAwareCollector {
    pub fn with_max_file_bytes(max_file_bytes: u64) -> Self {
        Self { max_file_bytes }
    }

    #[instrument(skip(self, patterns), fields(patterns = patterns.len()))]
    pub fn discover(&self, root: &Path, patterns: &[String]) -> Result<Vec<SchemaFile>, DomainError> {
        let matcher = build_matcher(root, patterns)?;

        // The walker only prunes VCS-ignored paths (dotfiles and .ignore files
        // are kept). Glob selection happens afterwards so that a whitelist glob
        // can never resurrect an ignored file.
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(true)
            .git_exclude(true)
            .git_global(false)
            .require_git(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| !is_git_dir(entry))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            let rel_path = path.strip_prefix(root).unwrap_or(path);
            if !matcher.matched(rel_path, false).is_whitelist() {
                continue;
            }

            if let Some(file) = self.read_schema_file(path, rel_path) {
                files.push(file);
            }
        }

        info!("🕵️‍♀️  Collected {} schema file(s) under {:?}", files.len(), root);
        Ok(files)
    }

    // Per-file failures are swallowed: one bad file must not abort collection.
    fn read_schema_file(&self, path: &Path, rel_path: &Path) -> Option<SchemaFile> {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!(path = ?path, "Cannot stat schema file: {}", e);
                return None;
            }
        };

        if size >= self.max_file_bytes {
            warn!(path = ?path, size, "Schema file too large, skipped");
            return None;
        }

        match fs::read_to_string(path) {
            // The file may have grown since the metadata call.
            Ok(content) if content.len() as u64 >= self.max_file_bytes => {
                warn!(path = ?path, size = content.len(), "Schema file too large, skipped");
                None
            }
            Ok(content) => Some(SchemaFile {
                path: to_slash_path(rel_path),
                size: content.len() as u64,
                content,
            }),
            Err(e) => {
                warn!(path = ?path, "Cannot read schema file as UTF-8 text: {}", e);
                None
            }
        }
    }
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && entry.file_name() == ".git"
}

fn build_matcher(root: &Path, patterns: &[String]) -> Result<Override, DomainError> {
    let mut builder = OverrideBuilder::new(root);
    for pattern in patterns {
        builder
            .add(pattern)
            .map_err(|e| DomainError::InvalidGlob {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
    }
    builder.build().map_err(|e| DomainError::InvalidGlob {
        pattern: patterns.join(","),
        reason: e.to_string(),
    })
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &[u8]) -> Result<()> {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn globs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|g| g.to_string()).collect()
    }

    fn paths(files: &[SchemaFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_collects_matching_files_only() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "prisma/schema.prisma", b"model User { id Int @id }")?;
        write(dir.path(), "db/migrations/001_init.sql", b"CREATE TABLE users (id int);")?;
        write(dir.path(), "src/main.rs", b"fn main() {}")?;

        let files = GitAwareCollector::default()
            .collect(dir.path(), &globs(&["**/*.prisma", "**/*.sql"]))?;

        assert_eq!(paths(&files), vec!["db/migrations/001_init.sql", "prisma/schema.prisma"]);
        let prisma = files.iter().find(|f| f.path.ends_with(".prisma")).unwrap();
        assert_eq!(prisma.content, "model User { id Int @id }");
        assert_eq!(prisma.size, 25);
        Ok(())
    }

    #[test]
    fn test_gitignored_files_are_excluded() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), ".gitignore", b"tmp/\nlocal.sql\n")?;
        write(dir.path(), "schema.sql", b"CREATE TABLE a (id int);")?;
        write(dir.path(), "local.sql", b"CREATE TABLE scratch (id int);")?;
        write(dir.path(), "tmp/dump.sql", b"CREATE TABLE dump (id int);")?;

        let files = GitAwareCollector::default().collect(dir.path(), &globs(&["**/*.sql"]))?;

        assert_eq!(paths(&files), vec!["schema.sql"]);
        Ok(())
    }

    #[test]
    fn test_dot_paths_are_collected_unless_vcs_ignored() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), ".db/schema.sql", b"CREATE TABLE a (id int);")?;
        write(dir.path(), ".schema.sql", b"CREATE TABLE b (id int);")?;
        write(dir.path(), ".ignore", b"*.sql\n")?;
        write(dir.path(), ".git/info/exclude.sql", b"not a schema")?;

        let files = GitAwareCollector::default()
            .collect(dir.path(), &globs(&[".db/schema.sql", "**/*.sql"]))?;

        assert_eq!(paths(&files), vec![".db/schema.sql", ".schema.sql"]);
        Ok(())
    }

    #[test]
    fn test_recorded_size_matches_content() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "schema.sql", b"CREATE TABLE a (id int);")?;

        let files = GitAwareCollector::default().collect(dir.path(), &globs(&["*.sql"]))?;

        assert_eq!(files[0].size, files[0].content.len() as u64);
        Ok(())
    }

    #[test]
    fn test_negated_glob_excludes() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "db/schema.sql", b"a")?;
        write(dir.path(), "db/seeds/seed.sql", b"b")?;

        let files = GitAwareCollector::default()
            .collect(dir.path(), &globs(&["**/*.sql", "!**/seeds/**"]))?;

        assert_eq!(paths(&files), vec!["db/schema.sql"]);
        Ok(())
    }

    #[test]
    fn test_size_threshold_is_exclusive() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "big.sql", &vec![b'x'; MAX_FILE_BYTES as usize])?;
        write(dir.path(), "almost.sql", &vec![b'y'; MAX_FILE_BYTES as usize - 1])?;

        let files = GitAwareCollector::default().collect(dir.path(), &globs(&["*.sql"]))?;

        assert_eq!(paths(&files), vec!["almost.sql"]);
        assert!(files.iter().all(|f| f.size < MAX_FILE_BYTES));
        Ok(())
    }

    #[test]
    fn test_unreadable_file_is_omitted_not_fatal() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "binary.sql", &[0xff, 0xfe, 0x00, 0xc3])?;
        write(dir.path(), "schema.sql", b"CREATE TABLE a (id int);")?;

        let files = GitAwareCollector::default().collect(dir.path(), &globs(&["*.sql"]))?;

        assert_eq!(paths(&files), vec!["schema.sql"]);
        Ok(())
    }

    #[test]
    fn test_no_match_is_empty_not_error() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "README.md", b"# hi")?;

        let files = GitAwareCollector::default().collect(dir.path(), &globs(&["**/*.prisma"]))?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_glob_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let err = GitAwareCollector::default()
            .collect(dir.path(), &globs(&["db/[unclosed.sql"]))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidGlob { pattern, .. } if pattern == "db/[unclosed.sql"));
        Ok(())
    }

    #[test]
    fn test_custom_threshold() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "a.sql", b"0123456789")?;

        let files = GitAwareCollector::with_max_file_bytes(10).collect(dir.path(), &globs(&["*.sql"]))?;
        assert!(files.is_empty());
        Ok(())
    }
}
