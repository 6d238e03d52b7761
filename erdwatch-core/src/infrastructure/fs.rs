use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a text file that may legitimately not exist yet.
///
/// A missing file yields `Ok(None)`. Any other failure (permissions,
/// invalid UTF-8, path is a directory) is reported.
pub fn read_optional_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, InfrastructureError> {
    match fs::read_to_string(path.as_ref()) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(InfrastructureError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() -> Result<()> {
        let dir = tempdir()?;
        assert_eq!(read_optional_text(dir.path().join("erd.mmd"))?, None);
        Ok(())
    }

    #[test]
    fn test_existing_file_is_read_verbatim() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("erd.mmd");
        fs::write(&path, "erDiagram\r\n  USER { int id }\r\n")?;

        assert_eq!(
            read_optional_text(&path)?.as_deref(),
            Some("erDiagram\r\n  USER { int id }\r\n")
        );
        Ok(())
    }

    #[test]
    fn test_directory_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        assert!(read_optional_text(dir.path()).is_err());
        Ok(())
    }
}
