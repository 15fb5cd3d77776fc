use crate::error::{GenError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write `content` as the full body of `directory/file_name`.
///
/// The directory is created if absent. An existing file is replaced without
/// warning. The bytes go to a tempfile in the same directory first and are
/// renamed into place, so readers never observe a half-written document.
pub fn write_file(directory: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == ".." {
        return Err(GenError::InvalidFileName(file_name.to_string()));
    }
    let path = directory.join(file_name);
    let write_err = |source| GenError::Write {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(directory).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(directory).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(&path).map_err(|e| write_err(e.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "package.xml", "<Package/>").unwrap();
        assert_eq!(path, dir.path().join("package.xml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<Package/>");
    }

    #[test]
    fn write_file_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a/b/out");
        write_file(&out, "x.xml", "data").unwrap();
        assert!(out.join("x.xml").exists());
    }

    #[test]
    fn write_file_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("x.xml"), "old contents that are longer").unwrap();
        write_file(dir.path(), "x.xml", "new").unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("x.xml")).unwrap(),
            "new"
        );
    }

    #[test]
    fn write_file_rejects_path_separators() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        for name in ["../../escaped.xml", "a/b.xml", "a\\b.xml", ""] {
            let err = write_file(&out, name, "data").unwrap_err();
            assert!(matches!(err, GenError::InvalidFileName(_)), "{name}");
        }
        assert!(!out.exists());
    }

    #[test]
    fn write_failure_names_the_file() {
        let dir = TempDir::new().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, "not a dir").unwrap();
        let err = write_file(&blocker, "package.xml", "data").unwrap_err();
        assert!(matches!(err, GenError::Write { .. }));
        assert!(err.to_string().contains("package.xml"), "{err}");
    }

    #[test]
    fn write_file_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "x.xml", "data").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
