//! Temporary directories for schema and source document fixtures.
//!
//! # Examples
//!
//! ```
//! use test_helpers::documents::DocumentDir;
//!
//! let dir = DocumentDir::new().expect("create document dir");
//! let path = dir.write("schema.toml", "id = \"identity\"\n").expect("write schema");
//! assert!(path.as_str().ends_with("schema.toml"));
//! ```

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[derive(Debug)]
pub struct DocumentDir {
    dir: TempDir,
}

impl DocumentDir {
    /// Create a fresh, empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary document directory")?;
        Ok(Self { dir })
    }

    /// Write `contents` to `name` inside the directory and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path is not UTF-8 or the write fails.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = Utf8PathBuf::from_path_buf(self.dir.path().join(name))
            .map_err(|path| anyhow!("non UTF-8 document path: {}", path.display()))?;
        std::fs::write(&path, contents).with_context(|| format!("write document {path}"))?;
        Ok(path)
    }
}
