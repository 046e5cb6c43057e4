//! File System Port
//!
//! All scaffolding I/O goes through the `FileSystem` trait so the
//! orchestrator can be exercised against an in-memory implementation.
//!
//! - `LocalFs` - standard disk I/O with atomic writes
//! - `MockFileSystem` - in-memory, test builds only

use std::io::Write as _;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Abstract file system interface
pub trait FileSystem {
    /// Read file bytes
    fn read(&self, path: &Path) -> ScaffoldResult<Vec<u8>>;

    /// Write file bytes, creating parent directories and replacing any existing file
    fn write(&self, path: &Path, contents: &[u8]) -> ScaffoldResult<()>;

    /// Create directory and parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> ScaffoldResult<Vec<u8>> {
        std::fs::read(path).map_err(|source| ScaffoldError::AssetRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> ScaffoldResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        self.create_dir_all(parent)?;

        let to_write_err = |source: std::io::Error| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Temp file in the destination directory so the rename stays on one filesystem.
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // 0666 minus umask, as a plain create would give.
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(parent).map_err(to_write_err)?;
        tmp.write_all(contents).map_err(to_write_err)?;
        tmp.as_file().sync_all().map_err(to_write_err)?;
        tmp.persist(path).map_err(|e| to_write_err(e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
/// Records every write in order.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::BTreeMap<std::path::PathBuf, Vec<u8>>>>,
    pub dirs: std::sync::Arc<std::sync::Mutex<std::collections::BTreeSet<std::path::PathBuf>>>,
    pub writes: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<std::path::PathBuf>, contents: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.to_vec());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> ScaffoldResult<Vec<u8>> {
        self.contents(path).ok_or_else(|| ScaffoldError::AssetRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> ScaffoldResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }
}
