//! Filesystem access used by the build pipelines.
//!
//! All reads and writes go through [`TokenFs`] so the pipelines can be
//! exercised in tests without touching the real filesystem.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};

pub trait TokenFs {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
pub struct OsFs;

impl TokenFs for OsFs {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|source| BuildError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|source| BuildError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory filesystem, flat path→contents map. Directories are implicit.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl TokenFs for MemoryFs {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| BuildError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.insert(path, contents);
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}
