use crate::error::{Error, Result};
use crate::storage::interface::TextStorage;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage, handy for embedding the patcher and for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<P: Into<PathBuf>, S: Into<String>>(&self, path: P, text: S) {
        self.files.borrow_mut().insert(path.into(), text.into());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl TextStorage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<String> {
        self.get(path).ok_or_else(|| {
            Error::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, text: &str) -> Result<()> {
        self.insert(path, text);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
