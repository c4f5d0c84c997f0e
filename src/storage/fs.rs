use crate::error::{Error, Result};
use crate::storage::interface::TextStorage;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Storage backed by the local filesystem.
///
/// Writes go to a temporary file next to the target which is then renamed over it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

impl TextStorage for FsStorage {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(Error::IoError)
    }

    fn write(&self, path: &Path, text: &str) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(text.as_bytes())?;
        temp.as_file().sync_all()?;
        if let Ok(metadata) = std::fs::metadata(path) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.persist(path).map_err(|e| Error::IoError(e.error))?;
        log::debug!("Wrote {} byte(s) to {}", text.len(), path.display());
        Ok(())
    }
}
