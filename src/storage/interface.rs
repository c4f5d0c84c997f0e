use crate::error::Result;
use std::path::Path;

/// Trait for reading and writing template text.
pub trait TextStorage {
    /// Reads the whole file at `path` as UTF-8 text.
    ///
    /// # Returns
    /// * `Result<String>` - File contents
    fn read(&self, path: &Path) -> Result<String>;

    /// Replaces the contents of `path` with `text`.
    ///
    /// Implementations must not leave a partially written file behind on failure.
    fn write(&self, path: &Path, text: &str) -> Result<()>;
}
