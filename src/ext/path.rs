use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use evalpatch::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Resolves `.` and `..` components without touching the filesystem.
    ///
    /// A `..` that would climb above the root is dropped.
    ///
    /// # Examples
    /// ```
    /// use evalpatch::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("/work/./exports/../demo");
    /// assert_eq!(path.normalized(), PathBuf::from("/work/demo"));
    /// ```
    fn normalized(&self) -> PathBuf;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn normalized(&self) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    let climbs_relative = matches!(
                        normalized.components().next_back(),
                        None | Some(Component::ParentDir)
                    );
                    if climbs_relative && !normalized.has_root() {
                        normalized.push("..");
                    } else {
                        normalized.pop();
                    }
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_to_str_checked_valid() {
        let path = Path::new("valid_path");
        assert_eq!(path.to_str_checked().unwrap(), "valid_path");
    }

    #[test]
    fn test_normalized_drops_current_dir() {
        assert_eq!(Path::new("/a/./b/.").normalized(), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_normalized_resolves_parent_dir() {
        assert_eq!(Path::new("/a/b/../c").normalized(), PathBuf::from("/a/c"));
        assert_eq!(Path::new("/..").normalized(), PathBuf::from("/"));
    }

    #[test]
    fn test_normalized_keeps_leading_parent_of_relative_path() {
        assert_eq!(Path::new("../a/../../b").normalized(), PathBuf::from("../../b"));
        assert_eq!(Path::new("./a").normalized(), PathBuf::from("a"));
    }
}
