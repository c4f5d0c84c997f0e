//! Builds the destination directory that replaces authored path prefixes.

use crate::error::Result;
use crate::ext::PathExt;
use clap::ValueEnum;
use std::fmt::Display;
use std::path::Path;

/// Separator convention of the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PathStyle {
    /// Separator of the running platform.
    #[default]
    Native,
    /// Forward slashes.
    Unix,
    /// Backslashes.
    Windows,
}

impl PathStyle {
    pub fn separator(self) -> char {
        match self {
            PathStyle::Native => std::path::MAIN_SEPARATOR,
            PathStyle::Unix => '/',
            PathStyle::Windows => '\\',
        }
    }
}

impl Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PathStyle::Native => "native",
            PathStyle::Unix => "unix",
            PathStyle::Windows => "windows",
        };
        write!(f, "{s}")
    }
}

/// Absolute destination for a project: `base` joined with `workpath`, normalized,
/// ending in a separator.
pub fn destination_dir(base: &Path, workpath: &Path, style: PathStyle) -> Result<String> {
    let dir = base.join(workpath).normalized();
    Ok(format_dir(dir.to_str_checked()?, style))
}

/// Rewrites every separator of `dir` to `style` and appends a trailing one.
pub fn format_dir(dir: &str, style: PathStyle) -> String {
    let separator = style.separator();
    let mut formatted: String = dir
        .chars()
        .map(|c| if c == '/' || c == '\\' { separator } else { c })
        .collect();
    if !formatted.ends_with(separator) {
        formatted.push(separator);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unix_directory_with_trailing_separator() {
        assert_eq!(format_dir("/home/ci/build", PathStyle::Unix), "/home/ci/build/");
        assert_eq!(format_dir("/home/ci/build/", PathStyle::Unix), "/home/ci/build/");
    }

    #[test]
    fn formats_windows_directory() {
        assert_eq!(format_dir("D:/out", PathStyle::Windows), r"D:\out\");
        assert_eq!(format_dir(r"D:\out\", PathStyle::Unix), "D:/out/");
    }

    #[test]
    fn destination_joins_relative_workpath() {
        let dest = destination_dir(
            Path::new("/work"),
            Path::new("./exports/../demo"),
            PathStyle::Unix,
        )
        .unwrap();
        assert_eq!(dest, "/work/demo/");
    }

    #[test]
    fn absolute_workpath_wins_over_base() {
        let dest =
            destination_dir(Path::new("/work"), Path::new("/srv/demo"), PathStyle::Unix).unwrap();
        assert_eq!(dest, "/srv/demo/");
    }

    #[test]
    fn style_display_matches_cli_values() {
        assert_eq!(PathStyle::Native.to_string(), "native");
        assert_eq!(PathStyle::Unix.to_string(), "unix");
        assert_eq!(PathStyle::Windows.to_string(), "windows");
    }
}
