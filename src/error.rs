use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The template does not start with an XML declaration.
    /// `path` is known once the error leaves the per-project step.
    #[error("Project is not a valid xml project template{}.", describe_template(.path))]
    InvalidTemplate { path: Option<PathBuf> },

    #[error("No project descriptor found in '{project_dir}'. Tried: {descriptor_files}.")]
    ProjectNotFound { project_dir: String, descriptor_files: String },

    #[error("Failed to parse project descriptor. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse project descriptor. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// The descriptor parsed but describes an unusable project.
    #[error("Project validation error: {0}.")]
    ProjectValidation(String),

    #[error("Failed to patch {failed} of {total} project(s).")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Attaches the template location to an `InvalidTemplate` error.
    pub fn at_template(self, template: &Path) -> Self {
        match self {
            Error::InvalidTemplate { path: None } => {
                Error::InvalidTemplate { path: Some(template.to_path_buf()) }
            }
            other => other,
        }
    }
}

fn describe_template(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(": '{}'", path.display()))
        .unwrap_or_default()
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
