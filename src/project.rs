//! Project descriptors: where a project lives, its template, and its assets.

use crate::constants::{DEFAULT_WORKPATH, PROJECT_FILENAMES};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Kind of an asset listed in a project manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Script,
    Data,
    /// Any other type (images, sounds, ...). Ignored by the patcher.
    #[serde(other)]
    Other,
}

impl AssetType {
    /// Whether assets of this type are loaded through `evalFile` expressions.
    pub fn is_patchable(self) -> bool {
        matches!(self, AssetType::Script | AssetType::Data)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub r#type: AssetType,
    #[serde(default)]
    pub path: Option<String>,
}

/// A project as described by its `project.json` / `project.yaml` descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Identifier used as a log prefix. Defaults to the descriptor directory name.
    #[serde(default)]
    pub uid: String,
    /// Working directory of the project. Relative values are resolved against the
    /// descriptor's directory when loaded through [`Project::load`].
    #[serde(default = "get_default_workpath")]
    pub workpath: PathBuf,
    /// Template file name, relative to `workpath`.
    pub template: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Project {
    /// Loads a project from a descriptor file or from a directory containing one.
    ///
    /// Directories are searched for the names in `PROJECT_FILENAMES`, first match wins.
    pub fn load<P: AsRef<Path>>(location: P) -> Result<Self> {
        let location = location.as_ref();
        if location.is_file() {
            return Self::from_descriptor(location);
        }

        for descriptor_name in PROJECT_FILENAMES.iter() {
            let descriptor_path = location.join(descriptor_name);
            if descriptor_path.is_file() {
                return Self::from_descriptor(&descriptor_path);
            }
        }

        Err(Error::ProjectNotFound {
            project_dir: location.display().to_string(),
            descriptor_files: PROJECT_FILENAMES.join(", "),
        })
    }

    /// Parses a descriptor file, choosing JSON or YAML by its extension.
    pub fn from_descriptor(descriptor_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(descriptor_path)?;
        let mut project: Project = match descriptor_path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        let descriptor_dir = descriptor_path.parent().unwrap_or_else(|| Path::new(""));
        project.workpath = descriptor_dir.join(&project.workpath).normalized();
        if project.uid.is_empty() {
            project.uid = descriptor_dir
                .normalized()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| descriptor_path.to_string_lossy().into_owned());
        }

        project.validate()?;
        log::debug!("Loaded project '{}' from {}", project.uid, descriptor_path.display());
        Ok(project)
    }

    pub fn validate(&self) -> Result<()> {
        if self.template.trim().is_empty() {
            return Err(Error::ProjectValidation(format!(
                "project '{}' has an empty template name",
                self.uid
            )));
        }
        if Path::new(&self.template).is_absolute() {
            return Err(Error::ProjectValidation(format!(
                "template of project '{}' must be relative to its workpath",
                self.uid
            )));
        }
        Ok(())
    }

    /// Whether at least one asset is a script or data file.
    pub fn needs_patching(&self) -> bool {
        self.assets.iter().any(|asset| asset.r#type.is_patchable())
    }

    /// Location of the template file.
    pub fn template_path(&self) -> PathBuf {
        self.workpath.join(&self.template)
    }
}

fn get_default_workpath() -> PathBuf {
    PathBuf::from(DEFAULT_WORKPATH)
}
