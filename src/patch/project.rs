//! Per-project patch step: asset gate, destination, read, transform, write.

use crate::error::Result;
use crate::patch::destination::{destination_dir, format_dir, PathStyle};
use crate::patch::substitute::escape_destination;
use crate::patch::template::patch_template;
use crate::project::Project;
use crate::storage::TextStorage;
use log::{debug, info};
use std::path::PathBuf;

/// Knobs for [`patch_project`].
#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// Use this directory instead of the project's own working directory.
    pub destination: Option<String>,
    /// Separator convention of the destination.
    pub path_style: PathStyle,
    /// Directory relative workpaths are resolved against. Defaults to the current directory.
    pub base_dir: Option<PathBuf>,
    /// Compute everything but never write.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub template: PathBuf,
    /// Destination as inserted into the template, backslashes doubled.
    pub destination: String,
    pub expressions: usize,
    pub rewritten: usize,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The project has no script or data assets.
    Skipped,
    Patched(PatchReport),
}

/// Rewrites the `evalFile` paths of a project's template to point at its workpath.
///
/// The template is written back only after the whole transform succeeded, and only
/// when its text changed.
///
/// # Errors
/// * `Error::InvalidTemplate` - the template does not start with `<?xml`
/// * `Error::IoError` - reading or writing the template failed
pub fn patch_project<S>(project: &Project, storage: &S, options: &PatchOptions) -> Result<PatchOutcome>
where
    S: TextStorage + ?Sized,
{
    if !project.needs_patching() {
        debug!("[{}] no script or data assets, skipping", project.uid);
        return Ok(PatchOutcome::Skipped);
    }

    info!("[{}] patching project...", project.uid);

    let destination = match &options.destination {
        Some(destination) => format_dir(destination, options.path_style),
        None => {
            let base = match &options.base_dir {
                Some(base) => base.clone(),
                None => std::env::current_dir()?,
            };
            destination_dir(&base, &project.workpath, options.path_style)?
        }
    };
    let destination = escape_destination(&destination);
    let template = project.template_path();
    debug!("[{}] destination: {}", project.uid, destination);

    let text = storage.read(&template)?;
    let patched = patch_template(&text, &destination).map_err(|err| err.at_template(&template))?;

    let written = if !patched.is_changed() {
        debug!("[{}] {} is already up to date", project.uid, template.display());
        false
    } else if options.dry_run {
        info!(
            "[DRY RUN] [{}] would rewrite {} expression(s) in {}",
            project.uid,
            patched.rewritten,
            template.display()
        );
        false
    } else {
        storage.write(&template, &patched.text)?;
        true
    };

    Ok(PatchOutcome::Patched(PatchReport {
        template,
        destination,
        expressions: patched.expressions,
        rewritten: patched.rewritten,
        written,
    }))
}
