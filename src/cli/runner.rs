use crate::{
    cli::Args,
    constants::PROJECT_FILENAMES,
    error::{Error, Result},
    ext::PathExt,
    patch::{patch_project, PatchOptions, PatchOutcome},
    project::Project,
    storage::{FsStorage, TextStorage},
};
use log::{debug, error, warn};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Main CLI runner that patches every requested project
pub struct Runner<S: TextStorage> {
    args: Args,
    storage: S,
}

impl Runner<FsStorage> {
    pub fn new(args: Args) -> Self {
        Self::with_storage(args, FsStorage::new())
    }
}

impl<S: TextStorage> Runner<S> {
    pub fn with_storage(args: Args, storage: S) -> Self {
        Self { args, storage }
    }

    /// Patches each project in turn. Every project is attempted even if an earlier one failed.
    pub fn run(self) -> Result<()> {
        let locations = self.discover_projects();
        let options = self.patch_options();
        let total = locations.len();
        let mut failed = 0;
        let mut seen_templates = HashSet::new();

        for location in &locations {
            let project = match Project::load(location) {
                Ok(project) => project,
                Err(err) => {
                    error!("Failed to load project from {}: {err}", location.display());
                    eprintln!("{}: {err}", location.display());
                    failed += 1;
                    continue;
                }
            };

            if !seen_templates.insert(template_key(&project.template_path())) {
                warn!(
                    "[{}] template {} already patched in this run, skipping",
                    project.uid,
                    project.template_path().display()
                );
                continue;
            }

            match patch_project(&project, &self.storage, &options) {
                Ok(PatchOutcome::Skipped) => {
                    println!("[{}] skipped: no script or data assets.", project.uid);
                }
                Ok(PatchOutcome::Patched(report)) => {
                    let action = match (report.written, self.args.dry_run) {
                        (true, _) => "patched",
                        (false, true) if report.rewritten > 0 => "would patch",
                        _ => "unchanged",
                    };
                    println!(
                        "[{}] {}: {} of {} expression(s) rewritten in {}.",
                        project.uid,
                        action,
                        report.rewritten,
                        report.expressions,
                        report.template.display()
                    );
                }
                Err(err) => {
                    error!("[{}] patching failed: {err}", project.uid);
                    eprintln!("[{}] {err}", project.uid);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(Error::BatchFailed { failed, total });
        }
        Ok(())
    }

    fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            destination: self.args.destination.clone(),
            path_style: self.args.path_style,
            base_dir: None,
            dry_run: self.args.dry_run,
        }
    }

    /// Expands the PROJECT arguments into project locations.
    fn discover_projects(&self) -> Vec<PathBuf> {
        if !self.args.recursive {
            return self.args.projects.clone();
        }

        let mut locations = Vec::new();
        for root in &self.args.projects {
            if root.is_dir() {
                locations.extend(find_project_dirs(root));
            } else {
                locations.push(root.clone());
            }
        }
        if locations.is_empty() {
            warn!("No project descriptors found");
        }
        locations
    }
}

/// Directories below `root` that contain a project descriptor, in sorted order.
pub fn find_project_dirs(root: &Path) -> Vec<PathBuf> {
    let dirs: BTreeSet<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| PROJECT_FILENAMES.contains(&name))
        })
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect();
    debug!("Discovered {} project(s) below {}", dirs.len(), root.display());
    dirs.into_iter().collect()
}

/// Identity of a template for de-duplication within one run.
///
/// Symlinks and relative spellings resolve to the same key; a template that cannot be
/// canonicalized falls back to its lexical absolute form.
fn template_key(template: &Path) -> PathBuf {
    std::fs::canonicalize(template).unwrap_or_else(|_| match std::env::current_dir() {
        Ok(cwd) => cwd.join(template).normalized(),
        Err(_) => template.normalized(),
    })
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
