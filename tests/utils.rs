#![allow(dead_code)]

use evalpatch::cli::{run, Args};
use evalpatch::patch::PathStyle;
use std::fs;
use std::path::{Path, PathBuf};

pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Wraps `body` in a minimal project template.
pub fn template(body: &str) -> String {
    format!("{XML_HEADER}<project>\n{body}\n</project>\n")
}

/// Creates `root/name` with a `project.json` describing `assets` and a `project.xml`
/// holding `template_text`. Returns the project directory.
pub fn write_project(root: &Path, name: &str, template_text: &str, assets: &[&str]) -> PathBuf {
    let project_dir = root.join(name);
    fs::create_dir_all(&project_dir).unwrap();

    let assets: Vec<_> = assets
        .iter()
        .map(|asset_type| serde_json::json!({ "type": asset_type }))
        .collect();
    let descriptor = serde_json::json!({
        "uid": name,
        "template": "project.xml",
        "assets": assets,
    });
    fs::write(project_dir.join("project.json"), descriptor.to_string()).unwrap();
    fs::write(project_dir.join("project.xml"), template_text).unwrap();
    project_dir
}

pub fn read_template(project_dir: &Path) -> String {
    fs::read_to_string(project_dir.join("project.xml")).unwrap()
}

/// Arguments equivalent to `evalpatch -vv --path-style unix <projects>`.
pub fn args<P: AsRef<Path>>(projects: &[P]) -> Args {
    Args {
        projects: projects.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        destination: None,
        path_style: PathStyle::Unix,
        recursive: false,
        verbose: 2,
        dry_run: false,
    }
}

/// Runs the CLI on `project_dir` and asserts the template now equals `expected`,
/// printing both versions when they differ.
pub fn run_and_assert(project_dir: &Path, expected: &str) {
    run(args(&[project_dir])).unwrap();
    let actual = read_template(project_dir);
    if actual != expected {
        println!("\n=== Template Comparison ===");
        println!("--- Actual content:\n{actual}");
        println!("--- Expected content:\n{expected}");
        println!("=== End of Comparison ===\n");
        panic!("Templates differ. See above for details.");
    }
}

/// Destination the CLI computes for `project_dir` with the unix path style.
pub fn unix_destination(project_dir: &Path) -> String {
    format!("{}/", project_dir.display().to_string().replace('\\', "/"))
}
