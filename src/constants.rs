//! Constants used throughout evalpatch

/// Project descriptor file names in order of preference
pub const PROJECT_FILENAMES: &[&str] = &["project.json", "project.yaml", "project.yml"];

/// Every valid project template starts with this declaration
pub const XML_DECLARATION: &str = "<?xml";

/// Default workpath of a project, relative to its descriptor
pub const DEFAULT_WORKPATH: &str = ".";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
