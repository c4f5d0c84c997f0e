/// Command line front end.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Locating and rewriting `evalFile` paths in project templates.
pub mod patch;

/// Project descriptors and their assets.
pub mod project;

/// Reading and writing template text.
pub mod storage;
