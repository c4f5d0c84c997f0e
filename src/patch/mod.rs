//! The path-rewriting engine and the per-project step built on top of it.
//!
//! - `locator`: finds `evalFile("...")` expressions in raw template text
//! - `substitute`: recognizes and replaces absolute-looking path prefixes
//! - `template`: applies both to a whole template
//! - `destination`: formats the directory that replaces the prefixes
//! - `project`: reads, patches and writes back one project's template

pub mod destination;
pub mod locator;
pub mod project;
pub mod substitute;
pub mod template;

pub use destination::PathStyle;
pub use locator::{find_expressions, find_literals, Expression};
pub use project::{patch_project, PatchOptions, PatchOutcome, PatchReport};
pub use substitute::{escape_destination, replace_paths};
pub use template::{patch_template, PatchedTemplate};
