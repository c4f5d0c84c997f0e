//! Whole-template rewriting built from the locator and the substituter.

use crate::constants::XML_DECLARATION;
use crate::error::{Error, Result};
use crate::patch::locator::find_expressions;
use crate::patch::substitute::replace_paths;

/// Result of patching one template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedTemplate {
    /// The rewritten template.
    pub text: String,
    /// Number of `evalFile` expressions found.
    pub expressions: usize,
    /// Number of expressions whose literal actually changed.
    pub rewritten: usize,
}

impl PatchedTemplate {
    pub fn is_changed(&self) -> bool {
        self.rewritten > 0
    }
}

/// Checks that `text` starts with the XML declaration.
pub fn validate_template(text: &str) -> Result<()> {
    if text.starts_with(XML_DECLARATION) {
        Ok(())
    } else {
        Err(Error::InvalidTemplate { path: None })
    }
}

/// Rewrites the path prefixes of every `evalFile` literal in `text`.
///
/// `destination` must already be escaped (see
/// [`escape_destination`](crate::patch::substitute::escape_destination)).
/// Everything outside the literals is copied byte for byte.
///
/// # Errors
/// * `Error::InvalidTemplate` - `text` does not start with `<?xml`
pub fn patch_template(text: &str, destination: &str) -> Result<PatchedTemplate> {
    validate_template(text)?;

    let expressions = find_expressions(text);
    let mut patched = String::with_capacity(text.len());
    let mut last = 0;
    let mut rewritten = 0;

    for expr in &expressions {
        let replacement = replace_paths(expr.literal, destination);
        if replacement != expr.literal {
            log::debug!("Rewriting '{}' -> '{}'", expr.literal, replacement);
            rewritten += 1;
        }
        patched.push_str(&text[last..expr.span.start]);
        patched.push_str(&replacement);
        last = expr.span.end;
    }
    patched.push_str(&text[last..]);

    Ok(PatchedTemplate { text: patched, expressions: expressions.len(), rewritten })
}
