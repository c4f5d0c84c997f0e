//! Finds the `evalFile("...")` expressions embedded in raw template text.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Case-insensitive keyword, double-quoted argument that may span lines.
static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)evalFile\("(.*?)"\)"#).expect("invalid evalFile regex")
});

/// A single `evalFile("<literal>")` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    /// The text between the quotes.
    pub literal: &'a str,
    /// Byte range of `literal` within the searched text.
    pub span: Range<usize>,
}

/// Returns every `evalFile` expression in `text`, in order of appearance.
pub fn find_expressions(text: &str) -> Vec<Expression<'_>> {
    EXPRESSION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| Expression { literal: m.as_str(), span: m.range() })
        .collect()
}

/// Returns only the path literals of every `evalFile` expression in `text`.
pub fn find_literals(text: &str) -> Vec<&str> {
    find_expressions(text).into_iter().map(|expr| expr.literal).collect()
}
