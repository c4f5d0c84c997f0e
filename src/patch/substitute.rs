//! Recognition and replacement of absolute-looking path prefixes.
//!
//! A prefix is an optional drive (`C:`) or home marker (`~`), a separator
//! (`/`, `\\` or `\`) that must be followed by something other than whitespace
//! or `/`, and then any number of directory segments each ending in a
//! separator.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Separators in the order they are tried. Two backslashes win over one.
const SEPARATORS: [&str; 3] = ["/", "\\\\", "\\"];

/// Greedy run of directory segments, anchored at the end of the first separator.
static SEGMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[ a-zA-Z0-9+\-_.$●]+(?:/|\\\\|\\))*").expect("invalid segments regex")
});

/// Doubles every backslash so the destination survives one round of unescaping
/// once it is embedded in a quoted template string.
pub fn escape_destination(destination: &str) -> String {
    destination.replace('\\', "\\\\")
}

/// Replaces every absolute-looking path prefix in `literal` with `destination`.
///
/// The destination is inserted verbatim; callers escape it first with
/// [`escape_destination`]. Text that does not look like a path is kept as is.
/// Occurrences of `destination` already present in the literal are matched as a
/// whole, so patching an already patched literal leaves it unchanged.
pub fn replace_paths(literal: &str, destination: &str) -> String {
    let mut patched = String::with_capacity(literal.len());
    let mut last = 0;
    for span in PathPrefixes::protecting(literal, destination) {
        patched.push_str(&literal[last..span.start]);
        patched.push_str(destination);
        last = span.end;
    }
    patched.push_str(&literal[last..]);
    patched
}

/// Iterator over the byte ranges of non-overlapping path prefixes, left to right.
pub struct PathPrefixes<'a> {
    haystack: &'a str,
    destination: Option<&'a str>,
    pos: usize,
}

impl<'a> PathPrefixes<'a> {
    pub fn new(haystack: &'a str) -> Self {
        Self { haystack, destination: None, pos: 0 }
    }

    /// Like [`PathPrefixes::new`], but every occurrence of `destination` is one
    /// atomic prefix, and a separator running into it is not a prefix of its own.
    pub fn protecting(haystack: &'a str, destination: &'a str) -> Self {
        Self {
            haystack,
            destination: (!destination.is_empty()).then_some(destination),
            pos: 0,
        }
    }
}

impl Iterator for PathPrefixes<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.haystack.len() {
            let start = self.pos;
            let rest = &self.haystack[start..];
            let protected = self
                .destination
                .and_then(|destination| rest.find(destination).map(|at| (at, destination.len())));

            let len = match protected {
                Some((0, len)) => Some(len + segments_len(&rest[len..])),
                // the head would swallow or look into the next destination
                Some((at, _)) => head_len(rest)
                    .filter(|&head| head < at)
                    .map(|head| head + segments_len(&rest[head..])),
                None => head_len(rest).map(|head| head + segments_len(&rest[head..])),
            };

            if let Some(len) = len {
                self.pos = start + len;
                return Some(start..start + len);
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Length of root plus first separator at the beginning of `candidate`.
fn head_len(candidate: &str) -> Option<usize> {
    // regex has no look-around, so the head is matched by hand
    root_len(candidate)
        .into_iter()
        .chain(std::iter::once(0))
        .find_map(|root| separator_len(&candidate[root..]).map(|sep| root + sep))
}

fn segments_len(candidate: &str) -> usize {
    SEGMENTS_RE.find(candidate).map_or(0, |m| m.end())
}

/// Drive designator (`A:`..`Z:`) or home marker (`~`).
fn root_len(candidate: &str) -> Option<usize> {
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some('~'), _) => Some(1),
        (Some(drive), Some(':')) if drive.is_ascii_uppercase() => Some(2),
        _ => None,
    }
}

/// First separator alternative that is followed by a non-space, non-slash character.
fn separator_len(candidate: &str) -> Option<usize> {
    SEPARATORS
        .iter()
        .filter(|sep| candidate.starts_with(**sep))
        .map(|sep| sep.len())
        .find(|&len| {
            candidate[len..]
                .chars()
                .next()
                .is_some_and(|next| !is_pattern_whitespace(next) && next != '/')
        })
}

/// Whitespace for the separator check. Unlike [`char::is_whitespace`] this
/// includes U+FEFF and excludes U+0085.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_unix_prefix_and_keeps_filename() {
        assert_eq!(
            replace_paths("/Users/alice/proj/scripts/main.lua", "/home/ci/build/"),
            "/home/ci/build/main.lua"
        );
    }

    #[test]
    fn replaces_escaped_windows_prefix() {
        let destination = escape_destination(r"D:\out\");
        assert_eq!(destination, r"D:\\out\\");
        assert_eq!(
            replace_paths(r"C:\\Projects\\MyProj\\data\\level1.json", &destination),
            r"D:\\out\\level1.json"
        );
    }

    #[test]
    fn replaces_single_backslash_prefix() {
        assert_eq!(
            replace_paths(r"C:\Projects\data\level1.json", "/srv/"),
            "/srv/level1.json"
        );
    }

    #[test]
    fn replaces_home_prefix() {
        assert_eq!(replace_paths("~/scripts/boot.js", "/opt/app/"), "/opt/app/boot.js");
    }

    #[test]
    fn keeps_bare_filename() {
        assert_eq!(replace_paths("main.lua", "/opt/app/"), "main.lua");
    }

    #[test]
    fn segments_may_contain_spaces_and_symbols() {
        assert_eq!(
            replace_paths("/Users/John Doe/My+Proj_v1.2/$tmp/●Work/a.lua", "/d/"),
            "/d/a.lua"
        );
    }

    #[test]
    fn replaces_every_prefix_in_literal() {
        assert_eq!(
            replace_paths("/a/x.lua;/b/c/y.lua", "/d/"),
            "/d/x.lua;/d/y.lua"
        );
    }

    #[test]
    fn relative_paths_with_inner_separator_are_rewritten() {
        assert_eq!(replace_paths("scripts/main.lua", "/d/"), "scripts/d/main.lua");
    }

    #[test]
    fn separator_followed_by_slash_or_space_is_not_a_root() {
        assert_eq!(replace_paths("//server/share/x.lua", "/d/"), "//d/x.lua");
        assert_eq!(replace_paths("a / b", "/d/"), "a / b");
        assert_eq!(replace_paths("/", "/d/"), "/");
    }

    #[test]
    fn lowercase_drive_is_not_a_root() {
        assert_eq!(replace_paths("c:/x/a.lua", "/d/"), "c:/d/a.lua");
    }

    #[test]
    fn destination_is_inserted_verbatim() {
        assert_eq!(replace_paths("/a/x.lua", "/$1/$&/"), "/$1/$&/x.lua");
    }

    #[test]
    fn prefixes_are_reported_left_to_right() {
        let spans: Vec<_> = PathPrefixes::new("C:\\a\\f ~/b/g").collect();
        assert_eq!(spans, vec![0..5, 7..11]);
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace_but_next_line_does_not() {
        assert_eq!(replace_paths("/\u{feff}x", "/d/"), "/\u{feff}x");
        assert_eq!(replace_paths("/\u{3000}x", "/d/"), "/\u{3000}x");
        assert_eq!(replace_paths("/\u{85}x", "/d/"), "/d/\u{85}x");
    }

    #[test]
    fn existing_destination_extended_by_segments_is_replaced() {
        assert_eq!(replace_paths("/d/x/y.lua", "/d/"), "/d/y.lua");
    }

    #[test]
    fn patched_literals_are_stable_for_any_destination() {
        let destinations = [
            "/d/".to_string(),
            "/home/josé/out (x86)/".to_string(),
            escape_destination(r"C:\Program Files (x86)\Game\"),
            escape_destination(r"D:\out\"),
        ];
        let literals = [
            "/Users/alice/x.lua",
            r"C:\\Projects\\data\\level1.json",
            "//server/share/a.lua",
            "scripts/main.lua",
            "~/boot.js",
            r"a\/x/b.lua",
            "/a/x.lua;/b/c/y.lua",
        ];
        for destination in &destinations {
            for literal in literals {
                let once = replace_paths(literal, destination);
                assert_eq!(replace_paths(&once, destination), once, "{literal} -> {destination}");
            }
        }
    }

    #[test]
    fn separator_next_to_destination_is_left_alone() {
        let destination = escape_destination(r"D:\out\");
        let once = replace_paths(r"a\/x/b.lua", &destination);
        assert_eq!(once, r"a\D:\\out\\b.lua");
        assert_eq!(replace_paths(&once, &destination), once);
    }
}
