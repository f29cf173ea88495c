// crates/block_marker/src/lib.rs

//! Marker-line recognition shared by the block selector and the CLI.
//!
//! A marker line has the shape `<keyword> <phase> <identifier...>`; only the
//! `before` and `after` keywords open a block. Lines are raw bytes and need not
//! be valid UTF-8.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Keyword of a marker emitted ahead of a phase.
pub const BEFORE_KEYWORD: &str = "before";

/// Keyword of a marker emitted after a phase.
pub const AFTER_KEYWORD: &str = "after";

/// Every keyword that starts a block.
pub const ACTIVATING_KEYWORDS: [&str; 2] = [BEFORE_KEYWORD, AFTER_KEYWORD];

// Byte-oriented and ASCII whitespace only: invalid UTF-8 and U+00A0 are token bytes.
// The greedy separator before the remainder leaves only one whitespace byte for it
// when the rest of the line is blank.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^([^\t\n\x0C\r ]+)[\t\n\x0C\r ]+([^\t\n\x0C\r ]+)[\t\n\x0C\r ]+(.+)$").unwrap()
});

/// The three fields of a marker-shaped line, borrowed from the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub keyword: &'a [u8],
    pub phase: &'a [u8],
    /// Remainder of the line with trailing whitespace removed. May contain spaces, or be empty.
    pub identifier: &'a [u8],
}

impl<'a> Marker<'a> {
    /// Returns true when the keyword is exactly `before` or `after`.
    pub fn is_activating(&self) -> bool {
        ACTIVATING_KEYWORDS
            .iter()
            .any(|keyword| keyword.as_bytes() == self.keyword)
    }
}

/// Splits a line into marker fields if it has the marker shape.
///
/// The keyword is not checked here; `foo bar baz` parses fine but is not
/// activating. Returns `None` for lines that start with whitespace, or that
/// have nothing after the whitespace following the phase token.
/// `before escape  ` is a marker with an empty identifier; `before escape ` is not.
pub fn parse_marker(line: &[u8]) -> Option<Marker<'_>> {
    let caps = MARKER_RE.captures(line)?;
    Some(Marker {
        keyword: caps.get(1)?.as_bytes(),
        phase: caps.get(2)?.as_bytes(),
        identifier: caps.get(3)?.as_bytes().trim_ascii_end(),
    })
}

/// Returns the marker for `line` only if it would open a block.
pub fn activating_marker(line: &[u8]) -> Option<Marker<'_>> {
    parse_marker(line).filter(Marker::is_activating)
}
