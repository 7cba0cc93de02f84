//! Scanners for the line-start markers the classifier recognizes. Each
//! returns byte lengths into the line so the caller can slice the marker
//! off; every marker is pure ASCII, so the lengths are always char-safe.

use crate::ctype::isdigit;

/// The most `#`s a heading marker may carry. `####` and deeper are not
/// recognized and the line falls through to a paragraph.
pub const MAX_HEADING_LEVEL: usize = 3;

/// The most marker digits an ordered item may carry, from CommonMark's
/// "nine digits" rule. Runaway digit strings classify as prose.
pub const MAX_ORDERED_DIGITS: usize = 9;

/// Matches `# `, `## ` or `### ` and returns `(level, marker_len)`.
pub fn heading_start(line: &[u8]) -> Option<(u8, usize)> {
    let level = line.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL || line.get(level) != Some(&b' ') {
        return None;
    }
    Some((level as u8, level + 1))
}

/// Matches `- ` and returns the marker length.
pub fn bullet_item_start(line: &[u8]) -> Option<usize> {
    if line.starts_with(b"- ") {
        Some(2)
    } else {
        None
    }
}

/// Matches `N. ` where `N` is 1 to [`MAX_ORDERED_DIGITS`] digits, and
/// returns `(digits, marker_len)`. The digits are kept literal by the
/// caller; `07.` and `7.` are different labels.
pub fn ordered_item_start(line: &[u8]) -> Option<(usize, usize)> {
    let digits = line.iter().take_while(|&&b| isdigit(b)).count();
    if digits == 0 || digits > MAX_ORDERED_DIGITS {
        return None;
    }
    if line.get(digits) != Some(&b'.') || line.get(digits + 1) != Some(&b' ') {
        return None;
    }
    Some((digits, digits + 2))
}
