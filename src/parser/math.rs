//! Math span extraction.
//!
//! This pass runs over the raw input before any line or inline handling, so
//! that `#`, `-` and `**` inside math can never be re-interpreted by the
//! stages downstream.  Each span is replaced by a placeholder id and stored
//! in a side table; the inline splitter restores them once the line
//! structure is settled.
//!
//! Display spans (`$$…$$`) are lifted in a first sweep and inline spans
//! (`$…$`) in a second, so a `$$` pair can never be mis-read as two inline
//! delimiters.  To the inline sweep, any remaining run of two or more `$`
//! is plain text.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::ctype::{isdigit, isspace};
use crate::parser::options::Parse;

/// The placeholder sentinel, U+FFFC OBJECT REPLACEMENT CHARACTER.  A
/// placeholder id is this sentinel, a decimal counter, and the sentinel
/// again.  Literal occurrences in the input are rewritten to U+FFFD before
/// scanning, so an id can never be forged from outside.
pub(crate) const SENTINEL: &str = "\u{fffc}";

/// One math span lifted out of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathToken {
    /// The placeholder id standing in for this span in the extracted text.
    pub id: String,

    /// Whether the span was display math (`$$…$$`).
    pub display_math: bool,

    /// The span's source with the delimiters stripped.  Never interpreted
    /// as Markdown.
    pub literal: String,
}

/// The result of running [`extract`] over a source text.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// The input with every recognized math span replaced by its
    /// placeholder id.  Contains no `$`-delimited math and no unescorted
    /// sentinel characters.
    pub text: String,

    /// Placeholder id → extracted span.  Ids are unique across both
    /// sweeps; the inline splitter consumes each entry at most once.
    pub tokens: FxHashMap<String, MathToken>,
}

/// Lifts math spans out of `text`.
///
/// Delimiter recognition follows the pandoc `tex_math_dollars` heuristics
/// (see <https://pandoc.org/MANUAL.html#extension-tex_math_dollars>) so
/// that dollar amounts in prose stay prose; `options.relaxed_dollar_matching`
/// drops those guards and pairs any two same-line `$`s.
pub fn extract(text: &str, options: &Parse) -> Extraction {
    let text = protect_sentinel(text);
    let mut extraction = Extraction::default();
    let mut counter = 0;
    let pass_one = extract_display(&text, &mut extraction, &mut counter);
    extraction.text = extract_inline(
        &pass_one,
        &mut extraction,
        &mut counter,
        options.relaxed_dollar_matching,
    );
    extraction
}

/// Rewrites any literal U+FFFC to U+FFFD, the same replacement CommonMark
/// prescribes for NUL.  Input text has no business containing either.
fn protect_sentinel(text: &str) -> Cow<'_, str> {
    if text.contains(SENTINEL) {
        Cow::Owned(text.replace(SENTINEL, "\u{fffd}"))
    } else {
        Cow::Borrowed(text)
    }
}

fn mint_placeholder(counter: &mut usize) -> String {
    let id = format!("{}{}{}", SENTINEL, counter, SENTINEL);
    *counter += 1;
    id
}

fn push_token(extraction: &mut Extraction, counter: &mut usize, display_math: bool, literal: &str) -> String {
    let id = mint_placeholder(counter);
    extraction.tokens.insert(
        id.clone(),
        MathToken {
            id: id.clone(),
            display_math,
            literal: literal.to_string(),
        },
    );
    id
}

/// The display sweep.  An opener is a run of exactly two `$`; longer runs
/// are plain text outright, and singles are left for the inline sweep.  The
/// closer is the nearest later `$$`, newlines included, so display spans
/// may cover several lines.
fn extract_display(input: &str, extraction: &mut Extraction, counter: &mut usize) -> String {
    let bytes = input.as_bytes();
    let dollar = jetscii::ascii_chars!('$');
    let double_dollar = jetscii::Substring::new("$$");

    let mut text = String::with_capacity(input.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let found = match dollar.find(&input[pos..]) {
            Some(i) => pos + i,
            None => break,
        };
        let run = bytes[found..].iter().take_while(|&&b| b == b'$').count();
        if run != 2 {
            text.push_str(&input[pos..found + run]);
            pos = found + run;
            continue;
        }
        match double_dollar.find(&input[found + 2..]) {
            Some(i) => {
                // run-aware opener plus a closer search starting past it
                // means the span body is never empty
                let close = found + 2 + i;
                text.push_str(&input[pos..found]);
                let id = push_token(extraction, counter, true, &input[found + 2..close]);
                text.push_str(&id);
                pos = close + 2;
            }
            None => {
                text.push_str(&input[pos..found + 2]);
                pos = found + 2;
            }
        }
    }
    text.push_str(&input[pos..]);
    text
}

/// The inline sweep, over the display sweep's output.
fn extract_inline(
    input: &str,
    extraction: &mut Extraction,
    counter: &mut usize,
    relaxed: bool,
) -> String {
    let bytes = input.as_bytes();
    let dollar = jetscii::ascii_chars!('$');

    let mut text = String::with_capacity(input.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let found = match dollar.find(&input[pos..]) {
            Some(i) => pos + i,
            None => break,
        };
        let run = bytes[found..].iter().take_while(|&&b| b == b'$').count();
        if run > 1 {
            text.push_str(&input[pos..found + run]);
            pos = found + run;
            continue;
        }
        match scan_to_closing_dollar(bytes, found + 1, relaxed) {
            Some(close) => {
                text.push_str(&input[pos..found]);
                let id = push_token(extraction, counter, false, &input[found + 1..close]);
                text.push_str(&id);
                pos = close + 1;
            }
            None => {
                text.push_str(&input[pos..found + 1]);
                pos = found + 1;
            }
        }
    }
    text.push_str(&input[pos..]);
    text
}

// Heuristics used from https://pandoc.org/MANUAL.html#extension-tex_math_dollars
//
// `content_start` is the byte after the opening `$`; the return value is
// the index of the closing `$`.  A rule violation abandons the whole
// candidate rather than skipping to the next `$`.
fn scan_to_closing_dollar(bytes: &[u8], content_start: usize, relaxed: bool) -> Option<usize> {
    if content_start >= bytes.len() {
        return None;
    }

    // space not allowed after the opening $
    if !relaxed && isspace(bytes[content_start]) {
        return None;
    }

    let mut pos = content_start;
    loop {
        while pos < bytes.len() && bytes[pos] != b'$' && bytes[pos] != b'\n' {
            pos += 1;
        }

        // inline spans never cross a line boundary
        if pos >= bytes.len() || bytes[pos] == b'\n' {
            return None;
        }

        if relaxed {
            return Some(pos);
        }

        let before = bytes[pos - 1];

        // space not allowed before the closing $
        if isspace(before) {
            return None;
        }

        // dollar signs must be backslash-escaped if they occur within math
        if before == b'\\' {
            pos += 1;
            continue;
        }

        // the closing $ can't be followed by a digit
        if pos + 1 < bytes.len() && isdigit(bytes[pos + 1]) {
            return None;
        }

        return Some(pos);
    }
}

/// Finds the byte range of the first well-formed placeholder id in `text`,
/// if any.  The range covers both sentinels.
pub(crate) fn next_placeholder(text: &str) -> Option<(usize, usize)> {
    let finder = jetscii::Substring::new(SENTINEL);
    let mut from = 0;
    while from < text.len() {
        let start = match finder.find(&text[from..]) {
            Some(i) => from + i,
            None => return None,
        };
        let digits_at = start + SENTINEL.len();
        let rest = &text[digits_at..];
        let digits = rest.bytes().take_while(|&b| isdigit(b)).count();
        if digits > 0 && rest[digits..].starts_with(SENTINEL) {
            return Some((start, digits_at + digits + SENTINEL.len()));
        }
        from = digits_at;
    }
    None
}
