use crate::ctype::isspace;

/// Splits text into lines on `\n`, stripping one trailing `\r` from each so
/// CRLF input classifies the same as LF input. Unlike [`str::lines`], a
/// trailing newline yields a final empty line, which the classifier turns
/// into a `Blank` block.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// True if the line contains nothing but ASCII whitespace.
pub fn is_blank(s: &str) -> bool {
    s.bytes().all(isspace)
}

/// Trims ASCII whitespace from the front of a line. ASCII-only so the
/// returned slice always starts on a char boundary.
pub fn ltrim_str(s: &str) -> &str {
    let skip = s.bytes().take_while(|&b| isspace(b)).count();
    &s[skip..]
}
