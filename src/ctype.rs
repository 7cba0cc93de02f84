//! Locale-independent ASCII byte classifiers. Multibyte UTF-8 sequences
//! fall through all of these, which is what the scanners rely on.

pub fn isspace(ch: u8) -> bool {
    matches!(ch, 9..=13 | 32)
}

pub fn isdigit(ch: u8) -> bool {
    matches!(ch, b'0'..=b'9')
}
