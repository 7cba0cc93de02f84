//! Inline splitting.
//!
//! Turns a classified line's residual text into spans.  Placeholders are
//! restored before bold splitting, so a `**` inside math source can never
//! pair with one outside it.

use rustc_hash::FxHashMap;

use crate::nodes::{Inline, NodeMath};
use crate::parser::math::{self, MathToken};

/// Splits `text` into inline spans, consuming the math tokens it references
/// from `tokens`.
pub(crate) fn parse_inlines(text: &str, tokens: &mut FxHashMap<String, MathToken>) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut rest = text;
    while let Some((start, end)) = math::next_placeholder(rest) {
        split_strong(&rest[..start], &mut inlines);
        let id = &rest[start..end];
        match tokens.remove(id) {
            Some(token) => inlines.push(Inline::Math(NodeMath {
                display_math: token.display_math,
                literal: token.literal,
            })),
            // an id without a table entry degrades to the text it is
            None => push_text(&mut inlines, id),
        }
        rest = &rest[end..];
    }
    split_strong(rest, &mut inlines);
    inlines
}

/// Splits `**`-delimited bold spans off `text`.  Pairing is shortest-match
/// and non-nesting; a marker with no later partner stays literal.
fn split_strong(text: &str, inlines: &mut Vec<Inline>) {
    let marker = jetscii::Substring::new("**");
    let mut rest = text;
    loop {
        let open = match marker.find(rest) {
            Some(i) => i,
            None => break,
        };
        let close = match marker.find(&rest[open + 2..]) {
            Some(i) => open + 2 + i,
            None => break,
        };
        push_text(inlines, &rest[..open]);
        inlines.push(Inline::Strong(rest[open + 2..close].to_string()));
        rest = &rest[close + 2..];
    }
    push_text(inlines, rest);
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        inlines.push(Inline::Text(text.to_string()));
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn id(n: usize) -> String {
        format!("{}{}{}", math::SENTINEL, n, math::SENTINEL)
    }

    #[test]
    fn tokens_are_consumed() {
        let mut tokens = FxHashMap::default();
        tokens.insert(
            id(0),
            MathToken {
                id: id(0),
                display_math: false,
                literal: "x".to_string(),
            },
        );

        let inlines = parse_inlines(&id(0), &mut tokens);
        assert!(tokens.is_empty());
        assert_eq!(
            inlines,
            vec![Inline::Math(NodeMath {
                display_math: false,
                literal: "x".to_string(),
            })]
        );
    }

    #[test]
    fn unknown_placeholder_degrades_to_text() {
        let mut tokens = FxHashMap::default();
        let inlines = parse_inlines(&format!("a {} b", id(7)), &mut tokens);
        assert_eq!(
            inlines,
            vec![
                Inline::Text("a ".to_string()),
                Inline::Text(id(7)),
                Inline::Text(" b".to_string()),
            ]
        );
    }
}
