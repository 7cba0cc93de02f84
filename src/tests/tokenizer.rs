use super::*;
use ntest::test_case;
use pretty_assertions::assert_eq;

#[test_case("$", "<p>$</p>\n")]
#[test_case("$$", "<p>$$</p>\n")]
#[test_case("$$$", "<p>$$$</p>\n")]
#[test_case("$$$$", "<p>$$$$</p>\n")]
#[test_case("$$$x$$$", "<p>$$$x$$$</p>\n")]
fn unpaired_dollar_runs_stay_prose(markdown: &str, expected: &str) {
    html(markdown, expected);
}

#[test_case("$$a$$b$$", "<p><math>a</math>b$$</p>\n")]
#[test_case("$$a$$ $$", "<p><math>a</math> $$</p>\n")]
fn display_closer_is_the_nearest_pair(markdown: &str, expected: &str) {
    let expected = expected
        .replace("<math>", "<span data-math-style=\"display\">")
        .replace("</math>", "</span>");

    html(markdown, &expected);
}

#[test]
fn adjacent_inline_spans_stay_separate() {
    html(
        "$a$$b$",
        concat!(
            "<p><span data-math-style=\"inline\">a</span>",
            "<span data-math-style=\"inline\">b</span></p>\n"
        ),
    );
}

#[test]
fn escaped_dollars_never_open_spans() {
    html("\\$5 + \\$6", "<p>\\$5 + \\$6</p>\n");
}

#[test]
fn object_replacement_chars_cannot_forge_placeholders() {
    html(
        "\u{fffc}0\u{fffc} and $x$",
        "<p>\u{fffd}0\u{fffd} and <span data-math-style=\"inline\">x</span></p>\n",
    );
}

#[test]
fn extraction_text_round_trips() {
    use crate::options::Parse;
    use crate::parser::math;

    let extraction = math::extract("pay $5 now, $x+1$ later", &Parse::default());
    assert_eq!(extraction.tokens.len(), 1);

    let token = extraction.tokens.values().next().unwrap();
    assert_eq!(token.literal, "x+1");
    assert!(!token.display_math);
    assert_eq!(
        extraction.text.replace(&token.id, "$x+1$"),
        "pay $5 now, $x+1$ later"
    );
}

#[test]
fn both_sweeps_share_one_token_table() {
    use crate::options::Parse;
    use crate::parser::math;

    let extraction = math::extract("$$a$$ $b$", &Parse::default());
    assert!(!extraction.text.contains('$'));

    let mut tokens: Vec<(bool, String)> = extraction
        .tokens
        .values()
        .map(|t| (t.display_math, t.literal.clone()))
        .collect();
    tokens.sort();
    assert_eq!(tokens, [(false, "b".to_string()), (true, "a".to_string())]);
}

#[test]
fn re_extraction_is_structurally_stable() {
    use crate::options::Parse;
    use crate::parser::math;

    // The spans in text order, ignoring the minted ids.
    fn shape(extraction: &math::Extraction) -> Vec<(bool, String)> {
        let mut shape = Vec::new();
        let mut rest = extraction.text.as_str();
        while let Some((start, end)) = math::next_placeholder(rest) {
            let token = &extraction.tokens[&rest[start..end]];
            shape.push((token.display_math, token.literal.clone()));
            rest = &rest[end..];
        }
        shape
    }

    fn splice_back(extraction: &math::Extraction) -> String {
        let mut out = String::new();
        let mut rest = extraction.text.as_str();
        while let Some((start, end)) = math::next_placeholder(rest) {
            out.push_str(&rest[..start]);
            let token = &extraction.tokens[&rest[start..end]];
            let fence = if token.display_math { "$$" } else { "$" };
            out.push_str(fence);
            out.push_str(&token.literal);
            out.push_str(fence);
            rest = &rest[end..];
        }
        out.push_str(rest);
        out
    }

    for source in [
        "solve $$a+b$$ then $c$ and $d$ today",
        "$a$ first, $$b$$ second, \\$5 still cash",
        "$$\nx = 1\n$$\nand $y$ after",
    ] {
        let first = math::extract(source, &Parse::default());
        assert_eq!(splice_back(&first), source);

        let second = math::extract(&splice_back(&first), &Parse::default());
        assert_eq!(shape(&second), shape(&first));
        assert!(!shape(&first).is_empty());
    }
}
