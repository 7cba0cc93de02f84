use super::*;
use pretty_assertions::assert_eq;

#[test]
fn basic() {
    html(
        concat!(
            "## Heading\n",
            "- point one\n",
            "- point $x+1$\n",
            "\n",
            "Paragraph **bold** text."
        ),
        concat!(
            "<h2>Heading</h2>\n",
            "<ul>\n",
            "<li>point one</li>\n",
            "<li>point <span data-math-style=\"inline\">x+1</span></li>\n",
            "</ul>\n",
            "<p>Paragraph <strong>bold</strong> text.</p>\n"
        ),
    );
}

#[test]
fn empty_input() {
    html("", "");
    html("\n\n", "");
}

#[test]
fn trailing_newline_changes_nothing() {
    html("a", "<p>a</p>\n");
    html("a\n", "<p>a</p>\n");
}

#[test]
fn whitespace_only_lines_are_blank() {
    html("a\n   \t\nb", "<p>a</p>\n<p>b</p>\n");
}

#[test]
fn markers_after_indentation() {
    html("   - indented", "<ul>\n<li>indented</li>\n</ul>\n");
    html("\t# deep", "<h1>deep</h1>\n");
}

#[test]
fn paragraph_indentation_survives() {
    html("  no marker here", "<p>  no marker here</p>\n");
}

#[test]
fn blocks_keep_source_order() {
    html(
        "one\n# two\nthree\n- four",
        concat!(
            "<p>one</p>\n",
            "<h1>two</h1>\n",
            "<p>three</p>\n",
            "<ul>\n<li>four</li>\n</ul>\n"
        ),
    );
}

#[test]
fn content_blocks_skip_blanks() {
    let doc = parse_document("a\n\nb\n", &Options::default());
    assert_eq!(doc.blocks.len(), 4);
    assert_eq!(doc.content_blocks(), 2);
}

#[test]
fn mixed_document_structure() {
    use crate::nodes::{BlockValue, Inline, NodeHeading, NodeMath};

    let doc = parse_document(
        concat!(
            "## Heading\n",
            "- point one\n",
            "- point $x+1$\n",
            "\n",
            "Paragraph **bold** text."
        ),
        &Options::default(),
    );

    let values: Vec<&BlockValue> = doc.blocks.iter().map(|b| &b.value).collect();
    assert_eq!(
        values,
        [
            &BlockValue::Heading(NodeHeading { level: 2 }),
            &BlockValue::BulletItem,
            &BlockValue::BulletItem,
            &BlockValue::Blank,
            &BlockValue::Paragraph,
        ]
    );

    assert_eq!(doc.blocks[0].inlines, [Inline::Text("Heading".to_string())]);
    assert_eq!(
        doc.blocks[1].inlines,
        [Inline::Text("point one".to_string())]
    );
    assert_eq!(
        doc.blocks[2].inlines,
        [
            Inline::Text("point ".to_string()),
            Inline::Math(NodeMath {
                display_math: false,
                literal: "x+1".to_string(),
            }),
        ]
    );
    assert!(doc.blocks[3].inlines.is_empty());
    assert_eq!(
        doc.blocks[4].inlines,
        [
            Inline::Text("Paragraph ".to_string()),
            Inline::Strong("bold".to_string()),
            Inline::Text(" text.".to_string()),
        ]
    );
}
