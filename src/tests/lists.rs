use super::*;

#[test]
fn bullet_runs_share_a_list() {
    html(
        "- one\n- two\n- three",
        concat!(
            "<ul>\n",
            "<li>one</li>\n",
            "<li>two</li>\n",
            "<li>three</li>\n",
            "</ul>\n"
        ),
    );
}

#[test]
fn ordered_labels_are_literal() {
    html(
        "1. first\n2. second\n9. ninth",
        concat!(
            "<ol>\n",
            "<li value=\"1\">first</li>\n",
            "<li value=\"2\">second</li>\n",
            "<li value=\"9\">ninth</li>\n",
            "</ol>\n"
        ),
    );
}

#[test]
fn ordered_list_starting_past_one() {
    html("7. Do X", "<ol>\n<li value=\"7\">Do X</li>\n</ol>\n");
}

#[test]
fn leading_zeros_kept() {
    html("07. padded", "<ol>\n<li value=\"07\">padded</li>\n</ol>\n");
}

#[test]
fn kind_change_closes_the_list() {
    html(
        "- a\n1. b\n- c",
        concat!(
            "<ul>\n<li>a</li>\n</ul>\n",
            "<ol>\n<li value=\"1\">b</li>\n</ol>\n",
            "<ul>\n<li>c</li>\n</ul>\n"
        ),
    );
}

#[test]
fn blank_line_ends_a_run() {
    html(
        "- a\n\n- b",
        concat!("<ul>\n<li>a</li>\n</ul>\n", "<ul>\n<li>b</li>\n</ul>\n"),
    );
}

#[test]
fn paragraph_interrupts_a_run() {
    html(
        "1. a\nwords\n2. b",
        concat!(
            "<ol>\n<li value=\"1\">a</li>\n</ol>\n",
            "<p>words</p>\n",
            "<ol>\n<li value=\"2\">b</li>\n</ol>\n"
        ),
    );
}

#[test]
fn heading_interrupts_a_run() {
    html(
        "- a\n# H\n- b",
        concat!(
            "<ul>\n<li>a</li>\n</ul>\n",
            "<h1>H</h1>\n",
            "<ul>\n<li>b</li>\n</ul>\n"
        ),
    );
}

#[test]
fn nine_digit_markers_fit_ten_do_not() {
    html(
        "123456789. fits",
        "<ol>\n<li value=\"123456789\">fits</li>\n</ol>\n",
    );
    html("1234567890. too long", "<p>1234567890. too long</p>\n");
}

#[test]
fn marker_requires_space() {
    html("-tight", "<p>-tight</p>\n");
    html("1.tight", "<p>1.tight</p>\n");
    html("* star", "<p>* star</p>\n");
}

#[test]
fn trailing_list_is_closed() {
    html(
        "text\n- a\n- b",
        "<p>text</p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n",
    );
}

#[test]
fn item_content_is_inline_parsed() {
    html(
        "- has $x \\ne 1$ and **bold**",
        "<ul>\n<li>has <span data-math-style=\"inline\">x \\ne 1</span> and <strong>bold</strong></li>\n</ul>\n",
    );
}

#[test]
fn empty_item() {
    html("- ", "<ul>\n<li></li>\n</ul>\n");
}
