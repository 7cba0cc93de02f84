#![no_main]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;
use mathdown::{markdown_to_html, parse_document, Options};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    options: Options,
    markdown: &'a str,
}

fuzz_target!(|input: Input| {
    let doc = parse_document(input.markdown, &input.options);
    let _ = doc.content_blocks();
    markdown_to_html(input.markdown, &input.options);
});
