#![no_main]

use libfuzzer_sys::fuzz_target;

use mathdown::options::{Parse, Render};
use mathdown::{markdown_to_html, markdown_to_text, Options};

fuzz_target!(|s: &str| {
    let options = Options {
        parse: Parse {
            relaxed_dollar_matching: true,
        },
        render: Render { spacer_divs: true },
    };

    markdown_to_html(s, &options);
    markdown_to_text(s, &options);
});
