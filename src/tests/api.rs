use super::*;
use crate::nodes::{self, Document};
use crate::{format_html, format_html_with_plugins, format_text};

#[test]
fn exercise_full_api() {
    let default_options = Options::default();
    let default_plugins = Plugins::default();
    let doc: Document = parse_document(
        "# My document\n\n- a point\n7. see $x^2$ **and** more\n",
        &default_options,
    );
    let mut buffer = String::new();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: std::fmt::Result = format_html(&doc, &default_options, &mut buffer);

    let _: std::fmt::Result =
        format_html_with_plugins(&doc, &default_options, &mut buffer, &default_plugins);

    let _: std::fmt::Result = format_text(&doc, &default_options, &mut buffer);

    let _: std::fmt::Result = crate::html::escape(&mut buffer, "a < \"b\"");

    let _: String = markdown_to_html("# Yes", &default_options);

    let _: String = markdown_to_text("# Yes", &default_options);

    let _: &'static str = crate::version();

    let mut options = Options::default();
    options.parse.relaxed_dollar_matching = true;
    options.render.spacer_divs = true;

    pub struct MockAdapter {}

    impl MathTypesetter for MockAdapter {
        fn is_ready(&self) -> bool {
            false
        }

        fn typeset(&self, _source: &str, _display_mode: bool) -> Result<String, TypesetError> {
            unreachable!()
        }
    }

    let mock_adapter = MockAdapter {};

    let mut plugins = Plugins::default();
    plugins.render.math = Some(MathPlugin::ready(&mock_adapter));
    plugins.render.math = Some(MathPlugin::with_readiness(&mock_adapter, Readiness::Polling));

    let _: String = markdown_to_html_with_plugins("pending $x$", &options, &plugins);

    #[cfg(feature = "bon")]
    {
        use crate::options::{Parse, Render, RenderPlugins};

        let parse: Parse = Parse::builder().relaxed_dollar_matching(false).build();
        let render: Render = Render::builder().spacer_divs(false).build();
        let _: Options = Options { parse, render };

        let render_plugins: RenderPlugins = RenderPlugins::builder()
            .math(MathPlugin::with_readiness(&mock_adapter, Readiness::Polling))
            .build();
        let _: Plugins = Plugins::builder().render(render_plugins).build();
    }

    let _: usize = doc.content_blocks();

    for block in &doc.blocks {
        match &block.value {
            nodes::BlockValue::Heading(nh) => {
                let _: u8 = nh.level;
            }
            nodes::BlockValue::BulletItem => {}
            nodes::BlockValue::OrderedItem(noi) => {
                let _: &String = &noi.label;
            }
            nodes::BlockValue::Blank => {}
            nodes::BlockValue::Paragraph => {}
        }
        for inline in &block.inlines {
            match inline {
                nodes::Inline::Text(literal) => {
                    let _: &String = literal;
                }
                nodes::Inline::Strong(literal) => {
                    let _: &String = literal;
                }
                nodes::Inline::Math(math) => {
                    let _: bool = math.display_math;
                    let _: &String = &math.literal;
                }
            }
        }
    }
}
