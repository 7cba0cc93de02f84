mod inlines;
pub mod math;
pub mod options;

use rustc_hash::FxHashMap;

use crate::nodes::{Block, BlockValue, Document, NodeHeading, NodeOrderedItem};
use crate::parser::math::MathToken;
pub use crate::parser::options::Options;
use crate::scanners;
use crate::strings;

/// Parse a Markdown document to its line-oriented IR.
///
/// Math extraction runs over the whole input first, then each line is
/// classified on its own and its content split into inline spans.  The
/// order is what keeps `$x^2 - 1$` from ever being read as emphasis or a
/// list marker; see [`math::extract`].
///
/// See the documentation of the crate root for an example.
pub fn parse_document(md: &str, options: &Options) -> Document {
    Parser::new(options).parse(md)
}

struct Parser<'o> {
    options: &'o Options,
    tokens: FxHashMap<String, MathToken>,
}

impl<'o> Parser<'o> {
    fn new(options: &'o Options) -> Self {
        Parser {
            options,
            tokens: FxHashMap::default(),
        }
    }

    fn parse(mut self, md: &str) -> Document {
        let extraction = math::extract(md, &self.options.parse);
        self.tokens = extraction.tokens;

        let mut blocks = Vec::new();
        for line in strings::split_lines(&extraction.text) {
            blocks.push(self.classify(line));
        }
        Document { blocks }
    }

    /// First match wins: blank, heading, bullet, ordered item, paragraph.
    /// Markers are recognized after leading whitespace, and only the
    /// matched marker is stripped from the content.
    fn classify(&mut self, line: &str) -> Block {
        if strings::is_blank(line) {
            return Block {
                value: BlockValue::Blank,
                inlines: vec![],
            };
        }

        let trimmed = strings::ltrim_str(line);
        let bytes = trimmed.as_bytes();

        if let Some((level, marker)) = scanners::heading_start(bytes) {
            return self.block(BlockValue::Heading(NodeHeading { level }), &trimmed[marker..]);
        }
        if let Some(marker) = scanners::bullet_item_start(bytes) {
            return self.block(BlockValue::BulletItem, &trimmed[marker..]);
        }
        if let Some((digits, marker)) = scanners::ordered_item_start(bytes) {
            let label = trimmed[..digits].to_string();
            return self.block(
                BlockValue::OrderedItem(NodeOrderedItem { label }),
                &trimmed[marker..],
            );
        }

        // paragraphs have no marker, so the line survives whole
        self.block(BlockValue::Paragraph, line)
    }

    fn block(&mut self, value: BlockValue, content: &str) -> Block {
        Block {
            value,
            inlines: inlines::parse_inlines(content, &mut self.tokens),
        }
    }
}
