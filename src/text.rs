//! Plain-text rendering of the document IR.
//!
//! Strips the markup that is presentation only (heading and bullet
//! markers, bold delimiters) and resolves each math span to its literal
//! source.  Ordered item labels stay, since "7." is content, not
//! decoration.  Suits consumers like a speech synthesis pipeline.

use std::fmt::{self, Write};

use crate::nodes::{BlockValue, Document, Inline};
use crate::parser::options::Options;

/// Formats a document as plain text, one output line per block.
pub fn format_document(doc: &Document, _options: &Options, output: &mut dyn Write) -> fmt::Result {
    for block in &doc.blocks {
        if let BlockValue::OrderedItem(ref noi) = block.value {
            write!(output, "{}. ", noi.label)?;
        }
        for inline in &block.inlines {
            match inline {
                Inline::Text(literal) | Inline::Strong(literal) => output.write_str(literal)?,
                Inline::Math(math) => output.write_str(&math.literal)?,
            }
        }
        output.write_str("\n")?;
    }
    Ok(())
}
