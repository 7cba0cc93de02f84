//! HTML rendering of the document IR, as well as helper functions.

use std::fmt::{self, Write};

use crate::adapters::TypesetError;
use crate::character_set::character_set;
use crate::nodes::{Block, BlockValue, Document, Inline, NodeMath};
use crate::parser::options::{Options, Plugins};

/// Formats a document as HTML, modified by the given options.
pub fn format_document(doc: &Document, options: &Options, output: &mut dyn Write) -> fmt::Result {
    format_document_with_plugins(doc, options, output, &Plugins::default())
}

/// Formats a document as HTML, modified by the given options. Accepts custom plugins.
pub fn format_document_with_plugins(
    doc: &Document,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
) -> fmt::Result {
    let mut formatter = HtmlFormatter::new(options, output, plugins);
    formatter.format(doc)?;
    formatter.finish()
}

/// Writes `buffer` to `output`, escaping the characters that could change
/// HTML structure.  NUL bytes become U+FFFD.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    const HTML_UNSAFE: [bool; 256] = character_set!(b"\"&<>\0");

    let bytes = buffer.as_bytes();
    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'\0' => "\u{fffd}",
                _ => unreachable!(),
            };
            output.write_str(&buffer[offset..i])?;
            output.write_str(esc)?;
            offset = i + 1;
        }
    }
    output.write_str(&buffer[offset..])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

/// How one math span should appear in the output, decided before any tag
/// is written so a failed typeset never leaves a half-open element.
enum MathRendering {
    /// No plugin is installed; render the literal in a bare
    /// `data-math-style` span.
    NoTypesetter,
    /// A plugin is installed but its engine hasn't reported ready.
    Pending,
    /// The typeset markup, embedded verbatim.
    Markup(String),
    /// The typesetter rejected the span; the literal is kept visible and
    /// the message travels in the `title` attribute.
    Failed(TypesetError),
}

struct HtmlFormatter<'o> {
    output: &'o mut dyn Write,
    options: &'o Options,
    plugins: &'o Plugins<'o>,
    open_list: Option<ListKind>,
}

impl<'o> HtmlFormatter<'o> {
    fn new(options: &'o Options, output: &'o mut dyn Write, plugins: &'o Plugins<'o>) -> Self {
        HtmlFormatter {
            output,
            options,
            plugins,
            open_list: None,
        }
    }

    fn format(&mut self, doc: &Document) -> fmt::Result {
        for block in &doc.blocks {
            self.format_block(block)?;
        }
        Ok(())
    }

    /// Closes a list run left open by a trailing item.
    fn finish(&mut self) -> fmt::Result {
        self.close_list()
    }

    fn format_block(&mut self, block: &Block) -> fmt::Result {
        // Adjacent items of one kind share a list element; any other block
        // ends the run.  This is the only cross-line state the formatter
        // keeps.
        let kind = match block.value {
            BlockValue::BulletItem => Some(ListKind::Bullet),
            BlockValue::OrderedItem(_) => Some(ListKind::Ordered),
            _ => None,
        };
        if self.open_list != kind {
            self.close_list()?;
            match kind {
                Some(ListKind::Bullet) => self.output.write_str("<ul>\n")?,
                Some(ListKind::Ordered) => self.output.write_str("<ol>\n")?,
                None => {}
            }
            self.open_list = kind;
        }

        match block.value {
            BlockValue::Heading(ref nh) => {
                write!(self.output, "<h{}>", nh.level)?;
                self.format_inlines(&block.inlines)?;
                writeln!(self.output, "</h{}>", nh.level)
            }
            BlockValue::BulletItem => {
                self.output.write_str("<li>")?;
                self.format_inlines(&block.inlines)?;
                self.output.write_str("</li>\n")
            }
            BlockValue::OrderedItem(ref noi) => {
                // the value attribute carries the source numbering; labels
                // are digits only, so no escaping
                write!(self.output, "<li value=\"{}\">", noi.label)?;
                self.format_inlines(&block.inlines)?;
                self.output.write_str("</li>\n")
            }
            BlockValue::Blank => {
                if self.options.render.spacer_divs {
                    self.output.write_str("<div class=\"spacer\"></div>\n")?;
                }
                Ok(())
            }
            BlockValue::Paragraph => self.format_paragraph(block),
        }
    }

    fn format_paragraph(&mut self, block: &Block) -> fmt::Result {
        // A paragraph that is exactly one display span becomes a block of
        // its own when typesetting succeeds.  Every fallback form stays in
        // the paragraph, matching what the literal source looked like.
        if let [Inline::Math(ref math)] = block.inlines[..] {
            if math.display_math {
                let rendering = self.resolve_math(math);
                if let MathRendering::Markup(ref markup) = rendering {
                    self.output.write_str("<div class=\"math math-display\">")?;
                    self.output.write_str(markup)?;
                    return self.output.write_str("</div>\n");
                }
                self.output.write_str("<p>")?;
                self.write_math(math, rendering)?;
                return self.output.write_str("</p>\n");
            }
        }

        self.output.write_str("<p>")?;
        self.format_inlines(&block.inlines)?;
        self.output.write_str("</p>\n")
    }

    fn format_inlines(&mut self, inlines: &[Inline]) -> fmt::Result {
        for inline in inlines {
            match inline {
                Inline::Text(literal) => escape(self.output, literal)?,
                Inline::Strong(literal) => {
                    self.output.write_str("<strong>")?;
                    escape(self.output, literal)?;
                    self.output.write_str("</strong>")?;
                }
                Inline::Math(math) => {
                    let rendering = self.resolve_math(math);
                    self.write_math(math, rendering)?;
                }
            }
        }
        Ok(())
    }

    fn resolve_math(&self, math: &NodeMath) -> MathRendering {
        let plugin = match self.plugins.render.math {
            Some(ref plugin) => plugin,
            None => return MathRendering::NoTypesetter,
        };
        if !plugin.readiness.is_ready() {
            return MathRendering::Pending;
        }
        match plugin.typesetter.typeset(&math.literal, math.display_math) {
            Ok(markup) => MathRendering::Markup(markup),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    display = math.display_math,
                    "math typesetting failed"
                );
                MathRendering::Failed(err)
            }
        }
    }

    fn write_math(&mut self, math: &NodeMath, rendering: MathRendering) -> fmt::Result {
        let style = if math.display_math { "display" } else { "inline" };
        match rendering {
            MathRendering::NoTypesetter => {
                write!(self.output, "<span data-math-style=\"{}\">", style)?;
                escape(self.output, &math.literal)?;
                self.output.write_str("</span>")
            }
            MathRendering::Pending => {
                write!(
                    self.output,
                    "<span class=\"math-pending\" data-math-style=\"{}\">",
                    style
                )?;
                escape(self.output, &math.literal)?;
                self.output.write_str("</span>")
            }
            MathRendering::Markup(markup) => {
                let class = if math.display_math {
                    "math math-display"
                } else {
                    "math math-inline"
                };
                write!(self.output, "<span class=\"{}\">", class)?;
                self.output.write_str(&markup)?;
                self.output.write_str("</span>")
            }
            MathRendering::Failed(err) => {
                self.output.write_str("<span class=\"math-error\" title=\"")?;
                escape(self.output, &err.to_string())?;
                write!(self.output, "\" data-math-style=\"{}\">", style)?;
                escape(self.output, &math.literal)?;
                self.output.write_str("</span>")
            }
        }
    }

    fn close_list(&mut self) -> fmt::Result {
        match self.open_list.take() {
            Some(ListKind::Bullet) => self.output.write_str("</ul>\n"),
            Some(ListKind::Ordered) => self.output.write_str("</ol>\n"),
            None => Ok(()),
        }
    }
}
