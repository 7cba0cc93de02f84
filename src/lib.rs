//! Math-aware Markdown rendering for line-oriented lesson content.
//!
//! The dialect is deliberately small.  Each source line is one block:
//! `#`, `##` and `###` headings, `- ` bullets, `1. ` ordered items,
//! blank spacers, and paragraphs.  Inline content is plain text,
//! `**bold**`, and TeX math delimited by `$...$` or `$$...$$`.  Math
//! spans are lifted out of the text before any other scanning, so
//! `$f(x, **y**)$` reaches the typesetter intact instead of growing a
//! `<strong>` in its middle.
//!
//! You can use `mathdown::markdown_to_html` directly:
//!
//! ```
//! use mathdown::{markdown_to_html, Options};
//!
//! assert_eq!(
//!     markdown_to_html("Hello, **world**!", &Options::default()),
//!     "<p>Hello, <strong>world</strong>!</p>\n"
//! );
//! ```
//!
//! Math renders as an escaped literal-source fallback until a typesetter
//! is installed (see [`options::MathPlugin`] and [`adapters`]):
//!
//! ```
//! use mathdown::{markdown_to_html, Options};
//!
//! assert_eq!(
//!     markdown_to_html("Solve $x^2 = 4$.", &Options::default()),
//!     "<p>Solve <span data-math-style=\"inline\">x^2 = 4</span>.</p>\n"
//! );
//! ```
//!
//! Or you can parse into the block structure yourself, inspect it, and
//! drive a formatter when you are done:
//!
//! ```
//! use mathdown::nodes::{BlockValue, Inline};
//! use mathdown::{format_html, parse_document, Options};
//!
//! let options = Options::default();
//! let doc = parse_document("- Try $3 \\cdot 4$\n- Try $5 \\cdot 6$", &options);
//!
//! let mut literals = vec![];
//! for block in &doc.blocks {
//!     assert_eq!(block.value, BlockValue::BulletItem);
//!     for inline in &block.inlines {
//!         if let Inline::Math(math) = inline {
//!             literals.push(math.literal.clone());
//!         }
//!     }
//! }
//! assert_eq!(literals, ["3 \\cdot 4", "5 \\cdot 6"]);
//!
//! let mut html = String::new();
//! format_html(&doc, &options, &mut html).unwrap();
//! assert_eq!(
//!     html,
//!     "<ul>\n\
//!      <li>Try <span data-math-style=\"inline\">3 \\cdot 4</span></li>\n\
//!      <li>Try <span data-math-style=\"inline\">5 \\cdot 6</span></li>\n\
//!      </ul>\n"
//! );
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapters;
mod character_set;
mod ctype;
pub mod html;
pub mod nodes;
mod parser;
pub mod plugins;
mod scanners;
mod strings;
pub mod text;

pub use html::format_document as format_html;
pub use html::format_document_with_plugins as format_html_with_plugins;
#[doc(inline)]
pub use parser::options;
pub use parser::{parse_document, Options};
pub use text::format_document as format_text;

/// Renders Markdown to HTML.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    markdown_to_html_with_plugins(md, options, &options::Plugins::default())
}

/// Renders Markdown to HTML using the given [`options::Plugins`].
///
/// See the documentation of [`options::RenderPlugins`] for an example.
pub fn markdown_to_html_with_plugins(
    md: &str,
    options: &Options,
    plugins: &options::Plugins,
) -> String {
    let doc = parse_document(md, options);
    let mut s = String::new();
    html::format_document_with_plugins(&doc, options, &mut s, plugins).unwrap();
    s
}

/// Renders Markdown to plain text: markers stripped, math spans resolved
/// to their literal source.  Suits speech synthesis input.
pub fn markdown_to_text(md: &str, options: &Options) -> String {
    let doc = parse_document(md, options);
    let mut s = String::new();
    text::format_document(&doc, options, &mut s).unwrap();
    s
}

/// Version of the crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
