//! The rendered-document IR.
//!
//! Unlike a CommonMark AST this is deliberately flat: the parser classifies
//! one source line into one [`Block`], and blocks never nest.  Adjacency
//! (for example a run of bullet items) is reconstructed by the formatters.

/// A parsed document: its blocks in source line order, one per line.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document's blocks.  Contains **inlines** via each block.
    pub blocks: Vec<Block>,
}

impl Document {
    /// The number of blocks that carry visible content, i.e. are not
    /// [`BlockValue::Blank`].
    pub fn content_blocks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| !matches!(b.value, BlockValue::Blank))
            .count()
    }
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The line's classification.
    pub value: BlockValue,

    /// The line's content with the marker stripped, split into **inlines**.
    /// Always empty for [`BlockValue::Blank`].
    pub inlines: Vec<Inline>,
}

/// The per-line block classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockValue {
    /// **Block**.  An ATX-style heading, level 1 to 3.  Deeper markers are
    /// not recognized; `#### x` is a paragraph.
    ///
    /// ``` md
    /// ## Quadratic equations
    /// ```
    Heading(NodeHeading),

    /// **Block**.  An unordered list item, marked with `- ` only.
    ///
    /// ``` md
    /// - one solution
    /// - another solution
    /// ```
    BulletItem,

    /// **Block**.  An ordered list item.  The marker's digits are preserved
    /// literally; renumbering is left to whoever displays the list.
    ///
    /// ``` md
    /// 7. substitute back
    /// ```
    OrderedItem(NodeOrderedItem),

    /// **Block**.  A line that was empty or all-whitespace.  Kept in the IR
    /// so formatters can honor the vertical rhythm of the source.
    Blank,

    /// **Block**.  Any line no other classification claimed.
    Paragraph,
}

/// The metadata of a heading.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeading {
    /// The level of the heading, from 1 to 3.
    pub level: u8,
}

/// The metadata of an ordered list item.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NodeOrderedItem {
    /// The literal digits of the source marker, without the trailing `.`.
    /// `7. Do X` keeps the label `7` even as the first item of its list.
    pub label: String,
}

/// An inline span within a block's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// **Inline**.  Textual content, rendered verbatim (HTML-escaped).
    Text(String),

    /// **Inline**.  `**`-delimited bold text.  The content is a leaf;
    /// markers do not nest inside it.
    Strong(String),

    /// **Inline**.  An extracted math span, restored from its placeholder.
    Math(NodeMath),
}

/// An inline or display math span.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NodeMath {
    /// Whether this is display math (`$$x^2$$`) rather than inline
    /// math (`$x^2$`).
    pub display_math: bool,

    /// The literal contents of the span, with the delimiters stripped.  As
    /// the contents are not interpreted as Markdown at all, they are
    /// contained within this structure rather than being split into child
    /// inlines.
    pub literal: String,
}
