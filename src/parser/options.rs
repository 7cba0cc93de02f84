//! Configuration for the parser and the formatters.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{Debug, Formatter};

use crate::adapters::{MathTypesetter, Readiness};

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Configure parse-time options.
    pub parse: Parse,

    /// Configure render-time options.
    pub render: Render,
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for parser functions.
pub struct Parse {
    /// Pairs inline `$` delimiters naively instead of applying the
    /// currency-safe heuristics (no space just inside either delimiter, no
    /// digit after the closing one, `\$` stays literal).
    ///
    /// ```rust
    /// # use mathdown::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("$20,000 and $30,000", &options),
    ///            "<p>$20,000 and $30,000</p>\n");
    ///
    /// options.parse.relaxed_dollar_matching = true;
    /// assert_eq!(markdown_to_html("$20,000 and $30,000", &options),
    ///            "<p><span data-math-style=\"inline\">20,000 and </span>30,000</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub relaxed_dollar_matching: bool,
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for formatter functions.
pub struct Render {
    /// Emits a stylable `<div class="spacer"></div>` for each blank source
    /// line instead of dropping it from the HTML output.  Blank lines
    /// terminate list runs either way.
    ///
    /// ```rust
    /// # use mathdown::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("a\n\nb", &options),
    ///            "<p>a</p>\n<p>b</p>\n");
    ///
    /// options.render.spacer_divs = true;
    /// assert_eq!(markdown_to_html("a\n\nb", &options),
    ///            "<p>a</p>\n<div class=\"spacer\"></div>\n<p>b</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub spacer_divs: bool,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Provide a math typesetter implementation, plus the readiness its
    /// gate last reported, for rendering math spans.  Without one, spans
    /// render as their literal source in a `data-math-style` span.
    ///
    /// ```rust
    /// # use mathdown::{markdown_to_html_with_plugins, Options, options::{MathPlugin, Plugins}};
    /// # use mathdown::adapters::{MathTypesetter, TypesetError};
    /// let options = Options::default();
    /// let mut plugins = Plugins::default();
    /// let input = "So $x > 1$ here.";
    ///
    /// assert_eq!(markdown_to_html_with_plugins(input, &options, &plugins),
    ///            "<p>So <span data-math-style=\"inline\">x &gt; 1</span> here.</p>\n");
    ///
    /// pub struct MockAdapter;
    /// impl MathTypesetter for MockAdapter {
    ///     fn typeset(&self, source: &str, display_mode: bool) -> Result<String, TypesetError> {
    ///         Ok(format!("<b data-display=\"{}\">{}</b>", display_mode, source))
    ///     }
    /// }
    ///
    /// let adapter = MockAdapter;
    /// plugins.render.math = Some(MathPlugin::ready(&adapter));
    ///
    /// assert_eq!(markdown_to_html_with_plugins(input, &options, &plugins),
    ///            "<p>So <span class=\"math math-inline\"><b data-display=\"false\">x > 1</b></span> here.</p>\n");
    /// ```
    pub math: Option<MathPlugin<'p>>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPlugins")
            .field("math", &self.math.as_ref().map(|_| "impl MathTypesetter"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
/// A math typesetter paired with the readiness its gate observed.
///
/// The readiness travels with the plugin value instead of living in some
/// global, so one render sees one consistent state from start to finish.
pub struct MathPlugin<'p> {
    /// The typesetter rendering each span's source to markup.
    pub typesetter: &'p dyn MathTypesetter,

    /// The state the caller's [`ReadinessGate`](crate::adapters::ReadinessGate)
    /// last reported.  Anything but [`Readiness::Ready`] renders spans in
    /// their pending fallback form.
    pub readiness: Readiness,
}

impl<'p> MathPlugin<'p> {
    /// Wraps a typesetter that is usable for the whole render, skipping the
    /// polling handshake.  Right for engines that are ready the moment
    /// construction returns.
    pub fn ready(typesetter: &'p dyn MathTypesetter) -> Self {
        MathPlugin {
            typesetter,
            readiness: Readiness::Ready,
        }
    }

    /// Pairs a typesetter with the state its gate reported.
    pub fn with_readiness(typesetter: &'p dyn MathTypesetter, readiness: Readiness) -> Self {
        MathPlugin {
            typesetter,
            readiness,
        }
    }
}
