//! Adapter for the KaTeX math typesetting plugin.
//!
//! KaTeX runs inside an embedded JavaScript engine, so the costly part is
//! the engine bootstrap, not the per-span rendering.  [`KatexAdapter::new`]
//! pays that cost up front with a warm-up render; the adapter it returns is
//! permanently ready and needs no polling handshake.

use crate::adapters::{MathTypesetter, TypesetError};

#[derive(Debug, Clone)]
/// KaTeX math typesetter plugin.
///
/// ```no_run
/// # use mathdown::{markdown_to_html_with_plugins, Options, options::{MathPlugin, Plugins}};
/// # use mathdown::plugins::katex::KatexAdapter;
/// let adapter = KatexAdapter::new().unwrap();
/// let mut plugins = Plugins::default();
/// plugins.render.math = Some(MathPlugin::ready(&adapter));
///
/// let html = markdown_to_html_with_plugins("$x^2$", &Options::default(), &plugins);
/// assert!(html.contains("katex"));
/// ```
pub struct KatexAdapter {
    inline_opts: katex::Opts,
    display_opts: katex::Opts,
}

impl KatexAdapter {
    /// Boots the embedded engine and returns a ready adapter.
    ///
    /// Invalid math in a span does not error later: KaTeX is configured
    /// with `throw_on_error: false` and renders its own inline error
    /// markup for bad source.  [`TypesetError`]s are reserved for engine
    /// faults.
    pub fn new() -> Result<Self, TypesetError> {
        let adapter = KatexAdapter {
            inline_opts: Self::opts(false)?,
            display_opts: Self::opts(true)?,
        };
        // a warm-up render bootstraps this thread's engine here, rather
        // than inside the first document render
        katex::render_with_opts("", &adapter.inline_opts).map_err(map_err)?;
        tracing::info!("katex engine bootstrapped");
        Ok(adapter)
    }

    fn opts(display_mode: bool) -> Result<katex::Opts, TypesetError> {
        katex::Opts::builder()
            .display_mode(display_mode)
            .throw_on_error(false)
            .build()
            .map_err(|e| TypesetError::EngineUnavailable(e.to_string()))
    }
}

impl MathTypesetter for KatexAdapter {
    fn typeset(&self, source: &str, display_mode: bool) -> Result<String, TypesetError> {
        let opts = if display_mode {
            &self.display_opts
        } else {
            &self.inline_opts
        };
        katex::render_with_opts(source, opts).map_err(map_err)
    }
}

fn map_err(err: katex::Error) -> TypesetError {
    match err {
        katex::Error::JsInitError(msg) => TypesetError::EngineUnavailable(msg),
        other => TypesetError::Render(other.to_string()),
    }
}
