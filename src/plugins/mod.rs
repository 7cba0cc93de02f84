//! Bundled implementations of the adapter traits.

#[cfg(feature = "katex")]
#[cfg_attr(docsrs, doc(cfg(feature = "katex")))]
pub mod katex;
