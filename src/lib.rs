//! # xml2wiki
//!
//! Converts the Texinfo XML produced by `makeinfo --xml` into Google Code
//! wiki markup.
//!
//! Conversion runs in two passes. The [`parser`] streams XML events into a
//! [`DocumentBuilder`], which turns each element into a [`RenderNode`]
//! whose delimiters and blank-line policy depend on where the element sits.
//! The finished [`Document`] is then written once through an
//! [`OutputStream`] that coalesces blank lines and indents nested blocks.

pub mod document;
pub mod error;
pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

pub use document::{BuildOptions, Document, DocumentBuilder, Tag};
pub use error::{Error, Result};
pub use parser::{EventReader, EventSink, MarkupEvent};
pub use renderer::{OutputStream, Render, RenderNode, RenderOptions, WikiRenderer};

/// Options for a full conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub build: BuildOptions,
    pub render: RenderOptions,
}

/// Parse Texinfo XML from `source` into a node tree.
pub fn build_document<R: BufRead>(source: R, options: &BuildOptions) -> Result<Document> {
    let mut builder = DocumentBuilder::new(*options);
    EventReader::new(source).run(&mut builder)?;
    Ok(builder.finish())
}

/// Convert Texinfo XML read from `source` into wiki text written to `sink`.
pub fn convert<R: BufRead, W: Write>(source: R, sink: W, options: &ConvertOptions) -> Result<W> {
    let document = build_document(source, &options.build)?;
    let sink = WikiRenderer::new(options.render).render(&document, sink)?;
    Ok(sink)
}

/// Convert a Texinfo XML string with default options.
pub fn convert_str(source: &str) -> Result<String> {
    let document = build_document(source.as_bytes(), &BuildOptions::default())?;
    Ok(WikiRenderer::default().render_to_string(&document)?)
}
