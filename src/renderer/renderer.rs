use std::io::{self, Write};

use crate::document::Document;
use crate::renderer::stream::OutputStream;
use crate::renderer::traits::*;

impl Render for Document {
    fn render<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()> {
        // Summary pragma goes before everything else
        if let Some(summary) = self.summary() {
            summary.render(out)?;
            out.write_str("\n")?;
        }

        self.root().render(out)?;
        out.write_str("\n")
    }
}

pub struct WikiRenderer {
    options: RenderOptions,
}

impl WikiRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the whole document into `sink` in a single pass.
    pub fn render<W: Write>(&self, document: &Document, sink: W) -> io::Result<W> {
        let mut out = OutputStream::new(sink, self.options.indent_unit());
        document.render(&mut out)?;
        out.flush()?;
        Ok(out.into_inner())
    }

    pub fn render_to_string(&self, document: &Document) -> io::Result<String> {
        document.render_to_string(&self.options)
    }
}

impl Default for WikiRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
