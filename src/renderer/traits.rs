use std::io::{self, Write};

use crate::renderer::stream::OutputStream;

/// Configuration for the render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces written per indentation level.
    pub indent_width: usize,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self { indent_width: 4 }
    }

    pub fn with_indent_width(&self, indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for everything that writes wiki text
pub trait Render {
    fn render<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()>;

    /// Render into a fresh stream and collect the text.
    fn render_to_string(&self, options: &RenderOptions) -> io::Result<String> {
        let mut out = OutputStream::new(Vec::new(), options.indent_unit());
        self.render(&mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }
}
