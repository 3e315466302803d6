use std::io::{self, Write};

/// Write sink that tracks trailing newlines and re-indents continuation
/// lines.
///
/// After a newline the current indentation prefix is owed to the next
/// line, and written just before its first non-newline character. Lines
/// that stay empty get no prefix, and the prefix never counts toward
/// [`OutputStream::trailing_newlines`].
pub struct OutputStream<W> {
    sink: W,
    unit: String,
    prefix: String,
    depth: usize,
    indent_pending: bool,
    trailing_newlines: usize,
}

impl<W: Write> OutputStream<W> {
    pub fn new(sink: W, unit: impl Into<String>) -> Self {
        Self {
            sink,
            unit: unit.into(),
            prefix: String::new(),
            depth: 0,
            indent_pending: false,
            trailing_newlines: 0,
        }
    }

    /// Number of consecutive newlines at the end of everything written so far.
    pub fn trailing_newlines(&self) -> usize {
        self.trailing_newlines
    }

    pub fn indent_depth(&self) -> usize {
        self.depth
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        for segment in text.split_inclusive('\n') {
            let (body, newline) = match segment.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (segment, false),
            };

            if !body.is_empty() {
                if self.indent_pending {
                    self.indent_pending = false;
                    self.sink.write_all(self.prefix.as_bytes())?;
                }
                self.sink.write_all(body.as_bytes())?;
                self.trailing_newlines = 0;
            }

            if newline {
                self.sink.write_all(b"\n")?;
                self.trailing_newlines += 1;
                self.indent_pending = true;
            }
        }
        Ok(())
    }

    /// Top up the trailing newlines to at least `count`.
    pub fn ensure_newlines(&mut self, count: usize) -> io::Result<()> {
        if count > self.trailing_newlines {
            let missing = count - self.trailing_newlines;
            self.write_str(&"\n".repeat(missing))?;
        }
        Ok(())
    }

    pub fn increase_indent(&mut self) {
        self.depth += 1;
        self.prefix = self.unit.repeat(self.depth);
    }

    pub fn decrease_indent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.prefix = self.unit.repeat(self.depth);
    }

    /// Run `f` one indentation level deeper, restoring the level afterwards
    /// even when `f` fails.
    pub fn indented<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> io::Result<T>,
    ) -> io::Result<T> {
        self.increase_indent();
        let result = f(self);
        self.decrease_indent();
        result
    }

    /// An unindented stream over a fresh buffer that starts from this
    /// stream's trailing-newline count.
    pub fn offscreen(&self) -> OutputStream<Vec<u8>> {
        let mut buffer = OutputStream::new(Vec::new(), self.unit.clone());
        buffer.trailing_newlines = self.trailing_newlines;
        buffer
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
