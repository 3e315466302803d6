use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::parser::types::*;

// Streaming reader turning Texinfo XML into begin/end/text events
pub struct EventReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
}

impl<'a> EventReader<&'a [u8]> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead> EventReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            depth: 0,
        }
    }

    /// Read the whole input, forwarding every event to `sink`.
    ///
    /// Empty elements arrive as a begin/end pair, CDATA and resolved
    /// entity references arrive as text. Comments, processing
    /// instructions and the doctype are skipped.
    pub fn run<S: EventSink + ?Sized>(mut self, sink: &mut S) -> Result<()> {
        loop {
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => {
                    let (tag, attributes) = decode_start(&e)?;
                    self.depth += 1;
                    sink.begin(&tag, &attributes);
                }
                Event::Empty(e) => {
                    let (tag, attributes) = decode_start(&e)?;
                    sink.begin(&tag, &attributes);
                    sink.end(&tag);
                }
                Event::End(e) => {
                    let name = e.name();
                    let tag = std::str::from_utf8(name.as_ref())?;
                    self.depth = self.depth.saturating_sub(1);
                    sink.end(tag);
                }
                // Whitespace around the root element is not content
                Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) if self.depth == 0 => {}
                // CRLF and lone CR become LF, as XML 1.0 requires
                Event::Text(e) => {
                    let text = e.xml10_content().map_err(quick_xml::Error::from)?;
                    sink.text(&text);
                }
                Event::CData(e) => {
                    let text = e.xml10_content().map_err(quick_xml::Error::from)?;
                    sink.text(&text);
                }
                Event::GeneralRef(e) => {
                    let entity = std::str::from_utf8(e.as_ref())?;
                    match resolve_entity(entity) {
                        Some(resolved) => sink.text(&resolved),
                        None => tracing::warn!("Dropping unknown entity &{};", entity),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            self.buf.clear();
        }

        if self.depth > 0 {
            return Err(Error::UnclosedElements(self.depth));
        }
        Ok(())
    }
}

/// Read `source` to the end and collect its events.
pub fn read_events(source: &str) -> Result<Vec<MarkupEvent>> {
    let mut events = Vec::new();
    EventReader::from_str(source).run(&mut events)?;
    Ok(events)
}

fn decode_start(e: &BytesStart<'_>) -> Result<(String, Vec<Attribute>)> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())?.to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        attributes.push(Attribute::new(
            std::str::from_utf8(attr.key.as_ref())?,
            std::str::from_utf8(&attr.value)?,
        ));
    }

    Ok((tag, attributes))
}

// XML built-ins, character references and the entities declared by the
// Texinfo XML DTD
fn resolve_entity(entity: &str) -> Option<std::borrow::Cow<'static, str>> {
    use std::borrow::Cow;

    let fixed = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "tex" => "TeX",
        "latex" => "LaTeX",
        "dots" | "enddots" => "...",
        "lsquo" | "rsquo" => "'",
        "ldquo" | "rdquo" => "\"",
        "mdash" => "--",
        "ndash" | "minus" => "-",
        "bullet" => "*",
        "lbrace" => "{",
        "rbrace" => "}",
        "arobase" => "@",
        "nbsp" => " ",
        "copyright" => "(C)",
        "registered" => "(R)",
        "period" | "eosperiod" => ".",
        "quest" | "eosquest" => "?",
        "excl" | "eosexcl" => "!",
        "noeos" => "",
        "linebreak" => "\n",
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            return char::from_u32(code).map(|c| Cow::Owned(c.to_string()));
        }
    };
    Some(Cow::Borrowed(fixed))
}
