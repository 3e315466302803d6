// Markup events delivered by the XML reader, in document order

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    Begin {
        tag: String,
        attributes: Vec<Attribute>,
    },
    End {
        tag: String,
    },
    Text(String),
}

impl MarkupEvent {
    pub fn begin(tag: impl Into<String>) -> Self {
        MarkupEvent::Begin {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn end(tag: impl Into<String>) -> Self {
        MarkupEvent::End { tag: tag.into() }
    }

    pub fn text(data: impl Into<String>) -> Self {
        MarkupEvent::Text(data.into())
    }

    /// Forward this event to the matching sink callback.
    pub fn dispatch<S: EventSink + ?Sized>(&self, sink: &mut S) {
        match self {
            MarkupEvent::Begin { tag, attributes } => sink.begin(tag, attributes),
            MarkupEvent::End { tag } => sink.end(tag),
            MarkupEvent::Text(data) => sink.text(data),
        }
    }
}

/// Receiver of begin/end/text events.
///
/// Sources guarantee well-formed nesting: every `begin` is closed by a
/// matching `end` before its enclosing element closes.
pub trait EventSink {
    fn begin(&mut self, tag: &str, attributes: &[Attribute]);
    fn end(&mut self, tag: &str);
    fn text(&mut self, data: &str);
}

// Recording sink, handy for inspecting what a source produced
impl EventSink for Vec<MarkupEvent> {
    fn begin(&mut self, tag: &str, attributes: &[Attribute]) {
        self.push(MarkupEvent::Begin {
            tag: tag.to_string(),
            attributes: attributes.to_vec(),
        });
    }

    fn end(&mut self, tag: &str) {
        self.push(MarkupEvent::end(tag));
    }

    fn text(&mut self, data: &str) {
        self.push(MarkupEvent::text(data));
    }
}
