use std::io::{self, Write};

use crate::renderer::stream::OutputStream;
use crate::renderer::traits::Render;

/// What a node was built for. Only consulted while building children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    PassThrough,
    Inline,
    CodeBlock,
    Heading,
    Indented,
    ListItem,
    Paragraph,
    TableRow,
    TableTerm,
    CrossReference,
    Summary,
}

/// The part of a node's kind that changes how its children are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentKind {
    #[default]
    Other,
    ListItem,
    TableRow,
}

impl From<NodeKind> for ParentKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::ListItem => ParentKind::ListItem,
            NodeKind::TableRow => ParentKind::TableRow,
            _ => ParentKind::Other,
        }
    }
}

/// How a node lays out its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Delimiters and entries written straight through.
    Flow,
    /// Like `Flow`, one indentation level deeper.
    Indented,
    /// Entries rendered offscreen, emitted as `[#anchor label]`.
    Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Node(RenderNode),
    Text(String),
}

/// One formatting unit of the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    kind: NodeKind,
    layout: Layout,
    captures_text: bool,
    lead: Option<String>,
    trail: Option<String>,
    min_blank_lines: usize,
    entries: Vec<Entry>,
}

impl RenderNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            layout: Layout::Flow,
            captures_text: true,
            lead: None,
            trail: None,
            min_blank_lines: 0,
            entries: Vec::new(),
        }
    }

    /// Structurally transparent node whose own text is discarded.
    pub fn pass_through() -> Self {
        Self::new(NodeKind::PassThrough).without_text()
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn without_text(mut self) -> Self {
        self.captures_text = false;
        self
    }

    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }

    pub fn with_trail(mut self, trail: impl Into<String>) -> Self {
        self.trail = Some(trail.into());
        self
    }

    pub fn with_delims(self, lead: impl Into<String>, trail: impl Into<String>) -> Self {
        self.with_lead(lead).with_trail(trail)
    }

    pub fn with_blank_lines(mut self, count: usize) -> Self {
        self.min_blank_lines = count;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn captures_text(&self) -> bool {
        self.captures_text
    }

    pub fn lead(&self) -> Option<&str> {
        self.lead.as_deref()
    }

    pub fn trail(&self) -> Option<&str> {
        self.trail.as_deref()
    }

    pub fn min_blank_lines(&self) -> usize {
        self.min_blank_lines
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push_node(&mut self, child: RenderNode) {
        self.entries.push(Entry::Node(child));
    }

    /// Append literal text, or drop it when this node does not capture text.
    pub fn push_text(&mut self, text: &str) {
        if self.captures_text {
            self.entries.push(Entry::Text(text.to_string()));
        }
    }

    /// Delimiters and entries, without the blank-line top-up.
    pub fn render_body<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()> {
        match self.layout {
            Layout::Flow => self.render_flow(out),
            Layout::Indented => out.indented(|out| self.render_flow(out)),
            Layout::Anchor => {
                let mut buffer = out.offscreen();
                self.render_entries(&mut buffer)?;
                let label = String::from_utf8_lossy(&buffer.into_inner()).into_owned();
                let anchor = label.replace(' ', "_");
                out.write_str(&format!("[#{} {}]", anchor, label))
            }
        }
    }

    fn render_flow<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()> {
        if let Some(lead) = &self.lead {
            out.write_str(lead)?;
        }
        self.render_entries(out)?;
        if let Some(trail) = &self.trail {
            out.write_str(trail)?;
        }
        Ok(())
    }

    fn render_entries<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()> {
        for entry in &self.entries {
            match entry {
                Entry::Text(text) => out.write_str(text)?,
                Entry::Node(child) => child.render(out)?,
            }
        }
        Ok(())
    }
}

impl Render for RenderNode {
    fn render<W: Write>(&self, out: &mut OutputStream<W>) -> io::Result<()> {
        out.ensure_newlines(self.min_blank_lines)?;
        self.render_body(out)
    }
}
