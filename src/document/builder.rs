use crate::document::dispatch::{Construction, Tag};
use crate::parser::types::{Attribute, EventSink, MarkupEvent};
use crate::renderer::node::{NodeKind, ParentKind, RenderNode};

/// Diagnostic switches for the builder; they never change the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// Trace element open/close events.
    pub trace_elements: bool,
    /// Trace every text event.
    pub trace_text: bool,
}

/// A finished node tree, ready for its single render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    summary: Option<RenderNode>,
    root: RenderNode,
}

impl Document {
    pub fn summary(&self) -> Option<&RenderNode> {
        self.summary.as_ref()
    }

    pub fn root(&self) -> &RenderNode {
        &self.root
    }
}

struct OpenNode {
    // None for the root
    tag: Option<Tag>,
    node: RenderNode,
}

/// Builds the node tree from begin/end/text events.
///
/// Open nodes live on a stack whose bottom is the document root. A node
/// closes by moving into the entries of the node below it, so the
/// finished tree has a single owner per node.
pub struct DocumentBuilder {
    options: BuildOptions,
    stack: Vec<OpenNode>,
    chapter_depth: usize,
    section_depth: usize,
    headings_rendered: usize,
    summary: Option<RenderNode>,
}

impl DocumentBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            stack: vec![OpenNode {
                tag: None,
                node: RenderNode::new(NodeKind::Root),
            }],
            chapter_depth: 0,
            section_depth: 0,
            headings_rendered: 0,
            summary: None,
        }
    }

    /// Build a document from an already collected event list.
    pub fn build(events: &[MarkupEvent], options: BuildOptions) -> Document {
        let mut builder = Self::new(options);
        for event in events {
            event.dispatch(&mut builder);
        }
        builder.finish()
    }

    /// Open elements, not counting the root.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    pub fn chapter_depth(&self) -> usize {
        self.chapter_depth
    }

    pub fn section_depth(&self) -> usize {
        self.section_depth
    }

    pub fn headings_rendered(&self) -> usize {
        self.headings_rendered
    }

    pub fn finish(mut self) -> Document {
        if self.depth() > 0 {
            tracing::warn!("Closing {} element(s) left open at end of input", self.depth());
        }
        while self.stack.len() > 1 {
            self.close_top();
        }

        let root = self
            .stack
            .pop()
            .map(|open| open.node)
            .unwrap_or_else(|| RenderNode::new(NodeKind::Root));

        Document {
            summary: self.summary,
            root,
        }
    }

    fn construction(&self) -> Construction {
        let mut kinds = self.stack.iter().rev().map(|open| ParentKind::from(open.node.kind()));
        Construction {
            parent: kinds.next().unwrap_or_default(),
            grandparent: kinds.next().unwrap_or_default(),
            heading_depth: self.chapter_depth + self.section_depth,
            headings_rendered: self.headings_rendered,
        }
    }

    fn close_top(&mut self) {
        let Some(OpenNode { tag, node }) = self.stack.pop() else {
            return;
        };

        match tag {
            Some(Tag::Chapter) => self.chapter_depth = self.chapter_depth.saturating_sub(1),
            Some(Tag::Section) => self.section_depth = self.section_depth.saturating_sub(1),
            _ => {}
        }

        if tag == Some(Tag::MajorHeading) {
            if self.summary.is_none() {
                self.summary = Some(node);
            } else {
                tracing::warn!("Dropping extra majorheading, summary already set");
            }
        } else if let Some(top) = self.stack.last_mut() {
            top.node.push_node(node);
        }
    }

    fn trace_indent(&self) -> String {
        "    ".repeat(self.depth())
    }
}

impl EventSink for DocumentBuilder {
    fn begin(&mut self, name: &str, attributes: &[Attribute]) {
        let tag = Tag::from_name(name);

        if self.options.trace_elements {
            let attrs: Vec<String> = attributes.iter().map(|a| a.to_string()).collect();
            tracing::debug!("{}BEGIN {} [{}]", self.trace_indent(), name, attrs.join(", "));
            if tag == Tag::Unknown {
                tracing::debug!("UNKNOWN: {}", name);
            }
        }

        match tag {
            Tag::Chapter => self.chapter_depth += 1,
            Tag::Section => self.section_depth += 1,
            _ => {}
        }

        let ctx = self.construction();
        let node = tag.build(&ctx);
        if tag == Tag::Title && ctx.heading_depth == 1 {
            self.headings_rendered += 1;
        }

        self.stack.push(OpenNode {
            tag: Some(tag),
            node,
        });
    }

    fn end(&mut self, name: &str) {
        if self.stack.len() == 1 {
            tracing::warn!("Ignoring end tag </{}> with no open element", name);
            return;
        }

        self.close_top();

        if self.options.trace_elements {
            tracing::debug!("{}END {}", self.trace_indent(), name);
        }
    }

    fn text(&mut self, data: &str) {
        if self.options.trace_text {
            tracing::debug!("{}[{}]", self.trace_indent(), data.trim());
        }

        if let Some(top) = self.stack.last_mut() {
            top.node.push_text(data);
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}
