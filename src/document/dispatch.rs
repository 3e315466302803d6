//! Tag dispatch: which node each Texinfo XML element turns into.
//!
//! Tag names map to a [`Tag`] through a lookup table, and every tag has a
//! constructor that receives the [`Construction`] context explicitly. A
//! node's policy (delimiters, blank lines, text capture) is decided here
//! once and never revisited at render time.

use crate::renderer::node::{Layout, NodeKind, ParentKind, RenderNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Emphasis,
    Code,
    Example,
    Chapter,
    Section,
    Title,
    Itemize,
    Quotation,
    Item,
    Para,
    TableItem,
    TableTerm,
    XrefNodeName,
    MajorHeading,
    Unknown,
}

const TAGS: &[(&str, Tag)] = &[
    ("b", Tag::Bold),
    ("chapter", Tag::Chapter),
    ("code", Tag::Code),
    ("example", Tag::Example),
    ("file", Tag::Code),
    ("i", Tag::Emphasis),
    ("item", Tag::Item),
    ("itemize", Tag::Itemize),
    ("majorheading", Tag::MajorHeading),
    ("para", Tag::Para),
    ("quotation", Tag::Quotation),
    ("samp", Tag::Code),
    ("section", Tag::Section),
    ("tableitem", Tag::TableItem),
    ("tableterm", Tag::TableTerm),
    ("title", Tag::Title),
    ("xrefnodename", Tag::XrefNodeName),
];

/// Context read at the instant a node is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Construction {
    /// Kind of the node on top of the open stack.
    pub parent: ParentKind,
    /// Kind of the node below it.
    pub grandparent: ParentKind,
    /// Open chapters plus open sections.
    pub heading_depth: usize,
    /// Top-level headings built so far.
    pub headings_rendered: usize,
}

impl Tag {
    pub fn from_name(name: &str) -> Tag {
        TAGS.iter()
            .find(|(tag_name, _)| *tag_name == name)
            .map(|(_, tag)| *tag)
            .unwrap_or(Tag::Unknown)
    }

    pub fn build(self, ctx: &Construction) -> RenderNode {
        match self {
            // Bold gets an italic prefix so an indented line starting with
            // it is not read as a bullet
            Tag::Bold => inline("__*", "*"),
            Tag::Emphasis => inline("_", "_"),
            Tag::Code => inline("`", "`"),
            Tag::Example => RenderNode::new(NodeKind::CodeBlock)
                .with_blank_lines(2)
                .with_delims("{{{\n", "\n}}}"),
            Tag::Title => heading(ctx.heading_depth, ctx.headings_rendered),
            Tag::Itemize | Tag::Quotation => RenderNode::new(NodeKind::Indented)
                .with_layout(Layout::Indented)
                .with_blank_lines(2)
                .without_text(),
            Tag::Item => item(ctx),
            Tag::Para => paragraph(ctx),
            Tag::TableItem => RenderNode::new(NodeKind::TableRow)
                .with_blank_lines(1)
                .without_text(),
            Tag::TableTerm => RenderNode::new(NodeKind::TableTerm).with_lead("||"),
            Tag::XrefNodeName => {
                RenderNode::new(NodeKind::CrossReference).with_layout(Layout::Anchor)
            }
            Tag::MajorHeading => RenderNode::new(NodeKind::Summary).with_lead("#summary "),
            Tag::Chapter | Tag::Section | Tag::Unknown => RenderNode::pass_through(),
        }
    }
}

fn inline(lead: &str, trail: &str) -> RenderNode {
    RenderNode::new(NodeKind::Inline).with_delims(lead, trail)
}

fn heading(depth: usize, headings_rendered: usize) -> RenderNode {
    let marks = "=".repeat(depth + 1);
    let mut lead = format!("{} ", marks);

    // Divider before every top-level heading but the first
    if depth == 1 && headings_rendered > 0 {
        lead = format!("----\n{}", lead);
    }

    RenderNode::new(NodeKind::Heading)
        .with_blank_lines(2)
        .with_delims(lead, format!(" {}", marks))
}

fn item(ctx: &Construction) -> RenderNode {
    let node = RenderNode::new(NodeKind::ListItem).without_text();
    match ctx.parent {
        ParentKind::TableRow => node.with_delims("||", "||"),
        _ => node.with_blank_lines(1),
    }
}

fn paragraph(ctx: &Construction) -> RenderNode {
    let node = RenderNode::new(NodeKind::Paragraph);
    match (ctx.parent, ctx.grandparent) {
        (ParentKind::ListItem, ParentKind::TableRow) => node,
        (ParentKind::ListItem, _) => node.with_blank_lines(1).with_lead("* "),
        _ => node.with_blank_lines(2),
    }
}
