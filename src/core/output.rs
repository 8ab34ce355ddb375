//! Styled text produced by the transition table.
//!
//! A [`RenderedOutput`] is a small tree of plain text and styled spans inside
//! a single container block. It is created once per transition and stored
//! verbatim in the transcript.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Highlight applied to a span, mirroring the shell colour scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Error,
    Info,
    Warning,
    New,
    Comment,
}

impl Style {
    /// CSS class the host uses to colour this span.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Error => "hljs-shell-error",
            Self::Info => "hljs-shell-info",
            Self::Warning => "hljs-shell-warning",
            Self::New => "hljs-shell-new",
            Self::Comment => "hljs-comment",
        }
    }
}

/// One node of styled text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Span { style: Style, children: Vec<Node> },
}

/// Plain text node.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text { text: value.into() }
}

/// Styled span holding a single run of text.
pub fn span(style: Style, value: impl Into<String>) -> Node {
    Node::Span {
        style,
        children: vec![text(value)],
    }
}

impl Node {
    fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Span { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text { text } => escape_html_into(out, text),
            Self::Span { style, children } => {
                let _ = write!(out, "<span class='{}'>", style.class());
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</span>");
            }
        }
    }
}

/// Container the nodes are laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A single line of prose.
    Line,
    /// A paragraph, possibly spanning several lines.
    Paragraph,
    /// Preformatted tool output.
    Code,
}

impl Block {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Line => "div",
            Self::Paragraph => "p",
            Self::Code => "code",
        }
    }
}

/// Immutable styled output of a single command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOutput {
    block: Block,
    nodes: Vec<Node>,
}

impl RenderedOutput {
    pub fn new(block: Block, nodes: Vec<Node>) -> Self {
        Self { block, nodes }
    }

    pub fn line(nodes: Vec<Node>) -> Self {
        Self::new(Block::Line, nodes)
    }

    pub fn paragraph(nodes: Vec<Node>) -> Self {
        Self::new(Block::Paragraph, nodes)
    }

    pub fn code(nodes: Vec<Node>) -> Self {
        Self::new(Block::Code, nodes)
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The output with all styling stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.push_plain_text(&mut out);
        }
        out
    }

    /// Append the HTML markup for this output to `out`.
    ///
    /// Text is escaped; only the spans produced here carry markup.
    pub fn write_html(&self, out: &mut String) {
        let tag = self.block.tag();
        let _ = write!(out, "<{tag}>");
        for node in &self.nodes {
            node.write_html(out);
        }
        let _ = write!(out, "</{tag}>");
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub(crate) fn escape_html_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
