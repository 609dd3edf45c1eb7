//! Structured command output.
//!
//! Blocks describe what to show, never how: colours and glyphs are chosen by
//! the [`Renderer`](crate::render::Renderer) from the session theme.

use serde::{Deserialize, Serialize};

/// Symbolic link icon, resolved from the `icon` tag of a portfolio link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Globe,
    Github,
    Linkedin,
    Mail,
    Instagram,
    /// Generic link for unknown tags.
    Link,
}

impl Icon {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "globe" => Self::Globe,
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            "mail" => Self::Mail,
            "instagram" => Self::Instagram,
            _ => Self::Link,
        }
    }
}

/// One element of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Heading { text: String },
    Text { text: String },
    /// Secondary text such as periods, hints and footers.
    Muted { text: String },
    Quote { text: String },
    Field { label: String, value: String },
    Tags { items: Vec<String> },
    Bullets { items: Vec<String> },
    Link { label: String, href: String, icon: Icon },
    Check { name: String, pass: bool, message: String },
    /// The section backing this part of the block is missing.
    Unavailable { section: String },
    Gap,
}

impl Node {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::Muted { text: text.into() }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field { label: label.into(), value: value.into() }
    }

    pub fn tags<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tags { items: items.into_iter().map(Into::into).collect() }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self::Link { label: label.into(), href: href.into(), icon }
    }

    pub fn unavailable(section: impl Into<String>) -> Self {
        Self::Unavailable { section: section.into() }
    }
}

/// A titled group of nodes produced by one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub title: String,
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), nodes: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// True when the block reports a missing section.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Unavailable { .. }))
    }
}
