//! Byte spans into source text.

use tree_sitter::Node;

/// A byte range into the text of one source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, salsa::Update)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The byte range covered by a CST node.
    pub fn from_node(node: &Node) -> Self {
        Self::new(node.start_byte(), node.end_byte())
    }
}

/// 1-based line number of a byte offset into `text`.
pub fn line_at(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32 + 1
}
