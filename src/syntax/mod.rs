//! The host syntax tree as seen by the formatters.
//!
//! Formatting code only talks to trees through [`AstNode`]. The arena in
//! [`tree`] is the in-crate host; anything else that can hand out kinds,
//! ranges, text and children can implement the trait.

pub mod interchange;
pub mod kind;
pub mod range;
pub mod source;
pub mod tree;

#[cfg(test)]
pub(crate) mod fixtures;

pub use kind::SyntaxKind;
pub use range::TextRange;
pub use source::{LineAndCharacter, SourceFile};
pub use tree::{Node, NodeId, SyntaxTree, TreeBuilder};

/// A failure inside the host parser while reading a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The node was synthesized and has no text in the source file.
    NoSourceMapping,
    /// The host could not enumerate the node's children.
    ChildrenUnavailable,
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::NoSourceMapping => write!(f, "node has no source mapping"),
            HostError::ChildrenUnavailable => write!(f, "node children are unavailable"),
        }
    }
}

impl std::error::Error for HostError {}

/// A node of a host-parsed syntax tree.
pub trait AstNode: Sized {
    /// The host's integer kind tag.
    fn kind_tag(&self) -> u16;

    /// `[start, end)` of the node in its source file.
    fn range(&self) -> TextRange;

    /// The node's own source text.
    fn text(&self) -> Result<&str, HostError>;

    /// Direct children in source order.
    fn children(&self) -> Result<Vec<Self>, HostError>;

    fn source_file(&self) -> &SourceFile;

    fn syntax_kind(&self) -> Option<SyntaxKind> {
        SyntaxKind::from_u16(self.kind_tag())
    }

    fn kind_name(&self) -> String {
        kind::kind_name(self.kind_tag())
    }
}
