use super::{AstNode, HostError, SourceFile, SyntaxKind, TextRange};
use crate::diagnostic::Diagnostic;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: SyntaxKind,
    range: TextRange,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Made up by the host; no text behind the range.
    synthetic: bool,
    /// The host refuses to enumerate children.
    opaque: bool,
}

/// An arena-owned syntax tree over one source file.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    file: SourceFile,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> Node<'_> {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { tree: self, id }
    }

    pub fn source_file(&self) -> &SourceFile {
        &self.file
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check the range invariants every consumer relies on: ranges lie
    /// inside the text on char boundaries, and each node's children are
    /// contained in it, ordered and disjoint.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let text = self.file.text();

        for data in &self.nodes {
            if !data.synthetic && data.range.slice(text).is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        format!(
                            "{} range {} is outside the source text or splits a character",
                            data.kind, data.range
                        ),
                        data.range.clamp_to(self.file.len()),
                    )
                    .with_note(format!("source text is {} bytes", self.file.len())),
                );
            }

            let mut prev_end: Option<(SyntaxKind, u32)> = None;
            for &child_id in &data.children {
                let child = &self.nodes[child_id.index()];
                if !data.range.contains_range(child.range) {
                    diagnostics.push(
                        Diagnostic::error(
                            format!(
                                "{} {} is not contained in its parent {} {}",
                                child.kind, child.range, data.kind, data.range
                            ),
                            child.range.clamp_to(self.file.len()),
                        )
                        .with_help("child ranges must lie within the parent range".to_string()),
                    );
                }
                if let Some((prev_kind, end)) = prev_end {
                    if child.range.start < end {
                        diagnostics.push(
                            Diagnostic::error(
                                format!(
                                    "{} {} overlaps or precedes the preceding {} sibling",
                                    child.kind, child.range, prev_kind
                                ),
                                child.range.clamp_to(self.file.len()),
                            )
                            .with_help(
                                "children must be listed in source order without overlap"
                                    .to_string(),
                            ),
                        );
                    }
                }
                prev_end = Some((child.kind, child.range.end));
            }
        }

        diagnostics
    }
}

/// A borrowed handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn parent(&self) -> Option<Node<'t>> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    pub fn is_synthetic(&self) -> bool {
        self.data().synthetic
    }

    /// The node's source text, borrowed from the tree rather than the handle.
    pub fn text(&self) -> Result<&'t str, HostError> {
        let data = self.data();
        if data.synthetic {
            return Err(HostError::NoSourceMapping);
        }
        data.range
            .slice(self.tree.file.text())
            .ok_or(HostError::NoSourceMapping)
    }

    /// Follow a path of child indices down from this node.
    pub fn descend(&self, path: &[usize]) -> Option<Node<'t>> {
        let mut node = *self;
        for &index in path {
            let data = node.data();
            if data.opaque {
                return None;
            }
            node = self.tree.node(*data.children.get(index)?);
        }
        Some(node)
    }
}

impl<'t> AstNode for Node<'t> {
    fn kind_tag(&self) -> u16 {
        self.data().kind.as_u16()
    }

    fn range(&self) -> TextRange {
        self.data().range
    }

    fn text(&self) -> Result<&str, HostError> {
        Node::text(self)
    }

    fn children(&self) -> Result<Vec<Self>, HostError> {
        let data = self.data();
        if data.opaque {
            return Err(HostError::ChildrenUnavailable);
        }
        Ok(data.children.iter().map(|&id| self.tree.node(id)).collect())
    }

    fn source_file(&self) -> &SourceFile {
        &self.tree.file
    }
}

/// Builds a [`SyntaxTree`] top-down, the way a host parser reports it.
///
/// ```ignore
/// let mut b = TreeBuilder::new("a.ts", "class A {}");
/// b.start_node(SyntaxKind::ClassDeclaration, 0);
/// b.token(SyntaxKind::ClassKeyword, 0, 5);
/// b.token(SyntaxKind::Identifier, 6, 7);
/// b.finish_node(10);
/// let tree = b.finish();
/// ```
pub struct TreeBuilder {
    file: SourceFile,
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file: SourceFile::new(file_name, text),
            nodes: Vec::new(),
            open: Vec::new(),
            root: None,
        }
    }

    fn push(&mut self, kind: SyntaxKind, range: TextRange, synthetic: bool) -> NodeId {
        assert!(
            self.root.is_none() || !self.open.is_empty(),
            "tree already has a finished root"
        );
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.open.last().copied();
        self.nodes.push(NodeData {
            kind,
            range,
            parent,
            children: Vec::new(),
            synthetic,
            opaque: false,
        });
        match parent {
            Some(p) => self.nodes[p.index()].children.push(id),
            None => self.root = Some(id),
        }
        id
    }

    /// Open an interior node. Its end is given by [`finish_node`](Self::finish_node).
    pub fn start_node(&mut self, kind: SyntaxKind, start: u32) -> NodeId {
        let id = self.push(kind, TextRange::at(start), false);
        self.open.push(id);
        id
    }

    /// Close the innermost open node at `end`.
    pub fn finish_node(&mut self, end: u32) {
        let id = self.open.pop().expect("finish_node without start_node");
        let data = &mut self.nodes[id.index()];
        data.range = TextRange::new(data.range.start, end);
    }

    /// Add a leaf node.
    pub fn token(&mut self, kind: SyntaxKind, start: u32, end: u32) -> NodeId {
        self.push(kind, TextRange::new(start, end), false)
    }

    /// Add a leaf with no source text, positioned at `at`.
    pub fn synthetic(&mut self, kind: SyntaxKind, at: u32) -> NodeId {
        self.push(kind, TextRange::at(at), true)
    }

    /// Drop the source mapping of a node, keeping its range and children.
    pub fn mark_synthetic(&mut self, id: NodeId) {
        self.nodes[id.index()].synthetic = true;
    }

    /// Make the host refuse to list this node's children.
    pub fn mark_opaque(&mut self, id: NodeId) {
        self.nodes[id.index()].opaque = true;
    }

    pub fn finish(self) -> SyntaxTree {
        assert!(self.open.is_empty(), "unfinished nodes in tree builder");
        let root = self.root.expect("tree builder has no root node");
        SyntaxTree {
            file: self.file,
            nodes: self.nodes,
            root,
        }
    }
}
