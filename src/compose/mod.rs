//! Selective reconstruction of a node's source text.
//!
//! A [`SpanTree`] mirrors a node's subtree, one [`Span`] per node. Each span
//! carries a [`Modification`] that is consulted when the tree is turned back
//! into text. Unmodified spans reproduce their source slice exactly,
//! including the gap text between children, so deleting a subtree leaves
//! every surrounding character in place.


use crate::syntax::{AstNode, HostError, TextRange};

/// What a span contributes when the tree is serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modification {
    /// Own text, or children and the gaps between them.
    #[default]
    None,
    /// Nothing from this span or anything below it.
    SkipAll,
    /// Only the gap text between children; children contribute nothing.
    SkipChildren,
    /// The given literal in place of the whole subtree.
    Replace(String),
}

/// Index of a span inside its [`SpanTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanId(u32);

impl SpanId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the host tree plus its serialization decision.
#[derive(Debug)]
pub struct Span<N> {
    node: N,
    range: TextRange,
    parent: Option<SpanId>,
    children: Vec<SpanId>,
    pub modification: Modification,
}

impl<N> Span<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn parent(&self) -> Option<SpanId> {
        self.parent
    }

    pub fn children(&self) -> &[SpanId] {
        &self.children
    }
}

/// The spans of one subtree, stored in pre-order: the root is the first
/// span and every span precedes its descendants, which precede its later
/// siblings.
#[derive(Debug)]
pub struct SpanTree<N> {
    spans: Vec<Span<N>>,
}

impl<N: AstNode> SpanTree<N> {
    /// Wrap `root` and all of its descendants.
    ///
    /// Fails if the host cannot list the children of some node.
    pub fn build(root: N) -> Result<Self, HostError> {
        let mut tree = SpanTree { spans: Vec::new() };
        tree.push(root, None)?;
        Ok(tree)
    }

    fn push(&mut self, node: N, parent: Option<SpanId>) -> Result<SpanId, HostError> {
        let children = node.children()?;
        let id = SpanId(self.spans.len() as u32);
        self.spans.push(Span {
            range: node.range(),
            node,
            parent,
            children: Vec::with_capacity(children.len()),
            modification: Modification::None,
        });
        for child in children {
            let child_id = self.push(child, Some(id))?;
            self.spans[id.index()].children.push(child_id);
        }
        Ok(id)
    }

    /// The text of the root after applying every span's modification,
    /// with whitespace runs collapsed to single spaces.
    pub fn modified_text(&self) -> String {
        let source = self.spans[0].node.source_file().text();
        let mut out = String::new();
        self.write_span(self.root(), source, &mut out);
        collapse_whitespace(&out)
    }

    fn write_span(&self, id: SpanId, source: &str, out: &mut String) {
        let span = self.get(id);
        match &span.modification {
            Modification::SkipAll => return,
            Modification::Replace(text) => {
                out.push_str(text);
                return;
            }
            Modification::None | Modification::SkipChildren => {}
        }

        let start = span.range.start as usize;
        let end = span.range.end as usize;
        if span.children.is_empty() {
            out.push_str(source.get(start..end).unwrap_or_default());
            return;
        }

        let mut cursor = start;
        for &child_id in &span.children {
            let child = self.get(child_id).range;
            out.push_str(source.get(cursor..child.start as usize).unwrap_or_default());
            if span.modification != Modification::SkipChildren {
                self.write_span(child_id, source, out);
            }
            cursor = child.end as usize;
        }
        out.push_str(source.get(cursor..end).unwrap_or_default());
    }
}

impl<N> SpanTree<N> {
    pub fn root(&self) -> SpanId {
        SpanId(0)
    }

    pub fn get(&self, id: SpanId) -> &Span<N> {
        &self.spans[id.index()]
    }

    pub fn get_mut(&mut self, id: SpanId) -> &mut Span<N> {
        &mut self.spans[id.index()]
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Visit every span in pre-order, children in source order.
    pub fn for_each(&mut self, mut visitor: impl FnMut(&mut Span<N>)) {
        // Storage order is pre-order.
        for span in &mut self.spans {
            visitor(span);
        }
    }

    /// Iterate spans in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (SpanId, &Span<N>)> {
        self.spans
            .iter()
            .enumerate()
            .map(|(i, span)| (SpanId(i as u32), span))
    }
}

/// Replace every run of whitespace (line breaks included) with one space
/// and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
