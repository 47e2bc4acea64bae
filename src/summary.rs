//! One-line declaration summaries.
//!
//! A summary is the declaration's own source text with selected subtrees
//! (doc comments, modifier keywords, bodies) removed or replaced and all
//! whitespace runs collapsed to single spaces.

use std::collections::BTreeMap;

use crate::compose::{Modification, Span, SpanTree};
use crate::syntax::{AstNode, HostError, SyntaxKind};

/// Per-kind modifications applied while summarizing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryRules {
    rules: BTreeMap<SyntaxKind, Modification>,
}

impl SummaryRules {
    /// No rules: the summary is the collapsed source text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop doc comments and the `declare` keyword.
    pub fn declarations() -> Self {
        Self::new()
            .with(SyntaxKind::JSDocComment, Modification::SkipAll)
            .with(SyntaxKind::DeclareKeyword, Modification::SkipAll)
    }

    pub fn with(mut self, kind: SyntaxKind, modification: Modification) -> Self {
        self.set(kind, modification);
        self
    }

    pub fn set(&mut self, kind: SyntaxKind, modification: Modification) {
        self.rules.insert(kind, modification);
    }

    pub fn remove(&mut self, kind: SyntaxKind) -> Option<Modification> {
        self.rules.remove(&kind)
    }

    pub fn get(&self, kind: SyntaxKind) -> Option<&Modification> {
        self.rules.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SyntaxKind, &Modification)> {
        self.rules.iter().map(|(kind, m)| (*kind, m))
    }

    fn apply<N: AstNode>(&self, span: &mut Span<N>) {
        if let Some(m) = span.node().syntax_kind().and_then(|kind| self.get(kind)) {
            span.modification = m.clone();
        }
    }
}

/// Summarize `node` under `rules`.
pub fn declaration_summary<N: AstNode>(
    node: N,
    rules: &SummaryRules,
) -> Result<String, HostError> {
    declaration_summary_with(node, rules, |_| {})
}

/// Like [`declaration_summary`], then let `visitor` adjust any span before
/// the text is composed. The visitor sees spans in pre-order after the
/// kind rules have been applied.
pub fn declaration_summary_with<N, F>(
    node: N,
    rules: &SummaryRules,
    mut visitor: F,
) -> Result<String, HostError>
where
    N: AstNode,
    F: FnMut(&mut Span<N>),
{
    let mut spans = SpanTree::build(node)?;
    spans.for_each(|span| {
        rules.apply(span);
        visitor(span);
    });
    Ok(spans.modified_text())
}
