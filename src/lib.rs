pub mod compose;
pub mod config;
pub mod diagnostic;
pub mod dump;
pub mod flags;
pub mod summary;
pub mod syntax;

// Re-exports: the operations callers reach for most
pub use compose::{Modification, Span, SpanId, SpanTree};
pub use dump::{dump_tree, format_file_and_line_number};
pub use flags::{format_flags, format_symbol_flags, format_type_flags};
pub use summary::{declaration_summary, declaration_summary_with, SummaryRules};
pub use syntax::{AstNode, HostError, SyntaxKind, SyntaxTree};

use std::path::Path;

use diagnostic::Diagnostic;
use syntax::interchange::{self, LoadError};

/// Load a tree file, rendering any problems to stderr.
pub fn load_tree(path: &Path) -> Result<SyntaxTree, Vec<Diagnostic>> {
    interchange::load_tree(path).map_err(|err| {
        err.render();
        err.diagnostics
    })
}

/// Load a tree file without printing anything.
pub fn load_tree_silent(path: &Path) -> Result<SyntaxTree, LoadError> {
    interchange::load_tree(path)
}

/// Summarize the node at `path` (child indices from the root) of a
/// loaded tree.
pub fn summarize_at(
    tree: &SyntaxTree,
    path: &[usize],
    rules: &SummaryRules,
) -> Result<String, Diagnostic> {
    let node = tree.root().descend(path).ok_or_else(|| {
        Diagnostic::error(
            format!("no node at path {:?}", path),
            syntax::TextRange::empty(),
        )
    })?;
    declaration_summary(node, rules).map_err(|e| {
        Diagnostic::error(format!("cannot summarize {}: {}", node.kind(), e), node.range())
    })
}
