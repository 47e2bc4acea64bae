//! Debug printing of syntax trees and node positions.

use std::io::{self, Write};

use crate::compose::collapse_whitespace;
use crate::syntax::AstNode;

/// Longest text preview printed per node, ellipsis included.
pub const PREVIEW_WIDTH: usize = 100;

/// Printed in place of the text of a node the host cannot map to source.
pub const TEXT_UNAVAILABLE: &str = "(error getting text)";

const ELLIPSIS: &str = "...";

/// Collapse whitespace in `text` and cut it to at most `width` chars,
/// ending in `...` when shortened.
pub fn preview_text(text: &str, width: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= width {
        return collapsed;
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Write one `{indent}{kind}: [{text}]` line per node of the subtree,
/// children indented two spaces deeper than their parent.
pub fn dump_tree<N: AstNode, W: Write>(node: &N, out: &mut W) -> io::Result<()> {
    dump_tree_with(node, "", PREVIEW_WIDTH, out)
}

/// [`dump_tree`] with an explicit starting indent and preview width.
///
/// Host failures never abort the dump: unreadable text prints as
/// [`TEXT_UNAVAILABLE`] and unreadable children end that branch.
pub fn dump_tree_with<N: AstNode, W: Write>(
    node: &N,
    indent: &str,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let text = match node.text() {
        Ok(text) => preview_text(text, width),
        Err(_) => TEXT_UNAVAILABLE.to_string(),
    };
    writeln!(out, "{}{}: [{}]", indent, node.kind_name(), text)?;
    out.flush()?;

    if let Ok(children) = node.children() {
        let child_indent = format!("{}  ", indent);
        for child in &children {
            dump_tree_with(child, &child_indent, width, out)?;
        }
    }
    Ok(())
}

/// `[file#line]` for the node's start, with a zero-based line.
pub fn format_file_and_line_number<N: AstNode>(node: &N) -> String {
    let file = node.source_file();
    let pos = file.line_and_character_of_position(node.range().start);
    format!("[{}#{}]", file.file_name, pos.line)
}
