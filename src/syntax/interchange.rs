//! Loading host-exported syntax trees from JSON.
//!
//! ```json
//! {
//!   "file": "foo.d.ts",
//!   "text": "declare class Foo {}",
//!   "root": {
//!     "kind": "ClassDeclaration", "start": 0, "end": 20,
//!     "children": [
//!       { "kind": "DeclareKeyword", "start": 0, "end": 7 }
//!     ]
//!   }
//! }
//! ```
//!
//! `synthetic: true` marks a node without source text and `opaque: true`
//! a node whose children the host refuses to list.

use std::path::Path;

use serde::Deserialize;

use super::{SyntaxKind, SyntaxTree, TextRange, TreeBuilder};
use crate::diagnostic::{render_diagnostics, Diagnostic};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreeFile {
    file: String,
    text: String,
    root: NodeEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    kind: String,
    start: u32,
    end: u32,
    #[serde(default)]
    children: Vec<NodeEntry>,
    #[serde(default)]
    synthetic: bool,
    #[serde(default)]
    opaque: bool,
}

/// Why a tree could not be loaded, with the text the diagnostics point into.
#[derive(Debug)]
pub struct LoadError {
    /// Name of the text the diagnostic ranges refer to.
    pub source_name: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadError {
    fn single(source_name: &str, source: &str, diagnostic: Diagnostic) -> Self {
        Self {
            source_name: source_name.to_string(),
            source: source.to_string(),
            diagnostics: vec![diagnostic],
        }
    }

    /// Render every diagnostic to stderr.
    pub fn render(&self) {
        render_diagnostics(&self.diagnostics, &self.source_name, &self.source);
    }
}

/// Read and parse a tree file.
pub fn load_tree(path: &Path) -> Result<SyntaxTree, LoadError> {
    let name = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|e| {
        LoadError::single(
            &name,
            "",
            Diagnostic::error(format!("cannot read '{}': {}", name, e), TextRange::empty()),
        )
    })?;
    parse_tree(&json, &name)
}

/// Parse a tree from JSON. `json_name` labels JSON syntax errors.
///
/// Structural problems (unknown kinds, inverted or escaping ranges,
/// overlapping siblings) are all collected before failing.
pub fn parse_tree(json: &str, json_name: &str) -> Result<SyntaxTree, LoadError> {
    let file: TreeFile = serde_json::from_str(json).map_err(|e| {
        let offset = offset_of(json, e.line(), e.column());
        LoadError::single(
            json_name,
            json,
            Diagnostic::error(format!("invalid tree file: {}", e), TextRange::at(offset)),
        )
    })?;

    let mut diagnostics = Vec::new();
    check_entry(&file.root, file.text.len() as u32, &mut diagnostics);
    if !diagnostics.is_empty() {
        return Err(LoadError {
            source_name: file.file,
            source: file.text,
            diagnostics,
        });
    }

    let mut builder = TreeBuilder::new(file.file.clone(), file.text.clone());
    add_entry(&mut builder, &file.root);
    let tree = builder.finish();

    let diagnostics = tree.validate();
    if !diagnostics.is_empty() {
        return Err(LoadError {
            source_name: file.file,
            source: file.text,
            diagnostics,
        });
    }
    Ok(tree)
}

/// Checks that must pass before the builder can run.
fn check_entry(entry: &NodeEntry, text_len: u32, diagnostics: &mut Vec<Diagnostic>) {
    let range = TextRange {
        start: entry.start,
        end: entry.end,
    }
    .clamp_to(text_len);
    if SyntaxKind::from_name(&entry.kind).is_none() {
        diagnostics.push(
            Diagnostic::error(format!("unknown node kind '{}'", entry.kind), range)
                .with_note("kind names are case-sensitive, e.g. 'ClassDeclaration'".to_string()),
        );
    }
    if entry.start > entry.end {
        diagnostics.push(Diagnostic::error(
            format!(
                "{} ends at {} before it starts at {}",
                entry.kind, entry.end, entry.start
            ),
            range,
        ));
    }
    for child in &entry.children {
        check_entry(child, text_len, diagnostics);
    }
}

fn add_entry(builder: &mut TreeBuilder, entry: &NodeEntry) {
    let Some(kind) = SyntaxKind::from_name(&entry.kind) else {
        return;
    };
    let id = if entry.synthetic && entry.children.is_empty() {
        builder.synthetic(kind, entry.start)
    } else {
        let id = builder.start_node(kind, entry.start);
        for child in &entry.children {
            add_entry(builder, child);
        }
        builder.finish_node(entry.end);
        if entry.synthetic {
            builder.mark_synthetic(id);
        }
        id
    };
    if entry.opaque {
        builder.mark_opaque(id);
    }
}

/// Byte offset of a 1-based line/column pair as serde_json reports them.
fn offset_of(text: &str, line: usize, column: usize) -> u32 {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(text.len());
    offset as u32
}
