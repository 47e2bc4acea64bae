//! The formatters driven through a host tree that is not the built-in arena.

use spanfmt::dump::dump_tree;
use spanfmt::syntax::{SourceFile, TextRange};
use spanfmt::{
    declaration_summary, format_file_and_line_number, AstNode, HostError, Modification,
    SummaryRules, SyntaxKind,
};

/// A node as some other parser might describe it.
struct Def {
    tag: u16,
    start: u32,
    end: u32,
    children: Vec<Def>,
    /// Refuse to hand out text, like a synthesized node.
    no_text: bool,
}

fn leaf(kind: SyntaxKind, start: u32, end: u32) -> Def {
    Def {
        tag: kind.as_u16(),
        start,
        end,
        children: Vec::new(),
        no_text: false,
    }
}

fn node(kind: SyntaxKind, start: u32, end: u32, children: Vec<Def>) -> Def {
    Def {
        tag: kind.as_u16(),
        start,
        end,
        children,
        no_text: false,
    }
}

#[derive(Clone, Copy)]
struct Toy<'a> {
    file: &'a SourceFile,
    def: &'a Def,
}

impl<'a> AstNode for Toy<'a> {
    fn kind_tag(&self) -> u16 {
        self.def.tag
    }

    fn range(&self) -> TextRange {
        TextRange::new(self.def.start, self.def.end)
    }

    fn text(&self) -> Result<&str, HostError> {
        if self.def.no_text {
            return Err(HostError::NoSourceMapping);
        }
        self.range()
            .slice(self.file.text())
            .ok_or(HostError::NoSourceMapping)
    }

    fn children(&self) -> Result<Vec<Self>, HostError> {
        Ok(self
            .def
            .children
            .iter()
            .map(|def| Toy {
                file: self.file,
                def,
            })
            .collect())
    }

    fn source_file(&self) -> &SourceFile {
        self.file
    }
}

fn interface_def() -> (SourceFile, Def) {
    use SyntaxKind::{
        CloseBraceToken, ColonToken, ExportKeyword, Identifier, InterfaceDeclaration,
        InterfaceKeyword, NumberKeyword, OpenBraceToken, PropertySignature, SemicolonToken,
        SyntaxList,
    };
    let file = SourceFile::new("point.ts", "export interface Point {\n  x: number;\n}");
    let def = node(
        InterfaceDeclaration,
        0,
        39,
        vec![
            node(SyntaxList, 0, 6, vec![leaf(ExportKeyword, 0, 6)]),
            leaf(InterfaceKeyword, 7, 16),
            leaf(Identifier, 17, 22),
            leaf(OpenBraceToken, 23, 24),
            node(
                SyntaxList,
                27,
                37,
                vec![node(
                    PropertySignature,
                    27,
                    37,
                    vec![
                        leaf(Identifier, 27, 28),
                        leaf(ColonToken, 28, 29),
                        leaf(NumberKeyword, 30, 36),
                        leaf(SemicolonToken, 36, 37),
                    ],
                )],
            ),
            leaf(CloseBraceToken, 38, 39),
        ],
    );
    (file, def)
}

#[test]
fn test_summary_over_foreign_host() {
    let (file, def) = interface_def();
    let root = Toy {
        file: &file,
        def: &def,
    };
    let rules = SummaryRules::declarations()
        .with(SyntaxKind::ExportKeyword, Modification::SkipAll)
        .with(SyntaxKind::PropertySignature, Modification::Replace("...".into()));
    let summary = declaration_summary(root, &rules).unwrap();
    assert_eq!(summary, "interface Point { ... }");
}

#[test]
fn test_unmodified_foreign_summary() {
    let (file, def) = interface_def();
    let root = Toy {
        file: &file,
        def: &def,
    };
    let summary = declaration_summary(root, &SummaryRules::new()).unwrap();
    assert_eq!(summary, "export interface Point { x: number; }");
}

#[test]
fn test_dump_unknown_tag_and_missing_text() {
    let file = SourceFile::new("odd.ts", "abc def");
    let def = Def {
        tag: 9000,
        start: 0,
        end: 7,
        children: vec![
            leaf(SyntaxKind::Identifier, 0, 3),
            Def {
                tag: SyntaxKind::Identifier.as_u16(),
                start: 4,
                end: 7,
                children: Vec::new(),
                no_text: true,
            },
        ],
        no_text: false,
    };
    let root = Toy {
        file: &file,
        def: &def,
    };

    let mut buf = Vec::new();
    dump_tree(&root, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Unknown(9000): [abc def]\n  Identifier: [abc]\n  Identifier: [(error getting text)]\n"
    );
}

#[test]
fn test_position_from_foreign_host() {
    let (file, def) = interface_def();
    let property = Toy {
        file: &file,
        def: &def.children[4].children[0],
    };
    assert_eq!(format_file_and_line_number(&property), "[point.ts#1]");
}
