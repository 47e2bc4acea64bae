//! Node kinds reported by the host parser.
//!
//! The ordinal of each kind is its position in [`SyntaxKind::ALL`], which
//! is how hosts that only hand out integer tags map onto this enum.

macro_rules! syntax_kinds {
    ($($kind:ident),* $(,)?) => {
        /// All node kinds the host parser can report.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($kind,)*
        }

        impl SyntaxKind {
            /// Every kind, indexed by ordinal.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind,)*];

            /// The kind's name as the host prints it.
            pub fn name(self) -> &'static str {
                match self {
                    $(SyntaxKind::$kind => stringify!($kind),)*
                }
            }

            /// Look a kind up by its name.
            pub fn from_name(name: &str) -> Option<SyntaxKind> {
                match name {
                    $(stringify!($kind) => Some(SyntaxKind::$kind),)*
                    _ => None,
                }
            }
        }
    };
}

syntax_kinds! {
    // Trivia and punctuation
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    LessThanToken,
    GreaterThanToken,
    CommaToken,
    ColonToken,
    SemicolonToken,
    DotToken,
    QuestionToken,
    EqualsToken,
    EqualsGreaterThanToken,
    BarToken,
    AmpersandToken,
    EndOfFileToken,

    // Literals and names
    Identifier,
    StringLiteral,
    NumericLiteral,

    // Keywords
    AbstractKeyword,
    AnyKeyword,
    AsyncKeyword,
    BooleanKeyword,
    ClassKeyword,
    ConstKeyword,
    DeclareKeyword,
    DefaultKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FunctionKeyword,
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    NamespaceKeyword,
    NumberKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    ReturnKeyword,
    StaticKeyword,
    StringKeyword,
    TypeKeyword,
    VarKeyword,
    VoidKeyword,

    // Type syntax
    TypeParameter,
    TypeReference,
    UnionType,
    IntersectionType,
    ArrayType,
    TypeLiteral,
    ExpressionWithTypeArguments,
    HeritageClause,

    // Members
    Parameter,
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    PropertySignature,
    MethodSignature,
    IndexSignature,
    EnumMember,

    // Declarations and statements
    ClassDeclaration,
    InterfaceDeclaration,
    FunctionDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ModuleBlock,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    Block,
    ExpressionStatement,
    ReturnStatement,

    // Structure
    SyntaxList,
    SourceFile,
    JSDocComment,
}

impl SyntaxKind {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Map an integer tag back to its kind. `None` for tags outside the table.
    pub fn from_u16(ordinal: u16) -> Option<SyntaxKind> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a raw kind tag to a printable name, total over all tags.
pub fn kind_name(ordinal: u16) -> String {
    match SyntaxKind::from_u16(ordinal) {
        Some(kind) => kind.name().to_string(),
        None => format!("Unknown({})", ordinal),
    }
}
