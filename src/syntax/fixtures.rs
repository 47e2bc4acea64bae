//! Hand-built trees shared by unit tests.

use super::{SyntaxKind, SyntaxTree, TreeBuilder};

/// `/** doc */\ndeclare class Foo<T> extends Bar {`
pub(crate) fn declared_class() -> SyntaxTree {
    use SyntaxKind::*;

    let mut b = TreeBuilder::new("foo.d.ts", "/** doc */\ndeclare class Foo<T> extends Bar {");
    b.start_node(ClassDeclaration, 0);
    b.token(JSDocComment, 0, 10);
    b.start_node(SyntaxList, 11);
    b.token(DeclareKeyword, 11, 18);
    b.finish_node(18);
    b.token(ClassKeyword, 19, 24);
    b.token(Identifier, 25, 28);
    b.token(LessThanToken, 28, 29);
    b.start_node(SyntaxList, 29);
    b.start_node(TypeParameter, 29);
    b.token(Identifier, 29, 30);
    b.finish_node(30);
    b.finish_node(30);
    b.token(GreaterThanToken, 30, 31);
    b.start_node(SyntaxList, 32);
    b.start_node(HeritageClause, 32);
    b.token(ExtendsKeyword, 32, 39);
    b.start_node(SyntaxList, 40);
    b.start_node(ExpressionWithTypeArguments, 40);
    b.token(Identifier, 40, 43);
    b.finish_node(43);
    b.finish_node(43);
    b.finish_node(43);
    b.finish_node(43);
    b.token(OpenBraceToken, 44, 45);
    b.finish_node(45);
    b.finish()
}

/// `class A { x: number; y: string; }` with both members in one list.
pub(crate) fn class_with_members() -> SyntaxTree {
    use SyntaxKind::*;

    let mut b = TreeBuilder::new("a.ts", "class A { x: number; y: string; }");
    b.start_node(ClassDeclaration, 0);
    b.token(ClassKeyword, 0, 5);
    b.token(Identifier, 6, 7);
    b.token(OpenBraceToken, 8, 9);
    b.start_node(SyntaxList, 10);
    b.start_node(PropertyDeclaration, 10);
    b.token(Identifier, 10, 11);
    b.token(ColonToken, 11, 12);
    b.token(NumberKeyword, 13, 19);
    b.token(SemicolonToken, 19, 20);
    b.finish_node(20);
    b.start_node(PropertyDeclaration, 21);
    b.token(Identifier, 21, 22);
    b.token(ColonToken, 22, 23);
    b.token(StringKeyword, 24, 30);
    b.token(SemicolonToken, 30, 31);
    b.finish_node(31);
    b.finish_node(31);
    b.token(CloseBraceToken, 32, 33);
    b.finish_node(33);
    b.finish()
}

/// A multi-line exported function with a doc comment and a body.
pub(crate) fn exported_function() -> SyntaxTree {
    use SyntaxKind::*;

    let text = "/**\n * Adds.\n */\nexport function add(\n    a: number,\n    b: number\n): number {\n    return a + b;\n}";
    let at = |needle: &str| text.find(needle).unwrap() as u32;

    let mut b = TreeBuilder::new("math.ts", text);
    b.start_node(FunctionDeclaration, 0);
    b.token(JSDocComment, 0, at("\nexport"));
    b.start_node(SyntaxList, at("export"));
    b.token(ExportKeyword, at("export"), at("export") + 6);
    b.finish_node(at("export") + 6);
    b.token(FunctionKeyword, at("function"), at("function") + 8);
    b.token(Identifier, at("add"), at("add") + 3);
    b.token(OpenParenToken, at("("), at("(") + 1);
    b.start_node(SyntaxList, at("a:"));
    b.start_node(Parameter, at("a:"));
    b.token(Identifier, at("a:"), at("a:") + 1);
    b.token(ColonToken, at("a:") + 1, at("a:") + 2);
    b.token(NumberKeyword, at("a:") + 3, at("a:") + 9);
    b.finish_node(at("a:") + 9);
    b.token(CommaToken, at(",\n"), at(",\n") + 1);
    b.start_node(Parameter, at("b:"));
    b.token(Identifier, at("b:"), at("b:") + 1);
    b.token(ColonToken, at("b:") + 1, at("b:") + 2);
    b.token(NumberKeyword, at("b:") + 3, at("b:") + 9);
    b.finish_node(at("b:") + 9);
    b.finish_node(at("b:") + 9);
    b.token(CloseParenToken, at(")"), at(")") + 1);
    b.token(ColonToken, at("):") + 1, at("):") + 2);
    b.token(NumberKeyword, at("): number") + 3, at("): number") + 9);
    b.start_node(Block, at(" {\n") + 1);
    b.token(OpenBraceToken, at(" {\n") + 1, at(" {\n") + 2);
    b.start_node(SyntaxList, at("return"));
    b.start_node(ReturnStatement, at("return"));
    b.token(ReturnKeyword, at("return"), at("return") + 6);
    b.finish_node(at("b;") + 2);
    b.finish_node(at("b;") + 2);
    b.token(CloseBraceToken, at("\n}") + 1, at("\n}") + 2);
    b.finish_node(at("\n}") + 2);
    b.finish_node(text.len() as u32);
    b.finish()
}
