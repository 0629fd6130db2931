//! AST node model
//!
//! The syntax tree is a strict ownership tree rooted at a [`SourceFile`]:
//! every node exclusively owns its children, there are no back-pointers and
//! no sharing, and dropping a parent drops the whole subtree. Every node
//! carries a valid [`SourceRange`].
//!
//! Operations over the tree (printing, code generation) are written as
//! [`visitor::AstVisitor`] implementations rather than methods on the
//! nodes, so new operations can be added without touching the node
//! definitions.

pub mod printer;
pub mod visitor;

use crate::basic::SourceRange;

/// The root of the AST: an ordered sequence of declarations.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub decls: Vec<Decl>,
    pub range: SourceRange,
}

/// A top-level declaration.
#[derive(Debug, Clone)]
pub enum Decl {
    Func(FuncDecl),
}

impl Decl {
    pub fn range(&self) -> SourceRange {
        match self {
            Decl::Func(func_decl) => func_decl.range,
        }
    }
}

/// A function declaration: `func name() -> int { ... }`.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub signature: Signature,
    pub body: Block,
    pub range: SourceRange,
}

/// A function signature: name, parameter list, and return type.
#[derive(Debug, Clone)]
pub struct Signature {
    pub name: Identifier,
    pub parameters: ParameterList,
    pub return_type: Type,
    pub range: SourceRange,
}

/// A parenthesized list of parameters. The grammar currently only accepts
/// an empty list.
#[derive(Debug, Clone)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>,
    pub range: SourceRange,
}

/// A single named parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: Identifier,
    pub range: SourceRange,
}

/// A statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Block),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn range(&self) -> SourceRange {
        match self {
            Stmt::Block(block) => block.range,
            Stmt::Return(return_stmt) => return_stmt.range,
        }
    }
}

/// A braced, ordered sequence of statements.
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub range: SourceRange,
}

/// A return statement: `return <expr>;`.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub expr: Expr,
    pub range: SourceRange,
}

/// An expression.
#[derive(Debug, Clone)]
pub enum Expr {
    NumericLiteral(NumericLiteralExpr),
}

impl Expr {
    pub fn range(&self) -> SourceRange {
        match self {
            Expr::NumericLiteral(literal) => literal.range,
        }
    }
}

/// An unsigned integer literal.
#[derive(Debug, Clone)]
pub struct NumericLiteralExpr {
    pub value: i64,
    pub range: SourceRange,
}

/// A name leaf: the spelling of an identifier plus where it appeared.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub range: SourceRange,
}

/// A type name leaf.
#[derive(Debug, Clone)]
pub struct Type {
    pub name: String,
    pub range: SourceRange,
}
