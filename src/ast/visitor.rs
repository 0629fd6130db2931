//! Visitor dispatch over the AST
//!
//! [`AstVisitor`] has one operation per concrete node kind. `accept` on a
//! node dispatches to the operation matching its kind, so an operation
//! never has to re-derive the shape of the tree. The default trait methods
//! walk a node's children in declaration order (pre-order); an
//! implementation overrides only the nodes it cares about and can call the
//! free `walk_*` functions to keep the canonical traversal underneath.

use crate::ast::{
    Block, Decl, Expr, FuncDecl, Identifier, NumericLiteralExpr, Parameter, ParameterList,
    ReturnStmt, Signature, SourceFile, Stmt, Type,
};

/// An operation over the AST, implemented once per concrete node kind.
pub trait AstVisitor {
    fn visit_source_file(&mut self, source_file: &SourceFile) {
        walk_source_file(self, source_file);
    }

    fn visit_func_decl(&mut self, func_decl: &FuncDecl) {
        walk_func_decl(self, func_decl);
    }

    fn visit_signature(&mut self, signature: &Signature) {
        walk_signature(self, signature);
    }

    fn visit_parameter_list(&mut self, parameter_list: &ParameterList) {
        walk_parameter_list(self, parameter_list);
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        walk_parameter(self, parameter);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) {
        walk_return_stmt(self, return_stmt);
    }

    fn visit_numeric_literal_expr(&mut self, _expr: &NumericLiteralExpr) {}

    fn visit_identifier(&mut self, _identifier: &Identifier) {}

    fn visit_type(&mut self, _ty: &Type) {}
}

impl SourceFile {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_source_file(self);
    }
}

impl Decl {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Decl::Func(func_decl) => visitor.visit_func_decl(func_decl),
        }
    }
}

impl Stmt {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Stmt::Block(block) => visitor.visit_block(block),
            Stmt::Return(return_stmt) => visitor.visit_return_stmt(return_stmt),
        }
    }
}

impl Expr {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Expr::NumericLiteral(literal) => visitor.visit_numeric_literal_expr(literal),
        }
    }
}

pub fn walk_source_file<V: AstVisitor + ?Sized>(visitor: &mut V, source_file: &SourceFile) {
    for decl in &source_file.decls {
        decl.accept(visitor);
    }
}

pub fn walk_func_decl<V: AstVisitor + ?Sized>(visitor: &mut V, func_decl: &FuncDecl) {
    visitor.visit_signature(&func_decl.signature);
    visitor.visit_block(&func_decl.body);
}

pub fn walk_signature<V: AstVisitor + ?Sized>(visitor: &mut V, signature: &Signature) {
    visitor.visit_identifier(&signature.name);
    visitor.visit_parameter_list(&signature.parameters);
    visitor.visit_type(&signature.return_type);
}

pub fn walk_parameter_list<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    parameter_list: &ParameterList,
) {
    for parameter in &parameter_list.parameters {
        visitor.visit_parameter(parameter);
    }
}

pub fn walk_parameter<V: AstVisitor + ?Sized>(visitor: &mut V, parameter: &Parameter) {
    visitor.visit_identifier(&parameter.name);
}

pub fn walk_block<V: AstVisitor + ?Sized>(visitor: &mut V, block: &Block) {
    for stmt in &block.stmts {
        stmt.accept(visitor);
    }
}

pub fn walk_return_stmt<V: AstVisitor + ?Sized>(visitor: &mut V, return_stmt: &ReturnStmt) {
    return_stmt.expr.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::SourceRange;

    /// Records the order in which node kinds are visited.
    #[derive(Default)]
    struct TraceVisitor {
        trace: Vec<&'static str>,
    }

    impl AstVisitor for TraceVisitor {
        fn visit_source_file(&mut self, source_file: &SourceFile) {
            self.trace.push("source_file");
            walk_source_file(self, source_file);
        }

        fn visit_func_decl(&mut self, func_decl: &FuncDecl) {
            self.trace.push("func_decl");
            walk_func_decl(self, func_decl);
        }

        fn visit_signature(&mut self, signature: &Signature) {
            self.trace.push("signature");
            walk_signature(self, signature);
        }

        fn visit_parameter_list(&mut self, parameter_list: &ParameterList) {
            self.trace.push("parameter_list");
            walk_parameter_list(self, parameter_list);
        }

        fn visit_block(&mut self, block: &Block) {
            self.trace.push("block");
            walk_block(self, block);
        }

        fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) {
            self.trace.push("return_stmt");
            walk_return_stmt(self, return_stmt);
        }

        fn visit_numeric_literal_expr(&mut self, _expr: &NumericLiteralExpr) {
            self.trace.push("numeric_literal_expr");
        }

        fn visit_identifier(&mut self, _identifier: &Identifier) {
            self.trace.push("identifier");
        }

        fn visit_type(&mut self, _ty: &Type) {
            self.trace.push("type");
        }
    }

    fn sample_source_file() -> SourceFile {
        let range = SourceRange::default();
        SourceFile {
            decls: vec![Decl::Func(FuncDecl {
                signature: Signature {
                    name: Identifier {
                        name: "main".to_string(),
                        range,
                    },
                    parameters: ParameterList {
                        parameters: Vec::new(),
                        range,
                    },
                    return_type: Type {
                        name: "int".to_string(),
                        range,
                    },
                    range,
                },
                body: Block {
                    stmts: vec![Stmt::Return(ReturnStmt {
                        expr: Expr::NumericLiteral(NumericLiteralExpr { value: 0, range }),
                        range,
                    })],
                    range,
                },
                range,
            })],
            range,
        }
    }

    #[test]
    fn test_traversal_is_preorder_in_declaration_order() {
        let source_file = sample_source_file();
        let mut visitor = TraceVisitor::default();
        source_file.accept(&mut visitor);

        assert_eq!(
            visitor.trace,
            vec![
                "source_file",
                "func_decl",
                "signature",
                "identifier",
                "parameter_list",
                "type",
                "block",
                "return_stmt",
                "numeric_literal_expr",
            ]
        );
    }

    #[test]
    fn test_default_methods_walk_without_overrides() {
        // A visitor that overrides nothing still traverses the whole tree.
        struct CountLiterals(u32);

        impl AstVisitor for CountLiterals {
            fn visit_numeric_literal_expr(&mut self, _expr: &NumericLiteralExpr) {
                self.0 += 1;
            }
        }

        let source_file = sample_source_file();
        let mut visitor = CountLiterals(0);
        source_file.accept(&mut visitor);

        assert_eq!(visitor.0, 1);
    }
}
