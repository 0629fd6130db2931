//! AST pretty-printer
//!
//! Renders the tree as an indented outline, one node per line. Implemented
//! as an [`AstVisitor`] so it shares the dispatch contract with every other
//! tree operation.

use std::fmt::Write;

use crate::ast::visitor::{
    walk_block, walk_func_decl, walk_parameter, walk_parameter_list, walk_return_stmt,
    walk_signature, walk_source_file, AstVisitor,
};
use crate::ast::{
    Block, FuncDecl, Identifier, NumericLiteralExpr, Parameter, ParameterList, ReturnStmt,
    Signature, SourceFile, Type,
};

const DEFAULT_INDENTATION_SPACES: usize = 4;

/// Prints an AST as an indented outline.
pub struct AstPrinter {
    indentation_spaces: usize,
    indentation_level: usize,
    output: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::with_spaces(DEFAULT_INDENTATION_SPACES)
    }

    /// A printer indenting by `spaces` per tree level.
    pub fn with_spaces(spaces: usize) -> Self {
        Self {
            indentation_spaces: spaces,
            indentation_level: 0,
            output: String::new(),
        }
    }

    /// Renders `source_file` and returns the outline.
    pub fn print(mut self, source_file: &SourceFile) -> String {
        source_file.accept(&mut self);
        self.output
    }

    fn line(&mut self, text: &str) {
        let spaces = self.indentation_spaces * self.indentation_level;
        // Writing to a String cannot fail.
        let _ = writeln!(self.output, "{:spaces$}{}", "", text);
    }

    fn indented(&mut self, visit_children: impl FnOnce(&mut Self)) {
        self.indentation_level += 1;
        visit_children(self);
        self.indentation_level -= 1;
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for AstPrinter {
    fn visit_source_file(&mut self, source_file: &SourceFile) {
        self.line("source file:");
        self.indented(|printer| walk_source_file(printer, source_file));
    }

    fn visit_func_decl(&mut self, func_decl: &FuncDecl) {
        self.line("func decl:");
        self.indented(|printer| walk_func_decl(printer, func_decl));
    }

    fn visit_signature(&mut self, signature: &Signature) {
        self.line("signature:");
        self.indented(|printer| walk_signature(printer, signature));
    }

    fn visit_parameter_list(&mut self, parameter_list: &ParameterList) {
        self.line("parameters:");
        self.indented(|printer| walk_parameter_list(printer, parameter_list));
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        self.line("parameter:");
        self.indented(|printer| walk_parameter(printer, parameter));
    }

    fn visit_block(&mut self, block: &Block) {
        self.line("block:");
        self.indented(|printer| walk_block(printer, block));
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) {
        self.line("return:");
        self.indented(|printer| walk_return_stmt(printer, return_stmt));
    }

    fn visit_numeric_literal_expr(&mut self, expr: &NumericLiteralExpr) {
        let text = format!("value: {}", expr.value);
        self.line(&text);
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        let text = format!("identifier: {}", identifier.name);
        self.line(&text);
    }

    fn visit_type(&mut self, ty: &Type) {
        let text = format!("return type: {}", ty.name);
        self.line(&text);
    }
}
