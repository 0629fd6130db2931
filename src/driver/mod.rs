//! Compilation driver
//!
//! Runs the front-end pipeline for one file: read, lex, parse. Each phase
//! reports into the same [`DiagnosticEngine`]; the driver consults it
//! between phases and stops at the first phase boundary with problems.

use std::fs;
use std::path::Path;

use crate::ast::SourceFile;
use crate::diagnostics::engine::DiagnosticEngine;
use crate::diagnostics::{Diagnostic, FatalError};
use crate::lexer::Lexer;
use crate::parser::Parser;

/// The outcome of compiling one file: the AST (when parsing ran and
/// produced one) together with everything that was diagnosed along the way.
///
/// A `Some` AST with a non-empty engine is normal: the parser recovers from
/// malformed constructs and still returns the well-formed remainder.
pub struct Compilation {
    pub source_file: Option<SourceFile>,
    pub diagnostics: DiagnosticEngine,
}

impl Compilation {
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.has_problems()
    }
}

/// Compiles source text already in memory.
///
/// Lexing always runs to completion. If it reported any problems, parsing
/// is skipped: the token buffer is complete but the missing tokens would
/// only produce misleading parse errors.
pub fn compile_source(src: &str) -> Compilation {
    let mut diagnostics = DiagnosticEngine::new();

    let tokens = Lexer::new(src).tokenize(&mut diagnostics);
    if diagnostics.has_problems() {
        return Compilation {
            source_file: None,
            diagnostics,
        };
    }

    let source_file = Parser::new(src, &tokens, &mut diagnostics).parse_source_file();
    Compilation {
        source_file: Some(source_file),
        diagnostics,
    }
}

/// Compiles the file at `path`. A failed read is a fatal error: it is
/// recorded and compilation aborts before lexing.
pub fn compile_file(path: &Path) -> Compilation {
    match fs::read_to_string(path) {
        Ok(src) => compile_source(&src),
        Err(cause) => {
            let mut diagnostics = DiagnosticEngine::new();
            diagnostics.diagnose(Diagnostic::Fatal(FatalError::file_read_fail(path, &cause)));

            Compilation {
                source_file: None,
                diagnostics,
            }
        }
    }
}
