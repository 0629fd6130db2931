//! Diagnostics
//!
//! Every problem found while compiling a file is recorded as a
//! [`Diagnostic`] in a [`DiagnosticEngine`](engine::DiagnosticEngine). A
//! diagnostic is either a recoverable [`Error`] tagged with the phase that
//! raised it (lexer, parser, or codegen) or an unrecoverable [`FatalError`]
//! raised before the phases run at all.
//!
//! Messages are formatted once at construction and cached, so
//! [`Diagnostic::message`] is a pure accessor and the emitted text is stable
//! across reads.

pub mod engine;

use std::fmt;
use std::fmt::Write;
use std::io;
use std::path::Path;

use crate::basic::SourceLocation;
use crate::lexer::diagnostics::LexerErrorKind;
use crate::parser::diagnostics::ParserErrorKind;

/// The two kinds of diagnostic the compiler generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Error,
    Fatal,
}

/// A problem reported during the compilation of a file.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    Error(Error),
    Fatal(FatalError),
}

impl Diagnostic {
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::Error(_) => DiagnosticKind::Error,
            Diagnostic::Fatal(_) => DiagnosticKind::Fatal,
        }
    }

    /// The cached message describing this diagnostic.
    pub fn message(&self) -> &str {
        match self {
            Diagnostic::Error(error) => error.message(),
            Diagnostic::Fatal(fatal_error) => fatal_error.message(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The phase-specific kind of a recoverable [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexer(LexerErrorKind),
    Parser(ParserErrorKind),
    Codegen(CodegenErrorKind),
}

/// A recoverable error with a location and a construction-time-formatted
/// message.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    location: SourceLocation,
    message: String,
}

impl Error {
    /// Builds the error and formats its message once. `found` is the
    /// offending source text the error is reported against.
    pub fn new(kind: ErrorKind, location: SourceLocation, found: &str) -> Self {
        let mut message = format!("error @ {}:", location);

        // The write cannot fail on a String.
        let _ = match kind {
            ErrorKind::Lexer(lexer_error) => {
                write!(message, " {} '{}'", lexer_error.description(), found)
            }
            ErrorKind::Parser(parser_error) => {
                write!(message, " {}, found '{}'", parser_error.description(), found)
            }
            ErrorKind::Codegen(codegen_error) => {
                write!(message, " {}", codegen_error.description())
            }
        };

        Self {
            kind,
            location,
            message,
        }
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

/// The kinds of error the (external) code generator reports through the
/// same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    NoReturnStatement,
    NoReturnExpression,
}

impl CodegenErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            CodegenErrorKind::NoReturnStatement => "no return statement",
            CodegenErrorKind::NoReturnExpression => "no return expression",
        }
    }
}

/// The kinds of unrecoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalErrorKind {
    FileReadFail,
}

impl FatalErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            FatalErrorKind::FileReadFail => "failed to read file",
        }
    }
}

/// An unrecoverable error, raised before lexing starts. Compilation of the
/// file aborts immediately.
#[derive(Debug, Clone)]
pub struct FatalError {
    kind: FatalErrorKind,
    message: String,
}

impl FatalError {
    /// A fatal error for a source file that could not be read.
    pub fn file_read_fail(path: &Path, cause: &io::Error) -> Self {
        let kind = FatalErrorKind::FileReadFail;
        let message = format!(
            "error: {} '{}': {}",
            kind.description(),
            path.display(),
            cause
        );

        Self { kind, message }
    }

    pub fn kind(&self) -> FatalErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FatalError {}
