//! Diagnostic collection and emission
//!
//! One [`DiagnosticEngine`] is created per compiled file and passed by
//! mutable reference through lexing, parsing, and code generation. Phases
//! only ever append; the collection is read, never cleared, between phases
//! to decide whether compilation continues.

use std::io;
use std::io::Write;

use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Collects and emits the diagnostics of one file's compilation.
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic. O(1); insertion order is emission order.
    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any diagnostic has been recorded. This is the gate
    /// consulted between phases.
    pub fn has_problems(&self) -> bool {
        self.count() != 0
    }

    /// The total number of recorded diagnostics.
    pub fn count(&self) -> u32 {
        self.diagnostics.len() as u32
    }

    /// The number of recorded recoverable errors.
    pub fn count_errors(&self) -> u32 {
        self.count_of_kind(DiagnosticKind::Error)
    }

    /// The number of recorded fatal errors.
    pub fn count_fatal_errors(&self) -> u32 {
        self.count_of_kind(DiagnosticKind::Fatal)
    }

    /// The diagnostic at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.diagnostics.get(index)
    }

    /// Writes every diagnostic message in insertion order, followed by the
    /// summary line.
    pub fn emit_diagnostics<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{}", diagnostic.message())?;
        }

        self.emit_diagnostic_stats(out)
    }

    /// Writes the pluralized count summary for the recorded diagnostics.
    pub fn emit_diagnostic_stats<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let errors = self.count_errors();
        let fatal_errors = self.count_fatal_errors();

        if errors > 0 {
            if errors == 1 {
                writeln!(out, "generated {} error", errors)?;
            } else {
                writeln!(out, "generated {} errors", errors)?;
            }
        } else if fatal_errors > 0 {
            if fatal_errors == 1 {
                writeln!(out, "generated {} fatal error", fatal_errors)?;
            } else {
                writeln!(out, "generated {} fatal errors", fatal_errors)?;
            }
        }

        Ok(())
    }

    fn count_of_kind(&self, kind: DiagnosticKind) -> u32 {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.diagnostic_kind() == kind)
            .count() as u32
    }
}
