//! Diagnostic messages emitted during analysis.

use crate::span::Span;

/// A diagnostic message (error or warning) with source location.
///
/// The message carries its own `path:line:` prefix because diagnostics
/// from package-level queries can point into any file of the package.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[salsa::accumulator]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub severity: DiagnosticSeverity,
    pub phase: AnalysisPhase,
}

/// Severity level of a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// Analysis phase where a diagnostic was emitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnalysisPhase {
    Parsing,
    TypeChecking,
}

impl std::fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "ERROR"),
            DiagnosticSeverity::Warning => write!(f, "WARNING"),
        }
    }
}
