//! Shared analysis infrastructure: source inputs, spans, diagnostics.
pub mod diagnostic;
pub mod source;
pub mod span;

pub use diagnostic::{AnalysisPhase, Diagnostic, DiagnosticSeverity};
pub use source::{Db, SourceFile, SourcePackage};
pub use span::{Span, line_at};
