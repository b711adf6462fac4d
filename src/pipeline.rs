//! The analysis pipeline for one (file, line) query.
//!
//! Stages, each aborting the run on failure:
//!
//! ```text
//! SourcePackage
//!     │
//!     ▼
//! check_syntax (per file) ──► parse diagnostics? abort
//!     │
//!     ▼
//! package_type_env ──► type diagnostics? abort
//!     │
//!     ▼
//! enclosing_result_fields ──► None? "not in a function"
//!     │
//!     ▼
//! check_result_fields ──► TypeBindings
//!     │
//!     ▼
//! resolve + zero_value (per field) ──► ordered values
//! ```

use derive_more::Display;
use zeroret_analysis::{
    AnalysisError, NullImporter, check_result_fields, package_type_env, resolve, zero_value,
};
use zeroret_core::{Diagnostic, DiagnosticSeverity, SourceFile, SourcePackage};
use zeroret_syntax::{check_syntax, enclosing_result_fields};

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The line is not inside any function-like node. A clean result,
    /// kept distinct from a function with an empty result list, which
    /// is `Values(vec![])`.
    NotInFunction,
    /// One zero-value expression per declared result, in order.
    Values(Vec<String>),
}

/// A fatal failure together with the diagnostics that explain it.
#[derive(Debug, Display)]
#[display("{error}")]
pub struct Failure {
    pub error: AnalysisError,
    pub diagnostics: Vec<Diagnostic>,
}

impl std::error::Error for Failure {}

impl From<AnalysisError> for Failure {
    fn from(error: AnalysisError) -> Self {
        Failure {
            error,
            diagnostics: Vec::new(),
        }
    }
}

/// Run every stage against one package and target position.
pub fn analyze(
    db: &dyn salsa::Database,
    pkg: SourcePackage,
    file: SourceFile,
    line: u32,
) -> Result<Outcome, Failure> {
    let mut parse_diags = Vec::new();
    for f in pkg.files(db) {
        if !check_syntax(db, *f) {
            parse_diags.extend(
                check_syntax::accumulated::<Diagnostic>(db, *f)
                    .into_iter()
                    .cloned(),
            );
        }
    }
    if !parse_diags.is_empty() {
        let dir = file
            .path(db)
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        return Err(Failure {
            error: AnalysisError::parse_failure(dir),
            diagnostics: parse_diags,
        });
    }

    let env = package_type_env(db, pkg);
    let type_diags: Vec<Diagnostic> = package_type_env::accumulated::<Diagnostic>(db, pkg)
        .into_iter()
        .cloned()
        .collect();
    let errors = type_diags
        .iter()
        .filter(|d| d.severity == DiagnosticSeverity::Error)
        .count();
    if errors > 0 {
        return Err(Failure {
            error: AnalysisError::type_check_failure(errors),
            diagnostics: type_diags,
        });
    }

    let Some(fields) = enclosing_result_fields(file.tree(db), file.text(db), line) else {
        return Ok(Outcome::NotInFunction);
    };

    let bindings = check_result_fields(db, env, &NullImporter, &fields)?;
    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        let resolved = resolve(db, &bindings, &field.ty);
        values.push(zero_value(&resolved)?);
    }
    Ok(Outcome::Values(values))
}
