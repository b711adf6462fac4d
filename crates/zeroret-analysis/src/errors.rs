//! Error types for the analysis layer.

use derive_more::{Display, From};

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Display, Debug, From)]
#[display("{kind}")]
pub struct AnalysisError {
    #[from]
    kind: Box<AnalysisErrorKind>,
}

impl<E> From<E> for AnalysisError
where
    AnalysisErrorKind: From<E>,
{
    fn from(error: E) -> Self {
        AnalysisError {
            kind: Box::new(AnalysisErrorKind::from(error)),
        }
    }
}

impl AnalysisError {
    pub fn kind(&self) -> &AnalysisErrorKind {
        &self.kind
    }

    pub fn parse_failure(path: impl std::fmt::Display) -> Self {
        AnalysisErrorKind::ParseFailure(path.to_string()).into()
    }

    pub fn type_check_failure(count: usize) -> Self {
        AnalysisErrorKind::TypeCheckFailure(count).into()
    }

    pub fn undeclared_type(name: impl Into<String>) -> Self {
        AnalysisErrorKind::UndeclaredType(name.into()).into()
    }

    pub fn unresolved_import(package: impl Into<String>, name: impl Into<String>) -> Self {
        AnalysisErrorKind::UnresolvedImport(package.into(), name.into()).into()
    }

    pub fn generic_type(name: impl Into<String>) -> Self {
        AnalysisErrorKind::GenericType(name.into()).into()
    }

    pub fn cyclic_type(name: impl Into<String>) -> Self {
        AnalysisErrorKind::CyclicType(name.into()).into()
    }

    pub fn duplicate_type(name: impl Into<String>) -> Self {
        AnalysisErrorKind::DuplicateType(name.into()).into()
    }

    pub fn unsupported_type_syntax(text: impl Into<String>) -> Self {
        AnalysisErrorKind::UnsupportedTypeSyntax(text.into()).into()
    }

    pub fn unsupported_type_kind(canonical: impl Into<String>) -> Self {
        AnalysisErrorKind::UnsupportedTypeKind(canonical.into()).into()
    }

    pub fn unnamed_struct_result(canonical: impl Into<String>) -> Self {
        AnalysisErrorKind::UnnamedStructResult(canonical.into()).into()
    }
}

#[derive(Display, Debug)]
pub enum AnalysisErrorKind {
    #[display("{_0}: package contains syntax errors")]
    ParseFailure(String),

    #[display("package does not type-check ({_0} error(s))")]
    TypeCheckFailure(usize),

    #[display("undeclared type name: {_0}")]
    UndeclaredType(String),

    #[display("cannot resolve {_0}.{_1}: no package data for {_0}")]
    UnresolvedImport(String, String),

    #[display("generic type {_0} is not supported")]
    GenericType(String),

    #[display("cyclic type declaration: {_0}")]
    CyclicType(String),

    #[display("duplicate type declaration: {_0}")]
    DuplicateType(String),

    #[display("unsupported type syntax: {_0}")]
    UnsupportedTypeSyntax(String),

    #[display("cannot find zero value of {_0}")]
    UnsupportedTypeKind(String),

    #[display("anonymous struct result {_0} has no declared name for a composite literal")]
    UnnamedStructResult(String),
}

impl std::error::Error for AnalysisError {}
