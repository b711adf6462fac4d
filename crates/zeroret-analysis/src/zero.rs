//! Zero-value synthesis for resolved result types.

use crate::errors::{AnalysisError, AnalysisResult};
use crate::resolve::ResolvedType;

/// The closed set of type shapes the synthesizer recognizes, derived
/// once from a `ResolvedType`. Everything else is `Other` and fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeCategory {
    Pointer,
    Map,
    EmptyInterface,
    AnonymousStruct,
    ErrorInterface,
    Other,
}

impl ShapeCategory {
    /// Categories are tested in order; only the literal `interface{}`
    /// is nil-able, so an `error` result falls through to the
    /// `ErrorInterface` rule instead of being swallowed by the
    /// interface prefix.
    pub fn of(resolved: &ResolvedType) -> ShapeCategory {
        let canonical = resolved.canonical.as_str();
        if canonical.starts_with('*') {
            ShapeCategory::Pointer
        } else if canonical.starts_with("map[") {
            ShapeCategory::Map
        } else if canonical == "interface{}" {
            ShapeCategory::EmptyInterface
        } else if canonical.starts_with("struct{") {
            ShapeCategory::AnonymousStruct
        } else if resolved.declared_name.as_deref() == Some("error") {
            ShapeCategory::ErrorInterface
        } else {
            ShapeCategory::Other
        }
    }
}

/// The expression for a resolved type's zero value.
///
/// Deliberately narrow: numeric, string, bool, array, channel, and
/// function shapes fail rather than guess, since a wrong value inside
/// a generated `return` would compile and silently misbehave.
pub fn zero_value(resolved: &ResolvedType) -> AnalysisResult<String> {
    match ShapeCategory::of(resolved) {
        ShapeCategory::Pointer | ShapeCategory::Map | ShapeCategory::EmptyInterface => {
            Ok("nil".to_string())
        }
        ShapeCategory::AnonymousStruct => match &resolved.declared_name {
            Some(name) => Ok(format!("{}{{}}", name)),
            None => Err(AnalysisError::unnamed_struct_result(&resolved.canonical)),
        },
        ShapeCategory::ErrorInterface => Ok("err".to_string()),
        ShapeCategory::Other => Err(AnalysisError::unsupported_type_kind(&resolved.canonical)),
    }
}

/// Render the early-return block around the joined zero values:
///
/// ```text
/// if err != nil {
///     return nil, err
/// }
/// ```
pub fn early_return_snippet(values: &[String]) -> String {
    if values.is_empty() {
        "if err != nil {\n\treturn\n}".to_string()
    } else {
        format!("if err != nil {{\n\treturn {}\n}}", values.join(", "))
    }
}
