//! Semantic analysis: type environment construction, underlying-type
//! resolution, and zero-value synthesis.
pub mod check;
pub mod env;
pub mod errors;
pub mod resolve;
pub mod ty;
pub mod zero;

pub use check::{TypeBindings, check_result_fields, check_type_expr};
pub use env::{Importer, NullImporter, TypeEnv, package_type_env};
pub use errors::{AnalysisError, AnalysisErrorKind, AnalysisResult};
pub use resolve::{ResolvedType, resolve};
pub use ty::{MethodElem, StructField, Ty, TyKind};
pub use zero::{ShapeCategory, early_return_snippet, zero_value};
