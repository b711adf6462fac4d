//! Go syntax layer: parsing, CST lowering, and position lookup.
//!
//! This crate owns everything that touches the tree-sitter CST. The
//! lowered forms (`TypeExpr`, `ResultField`, `TypeDecl`) are plain data
//! with stable `NodeId`s, so the analysis layer never needs to walk the
//! tree itself.
pub mod ast;
pub mod locate;
pub mod lower;
pub mod parser;

pub use ast::{ChanDir, NodeId, ResultField, TypeDecl, TypeExpr, TypeExprKind};
pub use locate::enclosing_result_fields;
pub use lower::file_type_decls;
pub use parser::{GoParser, check_syntax};
