//! zeroret: locate the Go function enclosing a source position and
//! synthesize the zero-value expressions for its result list.
pub mod database;
pub mod pipeline;

pub use database::ZeroretDatabaseImpl;
pub use pipeline::{Failure, Outcome, analyze};
