//! Shared helpers for integration tests: build a Go package in a temp
//! directory and run the full pipeline against one position.

use zeroret::pipeline::{Failure, Outcome, analyze};
use zeroret::ZeroretDatabaseImpl;
use zeroret_core::Db;

/// Write `files` into a fresh temp dir and analyze `(target, line)`.
pub fn run_query(
    files: &[(&str, &str)],
    target: &str,
    line: u32,
) -> Result<Outcome, Failure> {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, text) in files {
        std::fs::write(dir.path().join(name), text).expect("write fixture");
    }
    let db = ZeroretDatabaseImpl::default();
    let pkg = db.load_package(dir.path()).expect("load package");
    let target_path = dir.path().join(target).canonicalize().expect("target path");
    let file = pkg
        .files(&db)
        .iter()
        .copied()
        .find(|f| f.path(&db) == &target_path)
        .expect("target file in package");
    analyze(&db, pkg, file, line)
}

/// Shorthand for a single-file package.
pub fn run_single(text: &str, line: u32) -> Result<Outcome, Failure> {
    run_query(&[("main.go", text)], "main.go", line)
}
