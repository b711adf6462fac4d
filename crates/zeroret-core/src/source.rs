//! Source file and package inputs.

use std::path::{Path, PathBuf};

use tree_sitter::Tree;

/// One loaded Go source file, parsed at load time.
///
/// The tree is part of the input: re-parsing is never a query, so a
/// file's CST stays stable for the lifetime of the database and node
/// ids taken from it remain valid keys.
#[salsa::input(debug)]
pub struct SourceFile {
    #[returns(ref)]
    pub path: PathBuf,
    #[returns(deref)]
    pub text: String,
    #[returns(ref)]
    pub tree: Tree,
}

/// All files of one package directory, in path order.
#[salsa::input(debug)]
pub struct SourcePackage {
    #[returns(ref)]
    pub files: Vec<SourceFile>,
}

#[salsa::db]
pub trait Db: salsa::Database {
    /// Load (or reuse) the file at `path` as an input.
    fn load_file(
        &self,
        path: PathBuf,
    ) -> Result<SourceFile, Box<dyn std::error::Error + Send + Sync>>;

    /// Load every `.go` file directly inside `dir` as one package.
    fn load_package(
        &self,
        dir: &Path,
    ) -> Result<SourcePackage, Box<dyn std::error::Error + Send + Sync>>;
}
