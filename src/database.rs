//! Concrete analysis database for one CLI invocation.

use std::path::{Path, PathBuf};

use dashmap::{DashMap, Entry};
use zeroret_core::{Db, SourceFile, SourcePackage};
use zeroret_syntax::GoParser;

type LoadError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Default, Clone)]
#[salsa::db]
pub struct ZeroretDatabaseImpl {
    storage: salsa::Storage<Self>,
    /// Loaded files keyed by canonical path, so one file is read and
    /// parsed at most once per run.
    files: DashMap<PathBuf, SourceFile>,
}

#[salsa::db]
impl salsa::Database for ZeroretDatabaseImpl {}

#[salsa::db]
impl Db for ZeroretDatabaseImpl {
    fn load_file(&self, path: PathBuf) -> Result<SourceFile, LoadError> {
        let path = path.canonicalize()?;
        match self.files.entry(path.clone()) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let text = std::fs::read_to_string(&path)?;
                let tree = GoParser::new()?
                    .parse(&text)
                    .ok_or("tree-sitter produced no tree")?;
                let file = SourceFile::new(self, path, text, tree);
                Ok(*entry.insert(file))
            }
        }
    }

    fn load_package(&self, dir: &Path) -> Result<SourcePackage, LoadError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "go"))
            .collect();
        paths.sort();
        if paths.is_empty() {
            return Err(format!("no .go files in {}", dir.display()).into());
        }
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(self.load_file(path)?);
        }
        Ok(SourcePackage::new(self, files))
    }
}
