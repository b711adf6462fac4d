//! zeroret CLI entry point.

mod cli;

use clap::Parser;
use cli::Cli;
use salsa::Database;
use zeroret::pipeline::{Outcome, analyze};
use zeroret::ZeroretDatabaseImpl;
use zeroret_analysis::early_return_snippet;
use zeroret_core::{Db, DiagnosticSeverity};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let file_path = match cli.file.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {}: {}", cli.file.display(), e);
            return 1;
        }
    };
    let Some(parent) = file_path.parent() else {
        eprintln!("error: {} has no parent directory", file_path.display());
        return 1;
    };
    let pkg_dir = match cli.pkg.as_deref().unwrap_or(parent).canonicalize() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };
    if parent != pkg_dir {
        eprintln!(
            "error: {} does not live in package directory {}",
            file_path.display(),
            pkg_dir.display()
        );
        return 1;
    }

    ZeroretDatabaseImpl::default().attach(|db| {
        let pkg = match db.load_package(&pkg_dir) {
            Ok(pkg) => pkg,
            Err(e) => {
                eprintln!("error: {}", e);
                return 1;
            }
        };
        let Some(file) = pkg
            .files(db)
            .iter()
            .copied()
            .find(|f| f.path(db) == &file_path)
        else {
            eprintln!(
                "error: {} is not part of package {}",
                file_path.display(),
                pkg_dir.display()
            );
            return 1;
        };

        match analyze(db, pkg, file, cli.line) {
            Ok(Outcome::NotInFunction) => {
                println!("not in a function");
                0
            }
            Ok(Outcome::Values(values)) => {
                if cli.snippet {
                    println!("{}", early_return_snippet(&values));
                } else {
                    for value in &values {
                        println!("{value}");
                    }
                }
                0
            }
            Err(failure) => {
                for diag in &failure.diagnostics {
                    let tag = match diag.severity {
                        DiagnosticSeverity::Error => "error",
                        DiagnosticSeverity::Warning => "warning",
                    };
                    eprintln!("{}: {}", tag, diag.message);
                }
                eprintln!("error: {}", failure.error);
                1
            }
        }
    })
}
