//! Go source parsing and syntax validation.

use salsa::Accumulator;
use tree_sitter::{Node, Parser, Tree};
use zeroret_core::{AnalysisPhase, Diagnostic, DiagnosticSeverity, SourceFile, Span};

/// A tree-sitter parser configured with the Go grammar.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(GoParser { parser })
    }

    /// Parse one Go file. `None` only when the parser itself fails;
    /// syntactically broken input still yields a tree with error nodes,
    /// which `check_syntax` reports.
    pub fn parse(&mut self, text: &str) -> Option<Tree> {
        self.parser.parse(text, None)
    }
}

/// Validate a file's tree, accumulating one `Parsing` diagnostic per
/// error or missing node. Returns whether the file is syntactically
/// clean.
#[salsa::tracked]
pub fn check_syntax(db: &dyn salsa::Database, file: SourceFile) -> bool {
    let tree = file.tree(db);
    let root = tree.root_node();
    if !root.has_error() {
        return true;
    }
    let path = file.path(db).display().to_string();
    report_error_nodes(db, root, &path);
    false
}

fn report_error_nodes(db: &dyn salsa::Database, node: Node, path: &str) {
    let message = if node.is_error() {
        Some("syntax error".to_string())
    } else if node.is_missing() {
        Some(format!("missing {}", node.kind()))
    } else {
        None
    };
    if let Some(message) = message {
        let line = node.start_position().row + 1;
        Diagnostic {
            message: format!("{}:{}: {}", path, line, message),
            span: Span::from_node(&node),
            severity: DiagnosticSeverity::Error,
            phase: AnalysisPhase::Parsing,
        }
        .accumulate(db);
        // An error node's children are parser guesses; one report is enough.
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            report_error_nodes(db, child, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(db: &dyn salsa::Database, text: &str) -> SourceFile {
        let tree = GoParser::new().unwrap().parse(text).unwrap();
        SourceFile::new(db, "test.go".into(), text.to_string(), tree)
    }

    #[test]
    fn clean_file_checks_out() {
        let db = salsa::DatabaseImpl::default();
        let file = load(&db, "package main\n\nfunc f() error {\n\treturn nil\n}\n");
        assert!(check_syntax(&db, file));
        assert!(check_syntax::accumulated::<Diagnostic>(&db, file).is_empty());
    }

    #[test]
    fn broken_file_reports_parsing_diagnostics() {
        let db = salsa::DatabaseImpl::default();
        let file = load(&db, "package main\n\nfunc f( {\n");
        assert!(!check_syntax(&db, file));
        let diags = check_syntax::accumulated::<Diagnostic>(&db, file);
        assert!(!diags.is_empty());
        assert!(diags.iter().all(|d| d.phase == AnalysisPhase::Parsing));
        assert!(diags[0].message.starts_with("test.go:"));
    }
}
