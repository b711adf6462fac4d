//! Resolving a source line to its innermost enclosing function.

use tree_sitter::{Node, Tree};

use crate::ast::ResultField;
use crate::lower::lower_result_clause;

const FUNCTION_LIKE: [&str; 3] = [
    "function_declaration",
    "method_declaration",
    "func_literal",
];

/// Find the innermost function-like node whose inclusive line span
/// contains `line` (1-based) and return its lowered result fields.
///
/// `Some(vec![])` means a function with no declared results was found;
/// `None` means the line is not inside any function at all. Callers
/// must keep these outcomes apart.
pub fn enclosing_result_fields(tree: &Tree, text: &str, line: u32) -> Option<Vec<ResultField>> {
    let row = (line.checked_sub(1)?) as usize;
    let mut found = None;
    visit(tree.root_node(), text, row, &mut found);
    found
}

/// Descend only through nodes whose span contains the row. A nested
/// function is visited after its enclosing one, so overwriting `found`
/// on every function-like visit leaves the innermost match.
fn visit(node: Node, text: &str, row: usize, found: &mut Option<Vec<ResultField>>) {
    if row < node.start_position().row || row > node.end_position().row {
        return;
    }
    if FUNCTION_LIKE.contains(&node.kind()) {
        *found = Some(lower_result_clause(node, text));
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(child, text, row, found);
    }
}
