//! Walking the named→underlying chain to a fixed point.

use zeroret_syntax::TypeExpr;

use crate::check::TypeBindings;
use crate::ty::Ty;

/// A result type resolved to its terminal structural form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedType {
    /// Canonical form of the fixed point of the underlying relation.
    pub canonical: String,
    /// The identifier text when the original expression was a bare
    /// name; the zero-value rule for named struct types needs it.
    pub declared_name: Option<String>,
}

/// Resolve a checked type expression: strip naming layers until the
/// underlying form's canonical rendering stops changing.
///
/// The checker rejects cyclic named chains before bindings exist, so
/// the walk always terminates without a cycle guard.
pub fn resolve<'db>(
    db: &'db dyn salsa::Database,
    bindings: &TypeBindings<'db>,
    expr: &TypeExpr,
) -> ResolvedType {
    let declared_name = expr.as_ident().map(str::to_string);
    let mut ty = bindings.ty_of(expr);
    let mut canonical = ty.canonical(db);
    loop {
        let under = ty.underlying(db);
        let under_canonical = under.canonical(db);
        if under_canonical == canonical {
            break;
        }
        ty = under;
        canonical = under_canonical;
    }
    ResolvedType {
        canonical,
        declared_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_result_fields;
    use crate::env::{NullImporter, package_type_env};
    use zeroret_core::{SourceFile, SourcePackage};
    use zeroret_syntax::{GoParser, ResultField, enclosing_result_fields};

    fn resolve_at<'db>(
        db: &'db dyn salsa::Database,
        text: &str,
        line: u32,
    ) -> Vec<ResolvedType> {
        let tree = GoParser::new().unwrap().parse(text).unwrap();
        let fields: Vec<ResultField> =
            enclosing_result_fields(&tree, text, line).expect("line not in a function");
        let file = SourceFile::new(db, "resolve.go".into(), text.to_string(), tree);
        let pkg = SourcePackage::new(db, vec![file]);
        let env = package_type_env(db, pkg);
        let bindings = check_result_fields(db, env, &NullImporter, &fields).unwrap();
        fields
            .iter()
            .map(|f| resolve(db, &bindings, &f.ty))
            .collect()
    }

    #[test]
    fn error_resolves_to_its_interface_form() {
        let db = salsa::DatabaseImpl::default();
        let resolved = resolve_at(&db, "package p\n\nfunc f() error {\n\treturn nil\n}\n", 4);
        assert_eq!(resolved[0].canonical, "interface{Error() string}");
        assert_eq!(resolved[0].declared_name.as_deref(), Some("error"));
    }

    #[test]
    fn structural_type_is_already_a_fixed_point() {
        let db = salsa::DatabaseImpl::default();
        let resolved = resolve_at(&db, "package p\n\nfunc f() *int {\n\treturn nil\n}\n", 4);
        assert_eq!(resolved[0].canonical, "*int");
        assert_eq!(resolved[0].declared_name, None);
    }

    #[test]
    fn named_chain_is_stripped_to_the_terminal_form() {
        let db = salsa::DatabaseImpl::default();
        let text = "package p\n\ntype A B\ntype B map[string]int\n\nfunc f() A {\n\treturn nil\n}\n";
        let resolved = resolve_at(&db, text, 7);
        assert_eq!(resolved[0].canonical, "map[string]int");
        assert_eq!(resolved[0].declared_name.as_deref(), Some("A"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let db = salsa::DatabaseImpl::default();
        let text = "package p\n\ntype A B\ntype B *int\n\nfunc f() A {\n\treturn nil\n}\n";
        let first = resolve_at(&db, text, 7);
        let second = resolve_at(&db, text, 7);
        assert_eq!(first, second);
    }
}
