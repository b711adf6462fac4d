//! Type checking of result-type expressions against a `TypeEnv`.

use std::collections::HashMap;

use zeroret_syntax::{NodeId, ResultField, TypeExpr, TypeExprKind};

use crate::env::{Importer, TypeEnv};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::ty::{MethodElem, StructField, Ty, TyKind};

/// Read-only product of type checking: the semantic type of every
/// checked type expression, keyed by node identity.
#[derive(Debug, Default)]
pub struct TypeBindings<'db> {
    map: HashMap<NodeId, Ty<'db>>,
}

impl<'db> TypeBindings<'db> {
    pub fn insert(&mut self, id: NodeId, ty: Ty<'db>) {
        self.map.insert(id, ty);
    }

    /// The bound type of `expr`.
    ///
    /// Panics when `expr` was never checked; the resolver only runs
    /// over expressions the checker produced bindings for, so a miss
    /// is a bug, not an input condition.
    pub fn ty_of(&self, expr: &TypeExpr) -> Ty<'db> {
        *self
            .map
            .get(&expr.id)
            .expect("type expression has no binding")
    }
}

/// Check every result field's type expression, producing its binding.
/// The first failing field aborts the whole check.
pub fn check_result_fields<'db>(
    db: &'db dyn salsa::Database,
    env: TypeEnv<'db>,
    importer: &dyn Importer<'db>,
    fields: &[ResultField],
) -> AnalysisResult<TypeBindings<'db>> {
    let mut bindings = TypeBindings::default();
    for field in fields {
        let ty = check_type_expr(db, env, importer, &field.ty)?;
        bindings.insert(field.ty.id, ty);
    }
    Ok(bindings)
}

/// Check one type expression in result position.
///
/// A bare identifier resolves to the full declared type, underlying
/// chain included; composites are checked shallow-structurally.
pub fn check_type_expr<'db>(
    db: &'db dyn salsa::Database,
    env: TypeEnv<'db>,
    importer: &dyn Importer<'db>,
    expr: &TypeExpr,
) -> AnalysisResult<Ty<'db>> {
    match &expr.kind {
        TypeExprKind::Ident(name) => {
            if env.generics(db).contains(name) {
                return Err(AnalysisError::generic_type(name));
            }
            env.types(db)
                .get(name)
                .copied()
                .ok_or_else(|| AnalysisError::undeclared_type(name))
        }
        TypeExprKind::Qualified { package, name } => importer
            .imported(db, package, name)
            .ok_or_else(|| AnalysisError::unresolved_import(package, name)),
        _ => {
            let scope = EnvScope { env };
            structural_ty(db, expr, &scope, importer)
        }
    }
}

/// Name lookup used while checking the inside of a composite type.
pub(crate) trait NameScope<'db> {
    fn inner_ref(&self, db: &'db dyn salsa::Database, name: &str) -> AnalysisResult<Ty<'db>>;
}

struct EnvScope<'db> {
    env: TypeEnv<'db>,
}

impl<'db> NameScope<'db> for EnvScope<'db> {
    fn inner_ref(&self, db: &'db dyn salsa::Database, name: &str) -> AnalysisResult<Ty<'db>> {
        if self.env.generics(db).contains(name) {
            return Err(AnalysisError::generic_type(name));
        }
        self.env
            .types(db)
            .get(name)
            .copied()
            .ok_or_else(|| AnalysisError::undeclared_type(name))
    }
}

/// Shallow-structural checking of a composite type expression: every
/// mention of a name is validated through `scope` but the mentioned
/// type is rendered by name, never expanded.
pub(crate) fn structural_ty<'db>(
    db: &'db dyn salsa::Database,
    expr: &TypeExpr,
    scope: &dyn NameScope<'db>,
    importer: &dyn Importer<'db>,
) -> AnalysisResult<Ty<'db>> {
    let kind = match &expr.kind {
        TypeExprKind::Ident(name) => return scope.inner_ref(db, name),
        TypeExprKind::Qualified { package, name } => {
            importer
                .imported(db, package, name)
                .ok_or_else(|| AnalysisError::unresolved_import(package, name))?;
            // Validated for existence; mentioned by qualified name.
            TyKind::Named {
                name: format!("{}.{}", package, name),
                underlying: None,
            }
        }
        TypeExprKind::Pointer(elem) => {
            TyKind::Pointer(structural_ty(db, elem, scope, importer)?)
        }
        TypeExprKind::Slice(elem) => TyKind::Slice(structural_ty(db, elem, scope, importer)?),
        TypeExprKind::Array { length, element } => TyKind::Array {
            length: length.clone(),
            element: structural_ty(db, element, scope, importer)?,
        },
        TypeExprKind::Map { key, value } => TyKind::Map {
            key: structural_ty(db, key, scope, importer)?,
            value: structural_ty(db, value, scope, importer)?,
        },
        TypeExprKind::Chan { dir, element } => TyKind::Chan {
            dir: *dir,
            element: structural_ty(db, element, scope, importer)?,
        },
        TypeExprKind::Struct { fields } => {
            let mut checked = Vec::with_capacity(fields.len());
            for (name, ty) in fields {
                checked.push(StructField {
                    name: name.clone(),
                    ty: structural_ty(db, ty, scope, importer)?,
                });
            }
            TyKind::Struct { fields: checked }
        }
        TypeExprKind::Interface { methods, embeds } => {
            let mut checked_methods = Vec::with_capacity(methods.len());
            for (name, sig) in methods {
                checked_methods.push(MethodElem {
                    name: name.clone(),
                    sig: structural_ty(db, sig, scope, importer)?,
                });
            }
            let mut checked_embeds = Vec::with_capacity(embeds.len());
            for embed in embeds {
                checked_embeds.push(structural_ty(db, embed, scope, importer)?);
            }
            TyKind::Interface {
                methods: checked_methods,
                embeds: checked_embeds,
            }
        }
        TypeExprKind::Func {
            params,
            results,
            variadic,
        } => {
            let mut checked_params = Vec::with_capacity(params.len());
            for param in params {
                checked_params.push(structural_ty(db, param, scope, importer)?);
            }
            let mut checked_results = Vec::with_capacity(results.len());
            for result in results {
                checked_results.push(structural_ty(db, result, scope, importer)?);
            }
            TyKind::Func {
                params: checked_params,
                results: checked_results,
                variadic: *variadic,
            }
        }
        TypeExprKind::Generic { name, .. } => {
            return Err(AnalysisError::generic_type(name));
        }
        TypeExprKind::Unsupported(text) => {
            return Err(AnalysisError::unsupported_type_syntax(text));
        }
    };
    Ok(Ty::new(db, kind))
}
