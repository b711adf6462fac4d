//! Package type environment: the universe scope plus declared types.

use std::collections::{BTreeMap, BTreeSet};

use salsa::Accumulator;
use zeroret_core::{AnalysisPhase, Diagnostic, DiagnosticSeverity, SourceFile, SourcePackage, Span};
use zeroret_syntax::{TypeDecl, TypeExprKind, file_type_decls};

use crate::check::{NameScope, structural_ty};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::ty::{MethodElem, Ty, TyKind};

/// Supplies types for qualified names (`pkg.Name`).
///
/// Import resolution is an explicit seam: the analysis never reads
/// other packages itself. The default importer resolves nothing, so a
/// qualified result type is a type-check failure unless a caller
/// provides real package data.
pub trait Importer<'db> {
    fn imported(&self, db: &'db dyn salsa::Database, package: &str, name: &str)
    -> Option<Ty<'db>>;
}

/// An importer with no package data.
pub struct NullImporter;

impl<'db> Importer<'db> for NullImporter {
    fn imported(
        &self,
        _db: &'db dyn salsa::Database,
        _package: &str,
        _name: &str,
    ) -> Option<Ty<'db>> {
        None
    }
}

/// The resolved type environment of one package.
///
/// `types` maps every resolvable name (universe scope plus package
/// declarations, package winning on collision) to its semantic type.
/// Names of generic declarations are kept apart: they exist but can
/// never be used as a result type.
#[salsa::tracked(debug)]
pub struct TypeEnv<'db> {
    #[returns(ref)]
    pub types: BTreeMap<String, Ty<'db>>,
    #[returns(ref)]
    pub generics: BTreeSet<String>,
}

const BASIC_KINDS: &[&str] = &[
    "bool", "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
    "uint32", "uint64", "uintptr", "float32", "float64", "complex64", "complex128", "byte", "rune",
];

/// Predeclared identifiers available without declaration.
fn universe<'db>(db: &'db dyn salsa::Database) -> BTreeMap<String, Ty<'db>> {
    let mut types = BTreeMap::new();
    for kind in BASIC_KINDS {
        types.insert(
            kind.to_string(),
            Ty::new(db, TyKind::Basic(kind.to_string())),
        );
    }
    let string = Ty::new(db, TyKind::Basic("string".to_string()));
    let error_method = Ty::new(
        db,
        TyKind::Func {
            params: vec![],
            results: vec![string],
            variadic: false,
        },
    );
    let error_iface = Ty::new(
        db,
        TyKind::Interface {
            methods: vec![MethodElem {
                name: "Error".to_string(),
                sig: error_method,
            }],
            embeds: vec![],
        },
    );
    types.insert(
        "error".to_string(),
        Ty::new(
            db,
            TyKind::Named {
                name: "error".to_string(),
                underlying: Some(error_iface),
            },
        ),
    );
    // `any` is an alias, so it contributes no named step.
    let empty_iface = Ty::new(
        db,
        TyKind::Interface {
            methods: vec![],
            embeds: vec![],
        },
    );
    types.insert("any".to_string(), empty_iface);
    types
}

/// Build the type environment for a package, accumulating a
/// `TypeChecking` diagnostic for every declaration that fails.
#[salsa::tracked]
pub fn package_type_env<'db>(db: &'db dyn salsa::Database, pkg: SourcePackage) -> TypeEnv<'db> {
    let mut decls: BTreeMap<String, (TypeDecl, SourceFile)> = BTreeMap::new();
    let mut generics = BTreeSet::new();
    let mut order = Vec::new();
    for file in pkg.files(db) {
        for decl in file_type_decls(db, *file) {
            if decls.contains_key(&decl.name) || generics.contains(&decl.name) {
                report(
                    db,
                    *file,
                    decl.span,
                    AnalysisError::duplicate_type(&decl.name),
                );
                continue;
            }
            if decl.is_generic {
                generics.insert(decl.name.clone());
                continue;
            }
            order.push(decl.name.clone());
            decls.insert(decl.name.clone(), (decl, *file));
        }
    }

    let mut resolver = DeclResolver {
        db,
        decls: &decls,
        generics: &generics,
        resolved: BTreeMap::new(),
        visiting: Vec::new(),
    };
    let mut types = universe(db);
    for name in &order {
        if let Some(ty) = resolver.resolve(name) {
            types.insert(name.clone(), ty);
        }
    }
    TypeEnv::new(db, types, generics)
}

fn report(db: &dyn salsa::Database, file: SourceFile, span: Span, error: AnalysisError) {
    let line = zeroret_core::line_at(file.text(db), span.start);
    Diagnostic {
        message: format!("{}:{}: {}", file.path(db).display(), line, error),
        span,
        severity: DiagnosticSeverity::Error,
        phase: AnalysisPhase::TypeChecking,
    }
    .accumulate(db);
}

/// Resolves package `type` declarations into semantic types, memoized,
/// with cycle detection over the chain currently being walked.
struct DeclResolver<'db, 'a> {
    db: &'db dyn salsa::Database,
    decls: &'a BTreeMap<String, (TypeDecl, SourceFile)>,
    generics: &'a BTreeSet<String>,
    /// `None` marks a declaration that failed; its diagnostic is
    /// already out, so dependents stay silent.
    resolved: BTreeMap<String, Option<Ty<'db>>>,
    visiting: Vec<String>,
}

impl<'db> DeclResolver<'db, '_> {
    fn resolve(&mut self, name: &str) -> Option<Ty<'db>> {
        if let Some(cached) = self.resolved.get(name) {
            return *cached;
        }
        let (decl, file) = &self.decls[name];
        if self.visiting.iter().any(|n| n == name) {
            let chain = format!("{} -> {}", self.visiting.join(" -> "), name);
            report(self.db, *file, decl.span, AnalysisError::cyclic_type(chain));
            self.resolved.insert(name.to_string(), None);
            return None;
        }
        self.visiting.push(name.to_string());
        let result = self.decl_ty(decl);
        self.visiting.pop();

        let ty = match result {
            Ok(inner) => inner.map(|inner| {
                if decl.is_alias {
                    inner
                } else {
                    Ty::new(
                        self.db,
                        TyKind::Named {
                            name: name.to_string(),
                            underlying: Some(inner),
                        },
                    )
                }
            }),
            Err(error) => {
                report(self.db, *file, decl.span, error);
                None
            }
        };
        self.resolved.insert(name.to_string(), ty);
        ty
    }

    /// The type of a declaration's right-hand side. `Ok(None)` means a
    /// referenced declaration already failed.
    fn decl_ty(&mut self, decl: &TypeDecl) -> AnalysisResult<Option<Ty<'db>>> {
        match decl.expr.kind {
            TypeExprKind::Ident(ref other) => {
                if self.decls.contains_key(other) {
                    Ok(self.resolve(other))
                } else if self.generics.contains(other) {
                    Err(AnalysisError::generic_type(other))
                } else if let Some(ty) = universe(self.db).get(other) {
                    Ok(Some(*ty))
                } else {
                    Err(AnalysisError::undeclared_type(other))
                }
            }
            _ => {
                let scope = DeclScope {
                    decls: self.decls,
                    generics: self.generics,
                };
                structural_ty(self.db, &decl.expr, &scope, &NullImporter).map(Some)
            }
        }
    }
}

/// Name lookup while declarations are still being resolved: mentions
/// inside composites are validated for existence only and rendered by
/// name, which is what lets self-referential declarations through
/// indirection check cleanly.
struct DeclScope<'a> {
    decls: &'a BTreeMap<String, (TypeDecl, SourceFile)>,
    generics: &'a BTreeSet<String>,
}

impl<'db> NameScope<'db> for DeclScope<'_> {
    fn inner_ref(&self, db: &'db dyn salsa::Database, name: &str) -> AnalysisResult<Ty<'db>> {
        if self.generics.contains(name) {
            return Err(AnalysisError::generic_type(name));
        }
        if self.decls.contains_key(name) || name == "error" {
            return Ok(Ty::new(
                db,
                TyKind::Named {
                    name: name.to_string(),
                    underlying: None,
                },
            ));
        }
        if name == "any" {
            return Ok(Ty::new(
                db,
                TyKind::Interface {
                    methods: vec![],
                    embeds: vec![],
                },
            ));
        }
        if BASIC_KINDS.contains(&name) {
            return Ok(Ty::new(db, TyKind::Basic(name.to_string())));
        }
        Err(AnalysisError::undeclared_type(name))
    }
}
