//! Semantic Go types with canonical rendering and the underlying relation.

use zeroret_syntax::ChanDir;

/// A semantic type, interned for the lifetime of the database.
#[salsa::interned(debug)]
pub struct Ty<'db> {
    #[returns(ref)]
    pub kind: TyKind<'db>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum TyKind<'db> {
    /// A predeclared basic kind: `int`, `string`, `bool`, ...
    Basic(String),
    /// A declared named type. `underlying` is the one-step underlying
    /// type; `None` marks a mention by name inside a composite, which
    /// is rendered by name and never walked.
    Named {
        name: String,
        underlying: Option<Ty<'db>>,
    },
    Pointer(Ty<'db>),
    Slice(Ty<'db>),
    Array {
        length: String,
        element: Ty<'db>,
    },
    Map {
        key: Ty<'db>,
        value: Ty<'db>,
    },
    Chan {
        dir: ChanDir,
        element: Ty<'db>,
    },
    Struct {
        fields: Vec<StructField<'db>>,
    },
    Interface {
        methods: Vec<MethodElem<'db>>,
        embeds: Vec<Ty<'db>>,
    },
    Func {
        params: Vec<Ty<'db>>,
        results: Vec<Ty<'db>>,
        variadic: bool,
    },
}

/// One struct field; `name` is `None` for embedded fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct StructField<'db> {
    pub name: Option<String>,
    pub ty: Ty<'db>,
}

/// One explicit interface method; `sig` is a `Func` type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct MethodElem<'db> {
    pub name: String,
    pub sig: Ty<'db>,
}

impl<'db> Ty<'db> {
    /// One step of the underlying relation. Every kind except a
    /// declared named type is its own underlying form.
    pub fn underlying(self, db: &'db dyn salsa::Database) -> Ty<'db> {
        match self.kind(db) {
            TyKind::Named {
                underlying: Some(u),
                ..
            } => *u,
            _ => self,
        }
    }

    /// Canonical string form, following `go/types` notation.
    pub fn canonical(self, db: &'db dyn salsa::Database) -> String {
        match self.kind(db) {
            TyKind::Basic(name) => name.clone(),
            TyKind::Named { name, .. } => name.clone(),
            TyKind::Pointer(elem) => format!("*{}", elem.canonical(db)),
            TyKind::Slice(elem) => format!("[]{}", elem.canonical(db)),
            TyKind::Array { length, element } => {
                format!("[{}]{}", length, element.canonical(db))
            }
            TyKind::Map { key, value } => {
                format!("map[{}]{}", key.canonical(db), value.canonical(db))
            }
            TyKind::Chan { dir, element } => match dir {
                ChanDir::Both => format!("chan {}", element.canonical(db)),
                ChanDir::Send => format!("chan<- {}", element.canonical(db)),
                ChanDir::Recv => format!("<-chan {}", element.canonical(db)),
            },
            TyKind::Struct { fields } => {
                let body = fields
                    .iter()
                    .map(|field| match &field.name {
                        Some(name) => format!("{} {}", name, field.ty.canonical(db)),
                        None => field.ty.canonical(db),
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("struct{{{}}}", body)
            }
            TyKind::Interface { methods, embeds } => {
                let mut elems: Vec<String> = methods
                    .iter()
                    .map(|m| match m.sig.kind(db) {
                        TyKind::Func {
                            params,
                            results,
                            variadic,
                        } => format!("{}{}", m.name, func_sig(db, params, results, *variadic)),
                        _ => format!("{} {}", m.name, m.sig.canonical(db)),
                    })
                    .collect();
                elems.extend(embeds.iter().map(|e| e.canonical(db)));
                format!("interface{{{}}}", elems.join("; "))
            }
            TyKind::Func {
                params,
                results,
                variadic,
            } => format!("func{}", func_sig(db, params, results, *variadic)),
        }
    }
}

fn func_sig<'db>(
    db: &'db dyn salsa::Database,
    params: &[Ty<'db>],
    results: &[Ty<'db>],
    variadic: bool,
) -> String {
    let mut rendered: Vec<String> = params.iter().map(|p| p.canonical(db)).collect();
    if variadic {
        if let Some(last) = rendered.last_mut() {
            *last = format!("...{}", last);
        }
    }
    let params = format!("({})", rendered.join(", "));
    match results {
        [] => params,
        [single] => format!("{} {}", params, single.canonical(db)),
        many => {
            let list = many
                .iter()
                .map(|r| r.canonical(db))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} ({})", params, list)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic<'db>(db: &'db dyn salsa::Database, name: &str) -> Ty<'db> {
        Ty::new(db, TyKind::Basic(name.to_string()))
    }

    #[test]
    fn composite_rendering_matches_go_types_notation() {
        let db = salsa::DatabaseImpl::default();
        let int = basic(&db, "int");
        let string = basic(&db, "string");
        assert_eq!(Ty::new(&db, TyKind::Pointer(int)).canonical(&db), "*int");
        assert_eq!(Ty::new(&db, TyKind::Slice(string)).canonical(&db), "[]string");
        assert_eq!(
            Ty::new(
                &db,
                TyKind::Map {
                    key: string,
                    value: int
                }
            )
            .canonical(&db),
            "map[string]int"
        );
        assert_eq!(
            Ty::new(
                &db,
                TyKind::Chan {
                    dir: ChanDir::Recv,
                    element: int
                }
            )
            .canonical(&db),
            "<-chan int"
        );
        assert_eq!(
            Ty::new(
                &db,
                TyKind::Array {
                    length: "4".into(),
                    element: int
                }
            )
            .canonical(&db),
            "[4]int"
        );
    }

    #[test]
    fn struct_and_interface_rendering() {
        let db = salsa::DatabaseImpl::default();
        let int = basic(&db, "int");
        let string = basic(&db, "string");
        let st = Ty::new(
            &db,
            TyKind::Struct {
                fields: vec![
                    StructField {
                        name: Some("a".to_string()),
                        ty: int,
                    },
                    StructField {
                        name: Some("b".to_string()),
                        ty: string,
                    },
                ],
            },
        );
        assert_eq!(st.canonical(&db), "struct{a int; b string}");
        let empty = Ty::new(&db, TyKind::Struct { fields: vec![] });
        assert_eq!(empty.canonical(&db), "struct{}");

        let error_sig = Ty::new(
            &db,
            TyKind::Func {
                params: vec![],
                results: vec![string],
                variadic: false,
            },
        );
        let iface = Ty::new(
            &db,
            TyKind::Interface {
                methods: vec![MethodElem {
                    name: "Error".to_string(),
                    sig: error_sig,
                }],
                embeds: vec![],
            },
        );
        assert_eq!(iface.canonical(&db), "interface{Error() string}");
        let any = Ty::new(
            &db,
            TyKind::Interface {
                methods: vec![],
                embeds: vec![],
            },
        );
        assert_eq!(any.canonical(&db), "interface{}");
    }

    #[test]
    fn func_rendering_covers_variadic_and_multi_result() {
        let db = salsa::DatabaseImpl::default();
        let int = basic(&db, "int");
        let bool_ = basic(&db, "bool");
        let err = Ty::new(
            &db,
            TyKind::Named {
                name: "error".to_string(),
                underlying: None,
            },
        );
        let f = Ty::new(
            &db,
            TyKind::Func {
                params: vec![int],
                results: vec![bool_, err],
                variadic: false,
            },
        );
        assert_eq!(f.canonical(&db), "func(int) (bool, error)");
        let v = Ty::new(
            &db,
            TyKind::Func {
                params: vec![int],
                results: vec![],
                variadic: true,
            },
        );
        assert_eq!(v.canonical(&db), "func(...int)");
    }

    #[test]
    fn underlying_is_identity_except_for_declared_names() {
        let db = salsa::DatabaseImpl::default();
        let int = basic(&db, "int");
        let ptr = Ty::new(&db, TyKind::Pointer(int));
        assert_eq!(ptr.underlying(&db), ptr);
        assert_eq!(int.underlying(&db), int);
        let named = Ty::new(
            &db,
            TyKind::Named {
                name: "Count".to_string(),
                underlying: Some(int),
            },
        );
        assert_eq!(named.underlying(&db), int);
        let mention = Ty::new(
            &db,
            TyKind::Named {
                name: "List".to_string(),
                underlying: None,
            },
        );
        assert_eq!(mention.underlying(&db), mention);
    }
}
