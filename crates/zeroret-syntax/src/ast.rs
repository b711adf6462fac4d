//! Lowered syntactic forms of Go declarations and type expressions.

use zeroret_core::Span;

/// Stable identity of a CST node within one parsed file.
///
/// Taken from `tree_sitter::Node::id`, which stays valid for the
/// lifetime of the tree. Trees are parsed once at load time and never
/// replaced, so a `NodeId` is a sound key across the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct NodeId(pub usize);

/// Channel direction marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// A lowered Go type expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct TypeExpr {
    pub id: NodeId,
    pub span: Span,
    pub kind: TypeExprKind,
}

/// The syntactic shape of a type expression.
///
/// Lowering is total: every result clause lowers without loss, and
/// shapes the checker cannot handle arrive as `Generic` or
/// `Unsupported` and are rejected there, not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum TypeExprKind {
    /// A bare identifier: `int`, `error`, `Config`.
    Ident(String),
    /// A qualified name: `pkg.Name`.
    Qualified { package: String, name: String },
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    /// Array with its length expression kept as source text.
    Array { length: String, element: Box<TypeExpr> },
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    Chan { dir: ChanDir, element: Box<TypeExpr> },
    /// Struct literal type; `None` names are embedded fields.
    Struct { fields: Vec<(Option<String>, TypeExpr)> },
    /// Interface literal type: explicit methods plus embedded names.
    Interface {
        methods: Vec<(String, TypeExpr)>,
        embeds: Vec<TypeExpr>,
    },
    Func {
        params: Vec<TypeExpr>,
        results: Vec<TypeExpr>,
        variadic: bool,
    },
    /// A generic instantiation: `List[int]`.
    Generic { name: String, args: Vec<TypeExpr> },
    /// Any syntax the lowerer does not model; carries the source text.
    Unsupported(String),
}

impl TypeExpr {
    /// The identifier text when this expression is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            TypeExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

/// One declared return slot of a function-like node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct ResultField {
    /// Declared result name; `None` for an unnamed slot.
    pub name: Option<String>,
    pub ty: TypeExpr,
}

/// A package-level `type` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub struct TypeDecl {
    pub name: String,
    /// `type A = B` rather than `type A B`.
    pub is_alias: bool,
    /// Declared with a type parameter list.
    pub is_generic: bool,
    pub expr: TypeExpr,
    pub span: Span,
}
