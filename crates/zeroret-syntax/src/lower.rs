//! Lowering from the Go CST to `TypeExpr` / `ResultField` / `TypeDecl`.

use tree_sitter::Node;
use zeroret_core::{SourceFile, Span};

use crate::ast::{ChanDir, NodeId, ResultField, TypeDecl, TypeExpr, TypeExprKind};

fn node_text<'a>(node: Node, text: &'a str) -> &'a str {
    &text[node.byte_range()]
}

fn expr(node: Node, kind: TypeExprKind) -> TypeExpr {
    TypeExpr {
        id: NodeId(node.id()),
        span: Span::from_node(&node),
        kind,
    }
}

/// Lower any Go type expression node.
///
/// Total: shapes the analyzer does not model come back as
/// `Unsupported` carrying their source text, for the checker to
/// reject with a real message.
pub fn lower_type(node: Node, text: &str) -> TypeExpr {
    let mut cursor = node.walk();
    match node.kind() {
        "type_identifier" | "identifier" => {
            expr(node, TypeExprKind::Ident(node_text(node, text).to_string()))
        }
        "qualified_type" => {
            let package = node
                .child_by_field_name("package")
                .map(|n| node_text(n, text).to_string())
                .unwrap_or_default();
            let name = node
                .child_by_field_name("name")
                .map(|n| node_text(n, text).to_string())
                .unwrap_or_default();
            expr(node, TypeExprKind::Qualified { package, name })
        }
        "pointer_type" => match node.named_child(0) {
            Some(inner) => expr(node, TypeExprKind::Pointer(Box::new(lower_type(inner, text)))),
            None => unsupported(node, text),
        },
        "slice_type" => match node.child_by_field_name("element") {
            Some(elem) => expr(node, TypeExprKind::Slice(Box::new(lower_type(elem, text)))),
            None => unsupported(node, text),
        },
        "array_type" => {
            let (Some(length), Some(element)) = (
                node.child_by_field_name("length"),
                node.child_by_field_name("element"),
            ) else {
                return unsupported(node, text);
            };
            expr(
                node,
                TypeExprKind::Array {
                    length: node_text(length, text).to_string(),
                    element: Box::new(lower_type(element, text)),
                },
            )
        }
        "map_type" => {
            let (Some(key), Some(value)) = (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) else {
                return unsupported(node, text);
            };
            expr(
                node,
                TypeExprKind::Map {
                    key: Box::new(lower_type(key, text)),
                    value: Box::new(lower_type(value, text)),
                },
            )
        }
        "channel_type" => {
            let Some(element) = node.child_by_field_name("value") else {
                return unsupported(node, text);
            };
            let mut dir = ChanDir::Both;
            for (i, child) in node.children(&mut cursor).enumerate() {
                if child.kind() == "<-" {
                    dir = if i == 0 { ChanDir::Recv } else { ChanDir::Send };
                    break;
                }
            }
            expr(
                node,
                TypeExprKind::Chan {
                    dir,
                    element: Box::new(lower_type(element, text)),
                },
            )
        }
        "struct_type" => {
            let mut fields = Vec::new();
            let Some(body) = node.named_child(0) else {
                return expr(node, TypeExprKind::Struct { fields });
            };
            for decl in body.named_children(&mut cursor) {
                if decl.kind() != "field_declaration" {
                    continue;
                }
                let Some(ty_node) = decl.child_by_field_name("type") else {
                    continue;
                };
                let mut ty = lower_type(ty_node, text);
                // Embedded pointer field: `*T` with the star as a bare token.
                if decl.child(0).is_some_and(|c| c.kind() == "*") {
                    ty = expr(decl, TypeExprKind::Pointer(Box::new(ty)));
                }
                let mut name_cursor = decl.walk();
                let mut any = false;
                for name in decl.children_by_field_name("name", &mut name_cursor) {
                    any = true;
                    fields.push((Some(node_text(name, text).to_string()), ty.clone()));
                }
                if !any {
                    fields.push((None, ty));
                }
            }
            expr(node, TypeExprKind::Struct { fields })
        }
        "interface_type" => {
            let mut methods = Vec::new();
            let mut embeds = Vec::new();
            for elem in node.named_children(&mut cursor) {
                match elem.kind() {
                    "method_elem" => {
                        let Some(name) = elem.child_by_field_name("name") else {
                            continue;
                        };
                        methods.push((
                            node_text(name, text).to_string(),
                            lower_signature(elem, text),
                        ));
                    }
                    "type_elem" => {
                        // One embedded name per term; unions are not modeled.
                        match elem.named_child(0) {
                            Some(term) if elem.named_child_count() == 1 => {
                                embeds.push(lower_type(term, text));
                            }
                            _ => embeds.push(unsupported(elem, text)),
                        }
                    }
                    _ => {}
                }
            }
            expr(node, TypeExprKind::Interface { methods, embeds })
        }
        "function_type" => lower_signature(node, text),
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => lower_type(inner, text),
            None => unsupported(node, text),
        },
        "generic_type" => {
            let (Some(name), Some(args_node)) = (
                node.child_by_field_name("type"),
                node.child_by_field_name("type_arguments"),
            ) else {
                return unsupported(node, text);
            };
            let mut args_cursor = args_node.walk();
            let args = args_node
                .named_children(&mut args_cursor)
                .map(|arg| lower_type(arg, text))
                .collect();
            expr(
                node,
                TypeExprKind::Generic {
                    name: node_text(name, text).to_string(),
                    args,
                },
            )
        }
        _ => unsupported(node, text),
    }
}

fn unsupported(node: Node, text: &str) -> TypeExpr {
    expr(node, TypeExprKind::Unsupported(node_text(node, text).to_string()))
}

/// Lower a node with `parameters`/`result` fields into a `Func` expression.
fn lower_signature(node: Node, text: &str) -> TypeExpr {
    let mut params = Vec::new();
    let mut variadic = false;
    if let Some(list) = node.child_by_field_name("parameters") {
        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            match decl.kind() {
                "parameter_declaration" => {
                    let Some(ty_node) = decl.child_by_field_name("type") else {
                        continue;
                    };
                    let ty = lower_type(ty_node, text);
                    // `a, b int` contributes one parameter slot per name.
                    let mut name_cursor = decl.walk();
                    let names = decl
                        .children_by_field_name("name", &mut name_cursor)
                        .count();
                    for _ in 0..names.max(1) {
                        params.push(ty.clone());
                    }
                }
                "variadic_parameter_declaration" => {
                    variadic = true;
                    if let Some(ty_node) = decl.child_by_field_name("type") {
                        params.push(lower_type(ty_node, text));
                    }
                }
                _ => {}
            }
        }
    }
    let results = lower_result_clause(node, text)
        .into_iter()
        .map(|field| field.ty)
        .collect();
    expr(
        node,
        TypeExprKind::Func {
            params,
            results,
            variadic,
        },
    )
}

/// Lower the result clause of a function-like node into one
/// `ResultField` per declared slot.
///
/// `(a, b int, err error)` yields three fields; a bare result type
/// yields one unnamed field; no result clause yields an empty list.
pub fn lower_result_clause(func_node: Node, text: &str) -> Vec<ResultField> {
    let Some(result) = func_node.child_by_field_name("result") else {
        return Vec::new();
    };
    if result.kind() != "parameter_list" {
        return vec![ResultField {
            name: None,
            ty: lower_type(result, text),
        }];
    }
    let mut fields = Vec::new();
    let mut cursor = result.walk();
    for decl in result.named_children(&mut cursor) {
        if decl.kind() != "parameter_declaration" {
            continue;
        }
        let Some(ty_node) = decl.child_by_field_name("type") else {
            continue;
        };
        let ty = lower_type(ty_node, text);
        let mut any = false;
        let mut name_cursor = decl.walk();
        for name in decl.children_by_field_name("name", &mut name_cursor) {
            any = true;
            fields.push(ResultField {
                name: Some(node_text(name, text).to_string()),
                ty: ty.clone(),
            });
        }
        if !any {
            fields.push(ResultField { name: None, ty });
        }
    }
    fields
}

/// All package-level `type` declarations of one file, in source order.
#[salsa::tracked]
pub fn file_type_decls(db: &dyn salsa::Database, file: SourceFile) -> Vec<TypeDecl> {
    let tree = file.tree(db);
    let text = file.text(db);
    let root = tree.root_node();
    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for item in root.named_children(&mut cursor) {
        if item.kind() != "type_declaration" {
            continue;
        }
        let mut spec_cursor = item.walk();
        for spec in item.named_children(&mut spec_cursor) {
            let is_alias = match spec.kind() {
                "type_spec" => false,
                "type_alias" => true,
                _ => continue,
            };
            let (Some(name), Some(ty_node)) = (
                spec.child_by_field_name("name"),
                spec.child_by_field_name("type"),
            ) else {
                continue;
            };
            let is_generic = spec.child_by_field_name("type_parameters").is_some();
            decls.push(TypeDecl {
                name: node_text(name, text).to_string(),
                is_alias,
                is_generic,
                expr: lower_type(ty_node, text),
                span: Span::from_node(&spec),
            });
        }
    }
    decls
}
