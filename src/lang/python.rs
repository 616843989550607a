//! Python front end: classes and functions with exact tree spans.

use super::tree::{end_line, node_text, parse_tree, start_line};
use super::{ExtractError, StructureExtractor};
use crate::structure::{FileStructures, NewStructure, StructureId, StructureKind};
use tree_sitter::Node;

/// Extracts `class` and `def` scopes from Python source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl StructureExtractor for PythonExtractor {
    fn extract(&self, source: &str) -> Result<FileStructures, ExtractError> {
        let tree = parse_tree(source, &tree_sitter_python::language(), false)?;
        let mut walker = Walker {
            source,
            out: FileStructures::new(),
        };
        walker.visit_children(tree.root_node(), None);
        Ok(walker.out)
    }
}

struct Walker<'s> {
    source: &'s str,
    out: FileStructures,
}

impl Walker<'_> {
    fn visit_children(&mut self, node: Node, parent: Option<StructureId>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, parent);
        }
    }

    fn visit(&mut self, node: Node, parent: Option<StructureId>) {
        match node.kind() {
            "decorated_definition" => {
                let decorators = self.decorators(node);
                match node.child_by_field_name("definition") {
                    Some(def) => self.define(def, node, decorators, parent),
                    None => self.visit_children(node, parent),
                }
            }
            "class_definition" | "function_definition" => {
                self.define(node, node, Vec::new(), parent)
            }
            _ => self.visit_children(node, parent),
        }
    }

    /// Record `def`; `outer` is the decorated wrapper when there is one and
    /// supplies the span so decorator lines belong to the definition.
    fn define(
        &mut self,
        def: Node,
        outer: Node,
        decorators: Vec<String>,
        parent: Option<StructureId>,
    ) {
        let Some(name) = def.child_by_field_name("name") else {
            self.visit_children(def, parent);
            return;
        };

        let kind = if def.kind() == "class_definition" {
            StructureKind::Class
        } else if self.is_class(parent) {
            StructureKind::Method
        } else {
            StructureKind::Function
        };

        let mut new = NewStructure::new(
            kind,
            node_text(name, self.source),
            start_line(outer),
            end_line(outer),
        )
        .with_parent(parent)
        .with_decorators(decorators);

        if kind != StructureKind::Class {
            if is_async(def) {
                new = new.with_modifiers(vec!["async".to_string()]);
            }
            if let Some(params) = def.child_by_field_name("parameters") {
                new = new.with_params(self.params(params));
            }
            if let Some(ret) = def.child_by_field_name("return_type") {
                new = new.with_return_type(Some(node_text(ret, self.source)));
            }
        }

        let id = self.out.push(new);
        match def.child_by_field_name("body") {
            Some(body) => self.visit_children(body, Some(id)),
            None => self.visit_children(def, Some(id)),
        }
    }

    fn is_class(&self, id: Option<StructureId>) -> bool {
        id.and_then(|id| self.out.get(id))
            .is_some_and(|s| s.kind == StructureKind::Class)
    }

    /// `@name` for each decorator: identifiers, dotted names, or the callee of a call.
    fn decorators(&self, node: Node) -> Vec<String> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .filter_map(|decorator| {
                let expr = decorator.named_child(0)?;
                let target = if expr.kind() == "call" {
                    expr.child_by_field_name("function")?
                } else {
                    expr
                };
                Some(format!("@{}", node_text(target, self.source)))
            })
            .collect()
    }

    fn params(&self, params: Node) -> Vec<String> {
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter_map(|p| match p.kind() {
                "identifier" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                    Some(node_text(p, self.source))
                }
                "typed_parameter" => p.named_child(0).map(|n| node_text(n, self.source)),
                "default_parameter" | "typed_default_parameter" => p
                    .child_by_field_name("name")
                    .map(|n| node_text(n, self.source)),
                _ => None,
            })
            .collect()
    }
}

fn is_async(def: Node) -> bool {
    let mut cursor = def.walk();
    let found = def.children(&mut cursor).any(|c| c.kind() == "async");
    found
}
