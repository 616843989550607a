//! Java front end: declarations from tree-sitter, end lines from brace scanning.

use super::tree::{compact_text, node_text, parse_tree, start_line};
use super::{ExtractError, StructureExtractor};
use crate::boundary::{BoundaryResolver, DefaultSpans};
use crate::structure::{FileStructures, NewStructure, StructureId, StructureKind};
use tree_sitter::Node;

/// Extracts type, method and constructor declarations from Java source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaExtractor {
    spans: DefaultSpans,
}

impl JavaExtractor {
    pub fn new(spans: DefaultSpans) -> Self {
        Self { spans }
    }
}

impl StructureExtractor for JavaExtractor {
    fn extract(&self, source: &str) -> Result<FileStructures, ExtractError> {
        let tree = parse_tree(source, &tree_sitter_java::language(), true)?;
        let mut walker = Walker {
            source,
            resolver: BoundaryResolver::new(source, self.spans),
            out: FileStructures::new(),
        };
        walker.visit(tree.root_node(), None);
        Ok(walker.out)
    }
}

fn structure_kind(node_kind: &str) -> Option<StructureKind> {
    match node_kind {
        "class_declaration" | "record_declaration" => Some(StructureKind::Class),
        "interface_declaration" | "annotation_type_declaration" => Some(StructureKind::Interface),
        "enum_declaration" => Some(StructureKind::Enum),
        "method_declaration" => Some(StructureKind::Method),
        "constructor_declaration" | "compact_constructor_declaration" => {
            Some(StructureKind::Constructor)
        }
        _ => None,
    }
}

struct Walker<'s> {
    source: &'s str,
    resolver: BoundaryResolver<'s>,
    out: FileStructures,
}

impl Walker<'_> {
    fn visit(&mut self, node: Node, parent: Option<StructureId>) {
        let parent = match (structure_kind(node.kind()), node.child_by_field_name("name")) {
            (Some(kind), Some(name)) => Some(self.declare(node, name, kind, parent)),
            _ => parent,
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, parent);
        }
    }

    fn declare(
        &mut self,
        node: Node,
        name: Node,
        kind: StructureKind,
        parent: Option<StructureId>,
    ) -> StructureId {
        // Annotations before the name may hold braces of their own, so the
        // scan starts at the name.
        let boundary = self.resolver.resolve(name.start_byte(), kind);
        let (modifiers, decorators) = self.modifiers(node);

        let mut new = NewStructure::new(
            kind,
            node_text(name, self.source),
            start_line(node),
            boundary.line(),
        )
        .with_parent(parent)
        .with_modifiers(modifiers)
        .with_decorators(decorators)
        .with_boundary(boundary.kind());

        if let Some(params) = node.child_by_field_name("parameters") {
            new = new.with_params(self.params(params));
        }
        if kind == StructureKind::Method
            && let Some(ret) = node.child_by_field_name("type")
        {
            new = new.with_return_type(Some(compact_text(ret, self.source)));
        }

        self.out.push(new)
    }

    /// Split the `modifiers` node into keywords and `@Annotation` names.
    fn modifiers(&self, node: Node) -> (Vec<String>, Vec<String>) {
        let mut modifiers = Vec::new();
        let mut decorators = Vec::new();

        let mut cursor = node.walk();
        let Some(list) = node.children(&mut cursor).find(|c| c.kind() == "modifiers") else {
            return (modifiers, decorators);
        };

        let mut cursor = list.walk();
        for child in list.children(&mut cursor) {
            match child.kind() {
                "marker_annotation" | "annotation" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| node_text(n, self.source))
                        .unwrap_or_else(|| node_text(child, self.source));
                    decorators.push(format!("@{}", name.trim_start_matches('@')));
                }
                "line_comment" | "block_comment" => {}
                _ => modifiers.push(node_text(child, self.source)),
            }
        }
        (modifiers, decorators)
    }

    /// `Type name` for each formal parameter.
    fn params(&self, params: Node) -> Vec<String> {
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter_map(|p| match p.kind() {
                "formal_parameter" => {
                    let ty = p.child_by_field_name("type")?;
                    let name = p.child_by_field_name("name")?;
                    Some(format!(
                        "{} {}",
                        compact_text(ty, self.source),
                        node_text(name, self.source)
                    ))
                }
                "spread_parameter" => Some(compact_text(p, self.source)),
                _ => None,
            })
            .collect()
    }
}
