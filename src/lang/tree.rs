//! Shared tree-sitter helpers.

use super::ExtractError;
use tree_sitter::{Language, Node, Parser, Tree};

/// Parse `source`, rejecting trees that contain syntax errors.
///
/// With `allow_missing`, nodes the parser inserted to close truncated input
/// (such as a final `}`) are accepted; only genuine error nodes fail.
pub(super) fn parse_tree(
    source: &str,
    language: &Language,
    allow_missing: bool,
) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| ExtractError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ExtractError::NoTree)?;
    if let Some(line) = first_fault(tree.root_node(), allow_missing) {
        return Err(ExtractError::Syntax { line });
    }
    Ok(tree)
}

/// 1-based line of the first error (or missing) node at or below `node`.
fn first_fault(node: Node, allow_missing: bool) -> Option<usize> {
    if node.is_error() || (node.is_missing() && !allow_missing) {
        return Some(start_line(node));
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_fault(child, allow_missing))
}

pub(super) fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_string()
}

/// Node text with runs of whitespace collapsed to one space.
pub(super) fn compact_text(node: Node, source: &str) -> String {
    node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn start_line(node: Node) -> usize {
    node.start_position().row + 1
}

/// 1-based last line of `node`.
///
/// A span ending at column 0 stops before that row's first character, so the
/// previous row is the last one with content.
pub(super) fn end_line(node: Node) -> usize {
    let start = node.start_position();
    let end = node.end_position();
    if end.column == 0 && end.row > start.row {
        end.row
    } else {
        end.row + 1
    }
}
