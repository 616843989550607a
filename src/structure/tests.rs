//! Tests for the structure arena.

use super::*;

fn user_service() -> (FileStructures, StructureId, StructureId) {
    let mut structures = FileStructures::new();
    let class = structures.push(
        NewStructure::new(StructureKind::Class, "UserService", 5, 20)
            .with_modifiers(vec!["public".to_string()]),
    );
    let method = structures.push(
        NewStructure::new(StructureKind::Method, "addUser", 10, 16)
            .with_parent(Some(class))
            .with_modifiers(vec!["public".to_string()])
            .with_params(vec!["String name".to_string(), "String email".to_string()])
            .with_return_type(Some("boolean".to_string())),
    );
    (structures, class, method)
}

#[test]
fn test_full_path_walks_from_root() {
    let (structures, class, method) = user_service();

    assert_eq!(structures.full_path(class), "public class UserService");
    assert_eq!(
        structures.full_path(method),
        "public class UserService > public method addUser"
    );
}

#[test]
fn test_full_path_renders_decorators_before_kind() {
    let mut structures = FileStructures::new();
    let class = structures.push(NewStructure::new(StructureKind::Class, "Api", 1, 10));
    let method = structures.push(
        NewStructure::new(StructureKind::Method, "items", 3, 5)
            .with_parent(Some(class))
            .with_decorators(vec!["@property".to_string()]),
    );

    assert_eq!(structures.full_path(method), "class Api > @property method items");
}

#[test]
fn test_depth_counts_enclosing_structures() {
    let (mut structures, class, method) = user_service();
    let inner = structures.push(
        NewStructure::new(StructureKind::Function, "helper", 12, 13).with_parent(Some(method)),
    );

    assert_eq!(structures.depth(class), 0);
    assert_eq!(structures.depth(method), 1);
    assert_eq!(structures.depth(inner), 2);
}

#[test]
fn test_child_range_is_clamped_into_parent() {
    let (mut structures, class, _) = user_service();
    let overlong = structures.push(
        NewStructure::new(StructureKind::Method, "estimate", 18, 68)
            .with_parent(Some(class))
            .with_boundary(BoundaryKind::Estimated),
    );

    let s = structures.get(overlong).unwrap();
    assert_eq!(s.start_line, 18);
    assert_eq!(s.end_line, 20);
    assert_eq!(s.boundary, BoundaryKind::Estimated);
}

#[test]
fn test_end_line_never_precedes_start_line() {
    let mut structures = FileStructures::new();
    let id = structures.push(NewStructure::new(StructureKind::Function, "f", 9, 3));

    let s = structures.get(id).unwrap();
    assert_eq!(s.start_line, 9);
    assert_eq!(s.end_line, 9);
    assert_eq!(s.line_count(), 1);
    assert_eq!(s.width(), 0);
}

#[test]
fn test_unknown_parent_is_dropped() {
    let mut structures = FileStructures::new();
    let id = structures.push(
        NewStructure::new(StructureKind::Function, "orphan", 1, 2)
            .with_parent(Some(StructureId(42))),
    );

    assert_eq!(structures.get(id).unwrap().parent, None);
    assert_eq!(structures.full_path(id), "function orphan");
}

#[test]
fn test_modifiers_are_deduplicated_in_order() {
    let mut structures = FileStructures::new();
    let id = structures.push(
        NewStructure::new(StructureKind::Method, "run", 1, 4).with_modifiers(vec![
            "public".to_string(),
            "static".to_string(),
            "public".to_string(),
        ]),
    );

    assert_eq!(structures.get(id).unwrap().modifiers, vec!["public", "static"]);
}

#[test]
fn test_signature_for_callables_and_types() {
    let (structures, class, method) = user_service();

    assert_eq!(structures.get(class).unwrap().signature(), "UserService");
    assert_eq!(
        structures.get(method).unwrap().signature(),
        "addUser(String name, String email) -> boolean"
    );
}

#[test]
fn test_empty_return_type_is_ignored() {
    let mut structures = FileStructures::new();
    let id = structures.push(
        NewStructure::new(StructureKind::Function, "main", 1, 3).with_return_type(Some(String::new())),
    );

    assert_eq!(structures.get(id).unwrap().signature(), "main()");
}
