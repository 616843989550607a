//! Tests for line ownership resolution.

use super::*;
use crate::structure::{NewStructure, StructureKind};

/// class UserService 5-20 > method add_user 10-16 > function validate 12-13,
/// plus a top-level function 24-30.
fn sample() -> (FileStructures, [StructureId; 4]) {
    let mut s = FileStructures::new();
    let class = s.push(NewStructure::new(StructureKind::Class, "UserService", 5, 20));
    let method = s.push(
        NewStructure::new(StructureKind::Method, "add_user", 10, 16).with_parent(Some(class)),
    );
    let inner = s.push(
        NewStructure::new(StructureKind::Function, "validate", 12, 13).with_parent(Some(method)),
    );
    let top = s.push(NewStructure::new(StructureKind::Function, "main", 24, 30));
    (s, [class, method, inner, top])
}

/// Reference answer: scan every structure for each line.
fn brute_force(structures: &FileStructures, line: usize) -> Option<StructureId> {
    structures
        .iter()
        .filter(|s| s.start_line <= line && line <= s.end_line)
        .min_by(|a, b| {
            a.width()
                .cmp(&b.width())
                .then(structures.depth(b.id).cmp(&structures.depth(a.id)))
                .then(a.id.cmp(&b.id))
        })
        .map(|s| s.id)
}

#[test]
fn test_single_structure_owns_its_lines() {
    let (s, [class, _, _, top]) = sample();
    let index = LineIndex::build(&s);

    assert_eq!(index.query(5), Some(class));
    assert_eq!(index.query(9), Some(class));
    assert_eq!(index.query(20), Some(class));
    assert_eq!(index.query(24), Some(top));
    assert_eq!(index.query(30), Some(top));
}

#[test]
fn test_nested_structure_wins() {
    let (s, [class, method, inner, _]) = sample();
    let index = LineIndex::build(&s);

    assert_eq!(index.query(10), Some(method));
    assert_eq!(index.query(11), Some(method));
    assert_eq!(index.query(12), Some(inner));
    assert_eq!(index.query(13), Some(inner));
    assert_eq!(index.query(14), Some(method));
    assert_eq!(index.query(17), Some(class));
}

#[test]
fn test_lines_outside_structures_are_unowned() {
    let (s, _) = sample();
    let index = LineIndex::build(&s);

    assert_eq!(index.query(0), None);
    assert_eq!(index.query(1), None);
    assert_eq!(index.query(4), None);
    assert_eq!(index.query(21), None);
    assert_eq!(index.query(23), None);
    assert_eq!(index.query(31), None);
    assert_eq!(index.query(10_000), None);
}

#[test]
fn test_identical_ranges_prefer_deeper_structure() {
    let mut s = FileStructures::new();
    let outer = s.push(NewStructure::new(StructureKind::Class, "Wrapper", 3, 3));
    let inner = s.push(
        NewStructure::new(StructureKind::Method, "only", 3, 3).with_parent(Some(outer)),
    );
    let index = LineIndex::build(&s);

    assert_eq!(index.query(3), Some(inner));
}

#[test]
fn test_equal_width_siblings_prefer_first_extracted() {
    let mut s = FileStructures::new();
    let first = s.push(NewStructure::new(StructureKind::Function, "a", 1, 4));
    let _second = s.push(NewStructure::new(StructureKind::Function, "b", 1, 4));
    let index = LineIndex::build(&s);

    assert_eq!(index.query(2), Some(first));
}

#[test]
fn test_empty_structures_build_empty_index() {
    let index = LineIndex::build(&FileStructures::new());

    assert_eq!(index.query(1), None);
    assert_eq!(index.covered_lines(), 0);
}

#[test]
fn test_covered_lines_skips_gaps() {
    let (s, _) = sample();
    let index = LineIndex::build(&s);

    // 5..=20 and 24..=30
    assert_eq!(index.covered_lines(), 16 + 7);
}

#[test]
fn test_matches_brute_force_on_deep_nesting() {
    let mut s = FileStructures::new();
    let mut parent = None;
    // Ten nested levels, each one line narrower on both sides.
    for level in 0..10 {
        let id = s.push(
            NewStructure::new(StructureKind::Class, format!("L{}", level), 1 + level, 40 - level)
                .with_parent(parent),
        );
        parent = Some(id);
    }
    // Siblings inside the innermost level.
    s.push(NewStructure::new(StructureKind::Method, "m1", 12, 15).with_parent(parent));
    s.push(NewStructure::new(StructureKind::Method, "m2", 17, 17).with_parent(parent));
    s.push(NewStructure::new(StructureKind::Function, "free", 45, 50));

    let index = LineIndex::build(&s);
    for line in 0..=55 {
        assert_eq!(index.query(line), brute_force(&s, line), "line {}", line);
    }
}

#[test]
fn test_indexed_file_resolves_structures() {
    let (s, [_, method, _, _]) = sample();
    let file = IndexedFile::new(s);

    let owner = file.structure_at(15).unwrap();
    assert_eq!(owner.id, method);
    assert_eq!(owner.name, "add_user");
    assert_eq!(file.full_path(method), "class UserService > method add_user");
    assert!(file.structure_at(2).is_none());
}
