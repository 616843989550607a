//! Structure records and the per-file arena that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between levels of a structure's full path.
pub const PATH_SEPARATOR: &str = " > ";

/// Index of a structure inside its [`FileStructures`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StructureId(pub usize);

/// The kind of syntactic scope a structure represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Class,
    Interface,
    Enum,
    Method,
    Constructor,
    Function,
}

impl StructureKind {
    /// Lowercase keyword used in rendered paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Class => "class",
            StructureKind::Interface => "interface",
            StructureKind::Enum => "enum",
            StructureKind::Method => "method",
            StructureKind::Constructor => "constructor",
            StructureKind::Function => "function",
        }
    }

    /// Whether the structure takes parameters (method, constructor, function).
    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            StructureKind::Method | StructureKind::Constructor | StructureKind::Function
        )
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a structure's end line was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// Taken from a syntax tree span or a balanced closing brace.
    Exact,
    /// Heuristic span used when the closing brace was never found.
    Estimated,
}

/// A named syntactic scope with an inclusive, 1-based line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub id: StructureId,
    pub kind: StructureKind,
    pub name: String,
    /// Declared modifiers such as visibility or `static`, without duplicates.
    pub modifiers: Vec<String>,
    /// Decorators or annotations, in declaration order, including the `@`.
    pub decorators: Vec<String>,
    pub params: Vec<String>,
    pub return_type: Option<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub parent: Option<StructureId>,
    pub boundary: BoundaryKind,
}

impl Structure {
    /// Number of lines covered, inclusive of both ends.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Range width used to rank candidates: `end_line - start_line`.
    pub fn width(&self) -> usize {
        self.end_line - self.start_line
    }

    /// Signature for callables (`name(a, b) -> ret`), bare name otherwise.
    pub fn signature(&self) -> String {
        if !self.kind.is_callable() {
            return self.name.clone();
        }

        let mut sig = format!("{}({})", self.name, self.params.join(", "));
        if let Some(ret) = &self.return_type {
            sig.push_str(" -> ");
            sig.push_str(ret);
        }
        sig
    }

    /// One level of a full path: decorators, modifiers, kind, name.
    pub fn label(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.decorators.iter().map(String::as_str));
        parts.extend(self.modifiers.iter().map(String::as_str));
        parts.push(self.kind.as_str());
        parts.push(&self.name);
        parts.join(" ")
    }
}

/// Input record for [`FileStructures::push`].
#[derive(Debug, Clone)]
pub struct NewStructure {
    pub kind: StructureKind,
    pub name: String,
    pub modifiers: Vec<String>,
    pub decorators: Vec<String>,
    pub params: Vec<String>,
    pub return_type: Option<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub parent: Option<StructureId>,
    pub boundary: BoundaryKind,
}

impl NewStructure {
    pub fn new(
        kind: StructureKind,
        name: impl Into<String>,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            decorators: Vec::new(),
            params: Vec::new(),
            return_type: None,
            start_line,
            end_line,
            parent: None,
            boundary: BoundaryKind::Exact,
        }
    }

    pub fn with_parent(mut self, parent: Option<StructureId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_return_type(mut self, return_type: Option<String>) -> Self {
        self.return_type = return_type.filter(|r| !r.is_empty());
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryKind) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Arena of all structures extracted from one file.
///
/// Parents are always pushed before their children, so every `parent` id is
/// smaller than the child's own id and the parent chain is acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStructures {
    structures: Vec<Structure>,
}

impl FileStructures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a structure and return its id.
    ///
    /// A child's range is clamped into its parent's range, and `end_line` is
    /// never allowed below `start_line`. An unknown parent id is dropped.
    pub fn push(&mut self, new: NewStructure) -> StructureId {
        let id = StructureId(self.structures.len());
        let parent = new.parent.filter(|p| p.0 < self.structures.len());

        let mut start_line = new.start_line.max(1);
        let mut end_line = new.end_line.max(start_line);
        if let Some(parent_id) = parent {
            let outer = &self.structures[parent_id.0];
            start_line = start_line.clamp(outer.start_line, outer.end_line);
            end_line = end_line.clamp(start_line, outer.end_line);
        }

        let mut modifiers: Vec<String> = Vec::with_capacity(new.modifiers.len());
        for modifier in new.modifiers {
            if !modifiers.contains(&modifier) {
                modifiers.push(modifier);
            }
        }

        self.structures.push(Structure {
            id,
            kind: new.kind,
            name: new.name,
            modifiers,
            decorators: new.decorators,
            params: new.params,
            return_type: new.return_type,
            start_line,
            end_line,
            parent,
            boundary: new.boundary,
        });
        id
    }

    pub fn get(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// The structure itself followed by each enclosing structure up to the root.
    pub fn ancestors(&self, id: StructureId) -> impl Iterator<Item = &Structure> {
        std::iter::successors(self.get(id), move |s| s.parent.and_then(|p| self.get(p)))
    }

    /// Number of enclosing structures (0 for a top-level structure).
    pub fn depth(&self, id: StructureId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// Human-readable chain from the root to `id`, e.g.
    /// `public class UserService > public method addUser`.
    pub fn full_path(&self, id: StructureId) -> String {
        let mut labels: Vec<String> = self.ancestors(id).map(Structure::label).collect();
        labels.reverse();
        labels.join(PATH_SEPARATOR)
    }
}
