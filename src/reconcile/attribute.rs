use crate::diff::{ChangeType, FileDiff, Side};
use crate::index::IndexedFile;
use crate::structure::{Structure, StructureId};
use serde::Serialize;

/// A structure in one side's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StructureRef {
    pub side: Side,
    pub id: StructureId,
}

/// One added or deleted line with its owning structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChange {
    pub file_path: String,
    pub line_num: usize,
    pub content: String,
    pub change_type: ChangeType,
    /// `None` when no structure contains the line or the file has no index.
    pub structure: Option<StructureRef>,
}

/// The line indices available for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndices {
    pub old: Option<IndexedFile>,
    pub new: Option<IndexedFile>,
}

impl FileIndices {
    pub fn new(old: Option<IndexedFile>, new: Option<IndexedFile>) -> Self {
        Self { old, new }
    }

    pub fn side(&self, side: Side) -> Option<&IndexedFile> {
        match side {
            Side::Old => self.old.as_ref(),
            Side::New => self.new.as_ref(),
        }
    }

    /// The index a change is looked up in: its own side's if present,
    /// otherwise the other side's as an approximation.
    pub fn for_change(&self, change_type: ChangeType) -> Option<(Side, &IndexedFile)> {
        let own = change_type.side();
        let other = match own {
            Side::Old => Side::New,
            Side::New => Side::Old,
        };
        self.side(own)
            .map(|index| (own, index))
            .or_else(|| self.side(other).map(|index| (other, index)))
    }

    pub fn resolve(&self, change_type: ChangeType, line_num: usize) -> Option<StructureRef> {
        let (side, index) = self.for_change(change_type)?;
        index
            .structure_at(line_num)
            .map(|structure| StructureRef {
                side,
                id: structure.id,
            })
    }

    pub fn get(&self, structure: StructureRef) -> Option<&Structure> {
        self.side(structure.side)?.get(structure.id)
    }

    pub fn full_path(&self, structure: StructureRef) -> Option<String> {
        self.side(structure.side)
            .filter(|index| index.get(structure.id).is_some())
            .map(|index| index.full_path(structure.id))
    }
}

/// Attribute every changed line of `file` to its most specific structure.
pub fn attribute(file: &FileDiff, indices: &FileIndices) -> Vec<DiffChange> {
    let path = file.path();
    file.lines
        .iter()
        .map(|line| DiffChange {
            file_path: path.to_string(),
            line_num: line.line_num,
            content: line.content.clone(),
            change_type: line.change_type,
            structure: indices.resolve(line.change_type, line.line_num),
        })
        .collect()
}
