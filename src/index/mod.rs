//! Line index: resolves a line number to its most specific structure.
//!
//! Ownership of a line goes to the containing structure with the smallest
//! `end_line - start_line`; equal widths prefer the structure deeper in the
//! parent chain, and after that the one extracted first. The index is built
//! once per file and is read-only afterwards.

#[cfg(test)]
mod tests;

use crate::structure::{FileStructures, Structure, StructureId};

/// Dense line-to-owner table covering `first_line..first_line + owners.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    first_line: usize,
    owners: Vec<Option<StructureId>>,
}

impl LineIndex {
    /// Build the index for one file's structures.
    ///
    /// Structures are painted onto the line table from the widest to the
    /// narrowest, so every line ends up owned by its best candidate. The cost
    /// is the sum of all ranges (lines times nesting depth), not lines times
    /// structures.
    pub fn build(structures: &FileStructures) -> Self {
        let (Some(first_line), Some(last_line)) = (
            structures.iter().map(|s| s.start_line).min(),
            structures.iter().map(|s| s.end_line).max(),
        ) else {
            return Self::default();
        };

        // Paint order: widest first, then shallowest, then later-extracted, so
        // the narrowest, deepest, earliest candidate is painted last.
        let mut order: Vec<(&Structure, usize)> = structures
            .iter()
            .map(|s| (s, structures.depth(s.id)))
            .collect();
        order.sort_by(|(a, a_depth), (b, b_depth)| {
            b.width()
                .cmp(&a.width())
                .then(a_depth.cmp(b_depth))
                .then(b.id.cmp(&a.id))
        });

        let mut owners = vec![None; last_line - first_line + 1];
        for (structure, _) in order {
            let from = structure.start_line - first_line;
            let to = structure.end_line - first_line;
            owners[from..=to].fill(Some(structure.id));
        }

        Self { first_line, owners }
    }

    /// The most specific structure containing `line_num`, if any.
    pub fn query(&self, line_num: usize) -> Option<StructureId> {
        let offset = line_num.checked_sub(self.first_line)?;
        self.owners.get(offset).copied().flatten()
    }

    /// Number of lines covered by at least one structure.
    pub fn covered_lines(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }
}

/// A file's structures together with their line index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedFile {
    structures: FileStructures,
    index: LineIndex,
}

impl IndexedFile {
    pub fn new(structures: FileStructures) -> Self {
        let index = LineIndex::build(&structures);
        Self { structures, index }
    }

    pub fn structures(&self) -> &FileStructures {
        &self.structures
    }

    pub fn get(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(id)
    }

    pub fn query(&self, line_num: usize) -> Option<StructureId> {
        self.index.query(line_num)
    }

    /// The most specific structure containing `line_num`, if any.
    pub fn structure_at(&self, line_num: usize) -> Option<&Structure> {
        self.query(line_num).and_then(|id| self.structures.get(id))
    }

    pub fn full_path(&self, id: StructureId) -> String {
        self.structures.full_path(id)
    }

    pub fn covered_lines(&self) -> usize {
        self.index.covered_lines()
    }
}
