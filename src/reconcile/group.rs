use super::attribute::{DiffChange, FileIndices, StructureRef};
use crate::diff::ChangeType;

/// Changes that belong to one structure (or to no structure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeGroup<'a> {
    /// First structure seen for this group; `None` for lines outside any structure.
    pub structure: Option<StructureRef>,
    /// Full path the group is keyed on.
    pub full_path: Option<String>,
    /// Sorted by line number, deletions before additions on the same line.
    pub changes: Vec<&'a DiffChange>,
    pub additions: usize,
    pub deletions: usize,
}

/// Partition one file's changes by structure.
///
/// Old-side and new-side structures with the same full path form one group.
/// Groups appear in the order their first change appears in `changes`.
pub fn group_changes<'a>(changes: &'a [DiffChange], indices: &FileIndices) -> Vec<ChangeGroup<'a>> {
    let mut groups: Vec<ChangeGroup<'a>> = Vec::new();

    for change in changes {
        let full_path = change.structure.and_then(|s| indices.full_path(s));
        let group = match groups.iter().position(|g| g.full_path == full_path) {
            Some(pos) => &mut groups[pos],
            None => {
                groups.push(ChangeGroup {
                    structure: change.structure.filter(|_| full_path.is_some()),
                    full_path,
                    changes: Vec::new(),
                    additions: 0,
                    deletions: 0,
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };

        match change.change_type {
            ChangeType::Addition => group.additions += 1,
            ChangeType::Deletion => group.deletions += 1,
        }
        group.changes.push(change);
    }

    for group in &mut groups {
        group
            .changes
            .sort_by_key(|c| (c.line_num, c.change_type.sort_rank()));
    }
    groups
}

/// Order groups by descending total change count, keeping the original
/// order among equal totals, and keep at most `limit`.
pub fn rank_by_total<T, F>(mut items: Vec<T>, limit: usize, total: F) -> Vec<T>
where
    F: Fn(&T) -> usize,
{
    items.sort_by(|a, b| total(b).cmp(&total(a)));
    items.truncate(limit);
    items
}

/// A structure's change counts within the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureStat<'a> {
    pub file_path: &'a str,
    pub full_path: String,
    pub additions: usize,
    pub deletions: usize,
}

impl StructureStat<'_> {
    pub fn total(&self) -> usize {
        self.additions + self.deletions
    }
}

/// The `limit` most modified structures across files, in traversal order
/// among equal totals. Lines outside any structure are not counted.
pub fn top_structures<'a, I>(files: I, limit: usize) -> Vec<StructureStat<'a>>
where
    I: IntoIterator<Item = (&'a str, &'a [ChangeGroup<'a>])>,
{
    let stats: Vec<StructureStat<'a>> = files
        .into_iter()
        .flat_map(|(file_path, groups)| {
            groups.iter().filter_map(move |group| {
                group.full_path.as_ref().map(|full_path| StructureStat {
                    file_path,
                    full_path: full_path.clone(),
                    additions: group.additions,
                    deletions: group.deletions,
                })
            })
        })
        .collect();

    rank_by_total(stats, limit, StructureStat::total)
}
