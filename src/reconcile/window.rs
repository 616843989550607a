use super::attribute::DiffChange;
use crate::diff::ChangeType;

/// Gap markers for a sorted run of line numbers.
///
/// Entry `i` is true when `line_nums[i]` is at least `min_gap` lines away
/// from `line_nums[i - 1]`; the first entry is never a gap.
pub fn mark_gaps(line_nums: &[usize], min_gap: usize) -> Vec<bool> {
    std::iter::once(false)
        .chain(
            line_nums
                .windows(2)
                .map(|pair| pair[1].abs_diff(pair[0]) >= min_gap),
        )
        .take(line_nums.len())
        .collect()
}

/// What a display window shows at one line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLine<'a> {
    /// A context line, or a deleted/added pair with the same trimmed text.
    Unchanged(&'a str),
    Changed(&'a DiffChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry<'a> {
    pub line_num: usize,
    /// The presentation layer elides the lines between this entry and the previous one.
    pub gap_before: bool,
    pub line: WindowLine<'a>,
}

/// Lines to show for one group: its changes plus `context` surrounding lines.
///
/// `changes` must be sorted as [`super::group_changes`] sorts them. Context
/// text comes from `source_lines` (the new side); without it only the changed
/// lines are shown.
pub fn display_window<'a>(
    changes: &[&'a DiffChange],
    source_lines: Option<&[&'a str]>,
    context: usize,
    min_gap: usize,
) -> Vec<WindowEntry<'a>> {
    let source_lines = source_lines.unwrap_or_default();

    let mut line_nums: Vec<usize> = changes
        .iter()
        .flat_map(|c| {
            let from = c.line_num.saturating_sub(context).max(1);
            let to = (c.line_num + context).min(source_lines.len());
            (from..=to).chain(std::iter::once(c.line_num))
        })
        .collect();
    line_nums.sort_unstable();
    line_nums.dedup();

    let gaps = mark_gaps(&line_nums, min_gap);
    let mut entries = Vec::new();

    for (&line_num, gap_before) in line_nums.iter().zip(gaps) {
        let at_line: Vec<&'a DiffChange> = changes
            .iter()
            .copied()
            .filter(|c| c.line_num == line_num)
            .collect();

        if at_line.is_empty() {
            if let Some(&text) = source_lines.get(line_num - 1) {
                entries.push(WindowEntry {
                    line_num,
                    gap_before,
                    line: WindowLine::Unchanged(text),
                });
            }
            continue;
        }

        if let Some(text) = unchanged_pair(&at_line) {
            entries.push(WindowEntry {
                line_num,
                gap_before,
                line: WindowLine::Unchanged(text),
            });
            continue;
        }

        for (i, change) in at_line.into_iter().enumerate() {
            entries.push(WindowEntry {
                line_num,
                gap_before: gap_before && i == 0,
                line: WindowLine::Changed(change),
            });
        }
    }
    entries
}

/// The shared text of a deletion and addition that differ only in trailing whitespace.
fn unchanged_pair<'a>(at_line: &[&'a DiffChange]) -> Option<&'a str> {
    let &[a, b] = at_line else {
        return None;
    };
    let a_text = a.content.trim_end();
    (a.change_type != b.change_type
        && a.change_type == ChangeType::Deletion
        && a_text == b.content.trim_end())
    .then_some(a_text)
}
