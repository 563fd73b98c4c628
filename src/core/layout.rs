//! Column layout for ls output.
//!
//! Given a group of display strings and an optional terminal width, [compute_layout] picks the
//! widest column count whose columns still fit. Entries flow down the first column, then the next
//! (column-major), the same way a classic `ls` lays out its grid.
//!
//! [LayoutPlan::render] turns a plan back into the text lines written to the output.

use unicode_width::UnicodeWidthStr;

/// Cells reserved after every entry inside a column.
pub const COLUMN_GAP: usize = 2;
/// Assumed narrowest entry when bounding the candidate column count by the width.
pub const MIN_ENTRY_WIDTH: usize = 4;

/// Result of the column search for one group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    num_columns: usize,
    // Only columns holding at least one entry; the rest are zero wide.
    column_widths: Vec<usize>,
    entries_per_column: usize,
}

impl LayoutPlan {
    fn single_column(len: usize) -> Self {
        LayoutPlan {
            num_columns: 1,
            column_widths: Vec::new(),
            entries_per_column: len,
        }
    }

    /// Builds the candidate plan for `num_columns` columns and measures each filled column.
    fn candidate<S: AsRef<str>>(num_columns: usize, entries: &[S]) -> Self {
        let entries_per_column = entries.len().div_ceil(num_columns);
        let filled = entries.len().div_ceil(entries_per_column);
        let mut column_widths = vec![0; filled];
        for (i, entry) in entries.iter().enumerate() {
            let column = i / entries_per_column;
            let width = entry.as_ref().width() + COLUMN_GAP;
            if width > column_widths[column] {
                column_widths[column] = width;
            }
        }
        LayoutPlan {
            num_columns,
            column_widths,
            entries_per_column,
        }
    }

    // Accessors

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    #[inline]
    pub fn entries_per_column(&self) -> usize {
        self.entries_per_column
    }

    /// Width of `column`, including the trailing gap. Zero for columns with no entries
    /// and for plans that were never measured (no width known).
    #[inline]
    pub fn column_width(&self, column: usize) -> usize {
        self.column_widths.get(column).copied().unwrap_or(0)
    }

    /// Sum of every column's width, the last one included.
    pub fn total_width(&self) -> usize {
        self.column_widths.iter().sum()
    }

    /// Column and row an entry index lands in.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        if self.entries_per_column == 0 {
            return (0, index);
        }
        (
            index / self.entries_per_column,
            index % self.entries_per_column,
        )
    }

    /// Renders `entries` into rows following this plan.
    ///
    /// Every column except the last is padded out to its width plus [COLUMN_GAP] cells.
    /// A row stops at the first slot past the end of `entries`.
    pub fn render<S: AsRef<str>>(&self, entries: &[S]) -> Vec<String> {
        let num_columns = self.num_columns();
        let mut lines = Vec::with_capacity(self.entries_per_column);
        for row in 0..self.entries_per_column {
            let mut line = String::new();
            for column in 0..num_columns {
                let Some(entry) = entries.get(row + column * self.entries_per_column) else {
                    break;
                };
                let entry = entry.as_ref();
                line.push_str(entry);
                if column < num_columns - 1 {
                    let pad = self.column_width(column) + COLUMN_GAP;
                    line.extend(std::iter::repeat_n(' ', pad.saturating_sub(entry.width())));
                }
            }
            lines.push(line);
        }
        lines
    }
}

/// Chooses the layout for `entries` with the default [MIN_ENTRY_WIDTH].
pub fn compute_layout<S: AsRef<str>>(width: Option<usize>, entries: &[S]) -> LayoutPlan {
    compute_layout_with(width, MIN_ENTRY_WIDTH, entries)
}

/// Chooses the layout for `entries`.
///
/// Without a width every entry gets its own line. With one, candidates from `width /
/// min_entry_width` columns down to two are tried and the first whose total width fits is
/// returned; the single column plan is the floor.
pub fn compute_layout_with<S: AsRef<str>>(
    width: Option<usize>,
    min_entry_width: usize,
    entries: &[S],
) -> LayoutPlan {
    let Some(width) = width else {
        return LayoutPlan::single_column(entries.len());
    };
    if entries.is_empty() {
        return LayoutPlan::single_column(0);
    }
    let max_columns = width / min_entry_width.max(1);
    if max_columns <= 1 {
        return LayoutPlan::single_column(entries.len());
    }
    // From `entries.len()` columns up, every candidate holds one entry per column and needs
    // the same total width, so only the widest of them is measured.
    let mut narrower = max_columns;
    if max_columns >= entries.len() {
        let plan = LayoutPlan::candidate(max_columns, entries);
        if plan.total_width() <= width {
            return plan;
        }
        narrower = entries.len() - 1;
    }
    (2..=narrower)
        .rev()
        .map(|num_columns| LayoutPlan::candidate(num_columns, entries))
        .find(|plan| plan.total_width() <= width)
        .unwrap_or_else(|| LayoutPlan::candidate(1, entries))
}
