//! RowModel - grouping of item indices into dense and open rows.
//!
//! Items are walked in sorted order and packed `columns` to a row, except
//! that the open item (at most one, enforced by the open-item controller)
//! gets a dedicated full-width row whose height balloons to at least the
//! viewport height. The partial dense row before an open item is flushed
//! as-is, so the open row appears exactly where dense packing would have
//! put the item.
//!
//! Row tops live in a [`RowOffsets`] fenwick index so the open row's height
//! can follow viewport resizes without a full rebuild.

use crate::config::Metrics;
use crate::layout::offsets::RowOffsets;
use crate::layout::types::{Position, RowIndex, ViewMode};
use std::ops::Range;

/// What a row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A dense pack of up to `columns` closed items.
    Dense,
    /// A dedicated full-width band for the single open item.
    Open,
}

/// One horizontal band of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Contiguous item indices this row holds (half-open).
    pub items: Range<usize>,
    /// Dense pack or open band.
    pub kind: RowKind,
    /// Visual height in pixels (excludes the inter-row gap).
    pub height: usize,
}

/// The computed row structure for one (item array, open id, geometry) state.
///
/// Rebuilt whenever the item count, column count, view mode, or open item
/// changes; only the open row's height is patched in place on viewport
/// resize.
#[derive(Debug, Clone)]
pub struct RowModel {
    rows: Vec<Row>,
    offsets: RowOffsets,
    row_of_item: Vec<usize>,
    columns: usize,
    mode: ViewMode,
    metrics: Metrics,
    /// Index of the open row, if any.
    open_row: Option<usize>,
    /// Leading offset before the first row (the outer gap in grid view).
    lead: usize,
}

impl RowModel {
    /// Build the row structure.
    ///
    /// `open_index` is the position of the open item in the sorted array,
    /// already validated against the current array by the caller (a stale id
    /// must be resolved to `None` upstream).
    pub fn build(
        item_count: usize,
        open_index: Option<usize>,
        columns: usize,
        metrics: &Metrics,
        mode: ViewMode,
        viewport_height: usize,
    ) -> Self {
        let columns = columns.max(1);
        let closed = metrics.closed_row_height(mode);
        let open_height = closed.max(viewport_height);

        let mut rows = Vec::with_capacity(item_count / columns + 2);
        let mut row_of_item = vec![0usize; item_count];
        let mut open_row = None;

        let mut start = 0;
        for index in 0..item_count {
            if open_index == Some(index) {
                // Flush the partial dense row before the open item.
                if start < index {
                    push_row(&mut rows, &mut row_of_item, start..index, RowKind::Dense, closed);
                }
                open_row = Some(rows.len());
                push_row(
                    &mut rows,
                    &mut row_of_item,
                    index..index + 1,
                    RowKind::Open,
                    open_height,
                );
                start = index + 1;
            } else if index + 1 - start == columns {
                push_row(&mut rows, &mut row_of_item, start..index + 1, RowKind::Dense, closed);
                start = index + 1;
            }
        }
        if start < item_count {
            push_row(
                &mut rows,
                &mut row_of_item,
                start..item_count,
                RowKind::Dense,
                closed,
            );
        }

        let (lead, row_gap) = match mode {
            ViewMode::Grid => (metrics.gap, metrics.gap),
            ViewMode::List => (0, 0),
        };

        let mut offsets = RowOffsets::new(rows.len());
        for row in &rows {
            offsets.push(row.height + row_gap);
        }

        Self {
            rows,
            offsets,
            row_of_item,
            columns,
            mode,
            metrics: *metrics,
            open_row,
            lead,
        }
    }

    /// Column count this model was built with.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// View mode this model was built with.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of items across all rows.
    pub fn item_count(&self) -> usize {
        self.row_of_item.len()
    }

    /// The rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The open row's index, if an item is open.
    pub fn open_row(&self) -> Option<RowIndex> {
        self.open_row.map(RowIndex::new)
    }

    /// Absolute top of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()`.
    pub fn row_top(&self, row: RowIndex) -> usize {
        self.lead + self.offsets.top_of(row.get())
    }

    /// Visual height of row `row` (gap excluded).
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()`.
    pub fn row_height(&self, row: RowIndex) -> usize {
        self.rows[row.get()].height
    }

    /// Row holding item `index`, if the index is in range.
    pub fn row_of_item(&self, index: usize) -> Option<RowIndex> {
        self.row_of_item.get(index).copied().map(RowIndex::new)
    }

    /// Absolute position of item `index`, if in range.
    ///
    /// Open rows and list rows span the full width and sit at `left = 0`
    /// (list) or the outer gap (grid); dense grid items step one column
    /// stride per position within the row.
    pub fn item_position(&self, index: usize) -> Option<Position> {
        let row = self.row_of_item(index)?;
        let top = self.row_top(row);
        let entry = &self.rows[row.get()];
        let left = match (self.mode, entry.kind) {
            (ViewMode::List, _) => 0,
            (ViewMode::Grid, RowKind::Open) => self.metrics.gap,
            (ViewMode::Grid, RowKind::Dense) => {
                let col = index - entry.items.start;
                self.metrics.gap + col * self.metrics.stride_x()
            }
        };
        Some(Position::new(left, top))
    }

    /// Absolute positions for every item, in item order.
    pub fn positions(&self) -> Vec<Position> {
        (0..self.item_count())
            .map(|index| self.item_position(index).unwrap_or_default())
            .collect()
    }

    /// Total content height.
    ///
    /// An empty model still reserves one closed row's worth of height so the
    /// empty-state layout stays stable.
    pub fn content_height(&self) -> usize {
        if self.rows.is_empty() {
            return match self.mode {
                ViewMode::Grid => self.metrics.gap * 2 + self.metrics.card_height,
                ViewMode::List => self.metrics.row_height,
            };
        }
        self.lead + self.offsets.total()
    }

    /// Re-derive the open row's height after a viewport resize.
    ///
    /// O(log n): only the fenwick index entry for the open row changes.
    /// No-op when nothing is open.
    pub fn set_viewport_height(&mut self, viewport_height: usize) {
        let Some(open) = self.open_row else {
            return;
        };
        let closed = self.metrics.closed_row_height(self.mode);
        let height = closed.max(viewport_height);
        if self.rows[open].height != height {
            let row_gap = match self.mode {
                ViewMode::Grid => self.metrics.gap,
                ViewMode::List => 0,
            };
            self.rows[open].height = height;
            self.offsets.set(open, height + row_gap);
        }
    }

    /// First row whose bottom edge (gap included) is below `y`.
    ///
    /// Returns `None` when `y` is at or past the end of the content.
    pub fn row_at_offset(&self, y: usize) -> Option<RowIndex> {
        if self.rows.is_empty() {
            return None;
        }
        if y < self.lead {
            return Some(RowIndex::new(0));
        }
        self.offsets.row_at(y - self.lead).map(RowIndex::new)
    }

    /// Item nearest the vertical offset `y`: the middle item of the row
    /// covering `y`, with past-the-end offsets clamping to the last row.
    ///
    /// Returns `None` only for an empty model.
    pub fn item_near_offset(&self, y: usize) -> Option<usize> {
        let row = self
            .row_at_offset(y)
            .map(|row| row.get())
            .or_else(|| self.rows.len().checked_sub(1))?;
        let items = &self.rows[row].items;
        Some(items.start + items.len() / 2)
    }

    /// First row whose top is at or below (>=) `y`; `row_count()` if none.
    pub fn first_row_at_or_after(&self, y: usize) -> usize {
        if y <= self.lead {
            return 0;
        }
        self.offsets.first_row_at_or_after(y - self.lead)
    }
}

fn push_row(
    rows: &mut Vec<Row>,
    row_of_item: &mut [usize],
    items: Range<usize>,
    kind: RowKind,
    height: usize,
) {
    let row = rows.len();
    for slot in &mut row_of_item[items.clone()] {
        *slot = row;
    }
    rows.push(Row { items, kind, height });
}
