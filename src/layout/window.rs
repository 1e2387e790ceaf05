//! VirtualWindow - the contiguous item range that must stay mounted.
//!
//! The visible band is the viewport extended by the overscan margins and
//! clamped to the content box. Rows are found via the fenwick offsets, then
//! mapped to item indices through each row's item range - open rows hold a
//! single item, so `row * columns` arithmetic would be wrong here.
//!
//! Queries are memoized on the full input key; the scroll handler upstream
//! coalesces raw scroll events to frame cadence, so at most one recompute
//! happens per frame.

use crate::layout::rows::RowModel;
use crate::layout::types::{ItemIndex, Overscan};

/// Half-open index interval `[start, end)` of items currently mounted.
///
/// # Invariants
/// - `start_index <= end_index`
/// - `end_index <= item_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// Index of first mounted item (inclusive).
    pub start_index: ItemIndex,
    /// Index one past the last mounted item (exclusive).
    pub end_index: ItemIndex,
}

impl VisibleRange {
    /// Create a range. Debug-asserts the ordering invariant.
    pub fn new(start_index: ItemIndex, end_index: ItemIndex) -> Self {
        debug_assert!(
            start_index <= end_index,
            "visible range inverted: {} > {}",
            start_index.get(),
            end_index.get()
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// Empty range positioned at `index`.
    pub fn empty_at(index: usize) -> Self {
        Self::new(ItemIndex::new(index), ItemIndex::new(index))
    }

    /// Number of mounted items.
    pub fn len(&self) -> usize {
        self.end_index.get() - self.start_index.get()
    }

    /// True when nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Whether the given item index is inside the range.
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.start_index <= index && index < self.end_index
    }

    /// Iterate the mounted item indices.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> {
        (self.start_index.get()..self.end_index.get()).map(ItemIndex::new)
    }
}

/// Inputs a window result depends on; cache is valid only for an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowKey {
    scroll: usize,
    viewport_height: usize,
    content_height: usize,
    row_count: usize,
    columns: usize,
    item_count: usize,
    overscan: Overscan,
}

/// Memoizing visible-range calculator.
#[derive(Debug, Default)]
pub struct VirtualWindow {
    cached: Option<(WindowKey, VisibleRange)>,
}

impl VirtualWindow {
    /// Create a calculator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible range for the given scroll state, memoized.
    pub fn query(
        &mut self,
        model: &RowModel,
        scroll: usize,
        viewport_height: usize,
        overscan: Overscan,
    ) -> VisibleRange {
        let key = WindowKey {
            scroll,
            viewport_height,
            content_height: model.content_height(),
            row_count: model.row_count(),
            columns: model.columns(),
            item_count: model.item_count(),
            overscan,
        };
        if let Some((cached_key, cached_range)) = self.cached {
            if cached_key == key {
                return cached_range;
            }
        }

        let range = compute(model, scroll, viewport_height, overscan);
        tracing::trace!(
            scroll,
            start = range.start_index.get(),
            end = range.end_index.get(),
            "visible range recomputed"
        );
        self.cached = Some((key, range));
        range
    }

    /// Drop the cached result (e.g. after an in-place row height patch).
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Visible range for the given scroll state, uncached.
pub fn compute(
    model: &RowModel,
    scroll: usize,
    viewport_height: usize,
    overscan: Overscan,
) -> VisibleRange {
    let item_count = model.item_count();
    if item_count == 0 || model.row_count() == 0 {
        return VisibleRange::empty_at(0);
    }

    let content_height = model.content_height();
    let band_start = scroll.saturating_sub(overscan.top);
    let band_end = content_height.min(scroll.saturating_add(viewport_height + overscan.bottom));

    // Scrolled entirely past the content: mount nothing, clamped to the end.
    let Some(start_row) = model.row_at_offset(band_start) else {
        return VisibleRange::empty_at(item_count);
    };
    if band_end <= band_start {
        return VisibleRange::empty_at(model.rows()[start_row.get()].items.start);
    }

    let end_row_exclusive = model
        .first_row_at_or_after(band_end)
        .max(start_row.get() + 1)
        .min(model.row_count());

    let start_item = model.rows()[start_row.get()].items.start;
    let end_item = model.rows()[end_row_exclusive - 1].items.end;
    VisibleRange::new(ItemIndex::new(start_item), ItemIndex::new(end_item.min(item_count)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Metrics;
    use crate::layout::types::ViewMode;
    use proptest::prelude::*;

    fn metrics() -> Metrics {
        Metrics::default()
    }

    fn no_overscan() -> Overscan {
        Overscan { top: 0, bottom: 0 }
    }

    fn model(count: usize, open: Option<usize>, cols: usize) -> RowModel {
        RowModel::build(count, open, cols, &metrics(), ViewMode::Grid, 800)
    }

    #[test]
    fn empty_collection_mounts_nothing() {
        let model = model(0, None, 4);
        let range = compute(&model, 0, 800, no_overscan());
        assert_eq!(range, VisibleRange::empty_at(0));
    }

    #[test]
    fn top_of_grid_mounts_leading_rows() {
        let m = metrics();
        let model = model(100, None, 4);
        // Viewport shows gap + ~3.9 row strides -> rows 0..4 -> items 0..16.
        let range = compute(&model, 0, 4 * (m.card_height + m.gap), no_overscan());
        assert_eq!(range.start_index, ItemIndex::new(0));
        assert_eq!(range.end_index, ItemIndex::new(16));
    }

    #[test]
    fn overscan_extends_the_band() {
        let m = metrics();
        let grid = model(100, None, 4);
        let stride = m.card_height + m.gap;
        let narrow = compute(&grid, 2 * stride, stride, no_overscan());
        let wide = compute(
            &grid,
            2 * stride,
            stride,
            Overscan {
                top: stride,
                bottom: stride,
            },
        );
        assert!(wide.start_index < narrow.start_index);
        assert!(wide.end_index > narrow.end_index);
    }

    #[test]
    fn scroll_past_end_clamps_to_empty_range_at_count() {
        let grid = model(20, None, 4);
        let range = compute(&grid, grid.content_height() + 500, 800, no_overscan());
        assert_eq!(range, VisibleRange::empty_at(20));
    }

    #[test]
    fn open_row_maps_to_single_item() {
        let grid = model(100, Some(10), 4);
        let open_row = grid.open_row().unwrap();
        let top = grid.row_top(open_row);
        // A viewport sitting fully inside the tall open row mounts only it.
        let range = compute(&grid, top + 10, 400, no_overscan());
        assert_eq!(range.start_index, ItemIndex::new(10));
        assert_eq!(range.end_index, ItemIndex::new(11));
    }

    #[test]
    fn memoized_query_matches_uncached_compute() {
        let grid = model(500, Some(77), 9);
        let mut window = VirtualWindow::new();
        for scroll in [0usize, 100, 3000, 3000, 12_000] {
            let cached = window.query(&grid, scroll, 900, metrics().overscan);
            let fresh = compute(&grid, scroll, 900, metrics().overscan);
            assert_eq!(cached, fresh, "scroll {scroll}");
        }
    }

    proptest! {
        /// Range containment: 0 <= start <= end <= item_count, always.
        #[test]
        fn prop_range_contained(
            count in 0usize..3_000,
            cols in 1usize..20,
            open in prop::option::of(0usize..3_000),
            scroll in 0usize..1_000_000,
            viewport in 0usize..2_000,
        ) {
            let open = open.filter(|&i| i < count);
            let grid = model(count, open, cols);
            let range = compute(&grid, scroll, viewport, metrics().overscan);
            prop_assert!(range.start_index <= range.end_index);
            prop_assert!(range.end_index.get() <= count);
        }

        /// Every row intersecting the un-overscanned viewport is mounted.
        #[test]
        fn prop_visible_rows_are_mounted(
            count in 1usize..2_000,
            cols in 1usize..20,
            scroll in 0usize..200_000,
            viewport in 1usize..2_000,
        ) {
            let grid = model(count, None, cols);
            let range = compute(&grid, scroll, viewport, no_overscan());
            for (row_index, row) in grid.rows().iter().enumerate() {
                let top = grid.row_top(crate::layout::types::RowIndex::new(row_index));
                let bottom = top + row.height;
                let intersects = top < scroll + viewport && bottom > scroll;
                if intersects {
                    prop_assert!(range.contains(ItemIndex::new(row.items.start)));
                    prop_assert!(range.contains(ItemIndex::new(row.items.end - 1)));
                }
            }
        }
    }
}
