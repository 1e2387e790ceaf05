//! Pure dense-grid math: column counts, per-item positions, content height.
//!
//! These functions know nothing about open rows; that variability lives in
//! [`crate::layout::rows`]. They are the fallback geometry for a fully
//! closed grid and the source of the column count everything else uses.
//!
//! All inputs are pixels; degenerate inputs clamp instead of erroring.

use crate::config::Metrics;
use crate::layout::types::Position;

/// Number of grid columns that fit in `container_width`.
///
/// `columns = max(1, floor((width + gap) / (card_width + gap)))` - the
/// trailing card needs no gap after it, hence the `+ gap` on the width.
/// Never returns 0, so it is always safe as a divisor (a zero-width
/// container lays out a single ragged column).
pub fn columns(container_width: usize, metrics: &Metrics) -> usize {
    ((container_width + metrics.gap) / metrics.stride_x()).max(1)
}

/// Number of dense rows needed for `item_count` items at `columns` columns.
pub fn rows(item_count: usize, columns: usize) -> usize {
    item_count.div_ceil(columns.max(1))
}

/// Absolute position of item `index` in a fully dense grid.
pub fn position_of(index: usize, columns: usize, metrics: &Metrics) -> Position {
    let columns = columns.max(1);
    let col = index % columns;
    let row = index / columns;
    Position {
        left: metrics.gap + col * metrics.stride_x(),
        top: metrics.gap + row * (metrics.card_height + metrics.gap),
    }
}

/// Total content height of a fully dense grid.
///
/// An empty collection still reserves one row's worth of height so the
/// empty-state layout does not collapse.
pub fn content_height(item_count: usize, columns: usize, metrics: &Metrics) -> usize {
    let row_count = rows(item_count, columns);
    if row_count == 0 {
        metrics.gap * 2 + metrics.card_height
    } else {
        metrics.gap + row_count * (metrics.card_height + metrics.gap)
    }
}
