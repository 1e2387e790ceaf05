//! ScrollJump - imperative "bring this row into view" primitive.
//!
//! Pure: computes the scroll offset a jump should land on, or `None` when
//! the row is already fully visible. Both the restore controller and the
//! alphabet rail delegate here.

use crate::layout::rows::RowModel;
use crate::layout::types::RowIndex;

/// Target scroll offset to bring `row` into view, or `None` if no scroll
/// is needed.
///
/// Rules:
/// - Row above the viewport: align its top with the viewport top, minus one
///   gap of breathing room.
/// - Row below the viewport: align its bottom with the viewport bottom -
///   unless the row is at least viewport-tall (an open row), in which case
///   top-alignment wins, since the bottom can never fit anyway.
/// - Otherwise: no-op.
///
/// Idempotent: applying the returned offset and calling again with no
/// layout change yields `None`.
pub fn jump_offset(
    model: &RowModel,
    row: RowIndex,
    gap: usize,
    viewport_height: usize,
    current_scroll: usize,
) -> Option<usize> {
    let top = model.row_top(row);
    let height = model.row_height(row);
    let bottom = top + height;
    let target_top = top.saturating_sub(gap);

    let target = if current_scroll > target_top {
        // Row (or its breathing gap) is above the viewport top.
        target_top
    } else if bottom > current_scroll + viewport_height {
        if height + gap >= viewport_height {
            // Taller than the viewport: bottom-alignment would hide the top.
            target_top
        } else {
            bottom - viewport_height
        }
    } else {
        return None;
    };

    (target != current_scroll).then_some(target)
}

/// Convenience wrapper: jump to the row holding item `index`.
///
/// Returns `None` for out-of-range indices (stale jump targets are
/// silently skipped) as well as for already-visible rows.
pub fn jump_to_item(
    model: &RowModel,
    index: usize,
    gap: usize,
    viewport_height: usize,
    current_scroll: usize,
) -> Option<usize> {
    let row = model.row_of_item(index)?;
    jump_offset(model, row, gap, viewport_height, current_scroll)
}
