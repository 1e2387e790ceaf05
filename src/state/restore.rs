//! ScrollRestoreController - scroll capture/replay across open transitions.
//!
//! Opening an item reflows the grid (its row balloons), so the controller
//! splits the work: the state change flags a pending jump immediately, and
//! the jump itself runs only once the dependent layout pass has produced
//! the open row (`layout_settled`). A pending jump whose item is no longer
//! the open one by then is stale and silently discarded.
//!
//! Closing restores a sensible offset: snap above the closing row when it
//! sits above the viewport, keep the offset when the row hangs below, and
//! otherwise replay the scroll captured before the open.
//!
//! Direct open->open replacement never passes through a close, so the
//! naive capture-before/restore-after pairing breaks. Instead, after the
//! replacement row is laid out and jumped to, a compensated lock
//! `scroll - (open_height - closed_height) - gap` is captured; it restores
//! to a visually stable position if the item is later closed outright.

use crate::config::Metrics;
use crate::layout::rows::RowModel;
use crate::layout::types::ViewMode;
use crate::model::ItemId;
use crate::state::jump;

/// A jump scheduled for after the next layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingJump {
    /// Item the jump targets; must still be the open item when it fires.
    id: ItemId,
    /// Capture a compensated post-open lock after jumping (replace path).
    compensate: bool,
}

/// Scroll capture/replay state machine for open/close/replace transitions.
#[derive(Debug, Clone, Default)]
pub struct ScrollRestoreController {
    /// Offset to replay when the open item closes in place.
    pre_open_scroll: Option<usize>,
    /// Jump waiting for its layout pass.
    pending: Option<PendingJump>,
}

impl ScrollRestoreController {
    /// Controller with no captured state.
    pub fn new() -> Self {
        Self::default()
    }

    /// An item began opening from a closed slot: capture the current offset
    /// and schedule a jump to the item for the next layout pass.
    pub fn note_opened(&mut self, id: ItemId, current_scroll: usize) {
        self.pre_open_scroll = Some(current_scroll);
        self.pending = Some(PendingJump {
            id,
            compensate: false,
        });
    }

    /// An open item was replaced directly by `next`.
    ///
    /// No pre-open capture happens here - the lock is computed after the
    /// new row is laid out and scrolled into view.
    pub fn note_replaced(&mut self, next: ItemId) {
        self.pending = Some(PendingJump {
            id: next,
            compensate: true,
        });
    }

    /// Run the deferred jump once the open row's layout exists.
    ///
    /// Returns the new scroll offset, or `None` when no scroll is needed
    /// (including the stale-pending and nothing-pending cases).
    pub fn layout_settled(
        &mut self,
        open_id: Option<&ItemId>,
        model: &RowModel,
        metrics: &Metrics,
        viewport_height: usize,
        current_scroll: usize,
    ) -> Option<usize> {
        let pending = self.pending.take()?;
        if open_id != Some(&pending.id) {
            tracing::debug!(stale = %pending.id, "discarding stale pending jump");
            return None;
        }
        let open_row = model.open_row()?;

        let jumped =
            jump::jump_offset(model, open_row, metrics.gap, viewport_height, current_scroll);
        let settled_scroll = jumped.unwrap_or(current_scroll);

        if pending.compensate {
            let open_height = model.row_height(open_row);
            let closed = metrics.closed_row_height(model.mode());
            let lock = settled_scroll
                .saturating_sub(open_height - closed)
                .saturating_sub(metrics.gap);
            tracing::debug!(lock, "captured compensated post-open lock");
            self.pre_open_scroll = Some(lock);
        }

        jumped
    }

    /// The open item is closing: pick the offset the viewport should land
    /// on, evaluated against the current (still-open) layout.
    ///
    /// Consumes the captured pre-open lock and discards any pending jump.
    pub fn close_target(
        &mut self,
        model: &RowModel,
        metrics: &Metrics,
        viewport_height: usize,
        current_scroll: usize,
    ) -> usize {
        self.pending = None;
        let captured = self.pre_open_scroll.take();

        let Some(open_row) = model.open_row() else {
            // Row already gone (e.g. filtered away); nothing to reason about.
            return captured.unwrap_or(current_scroll);
        };

        let row_top = model.row_top(open_row);
        let row_bottom = row_top + model.row_height(open_row);

        if row_top < current_scroll {
            // Row is above the viewport: snap to just above it.
            match model.mode() {
                ViewMode::Grid => row_top.saturating_sub(metrics.gap),
                ViewMode::List => row_top,
            }
        } else if row_bottom > current_scroll + viewport_height + metrics.gap {
            // Row hangs below the viewport: stay put. The gap of slack keeps
            // a freshly-jumped-to open row (sitting at top - gap) on the
            // restore path instead.
            current_scroll
        } else {
            captured.unwrap_or(current_scroll)
        }
    }

    /// Discard any pending jump (e.g. the open item changed again before
    /// its layout pass completed).
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Item the pending jump targets, if one is scheduled.
    pub fn pending_item(&self) -> Option<&ItemId> {
        self.pending.as_ref().map(|p| &p.id)
    }

    /// The captured restore offset, if any.
    pub fn captured_scroll(&self) -> Option<usize> {
        self.pre_open_scroll
    }
}
