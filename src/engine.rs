//! CardGridEngine - the coordinating context that owns all shared state.
//!
//! The host wires its event sources (resize observer, scroll listener,
//! routing, card clicks) into the engine's operations, then calls
//! [`CardGridEngine::frame`] once per render to get everything the
//! renderer needs. All mutation flows through the engine; no two
//! collaborators ever write the same layout table.
//!
//! The frame pipeline keeps the ordering the controllers depend on:
//! settle coalesced scroll input, rebuild rows for the current open
//! state, run any deferred jump against the fresh layout, then compute
//! the visible window and rail highlight from the final offset.

use crate::assoc::{self, AssociatedLayout, Deck, DeckMemory, DeckPacking};
use crate::config::Metrics;
use crate::layout::{
    grid, Position, RowModel, ViewMode, Viewport, VirtualWindow, VisibleRange,
};
use crate::model::{IndexMap, Item, ItemId};
use crate::state::{
    jump, AlphabetRail, Coalescer, Letter, OpenItemController, RailRegime,
    ScrollRestoreController, SyncAction, ToggleOutcome,
};

/// Everything the renderer consumes for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
    /// Absolute position per item index; mount only those in range.
    pub positions: Vec<Position>,
    /// Half-open item-index interval to keep mounted.
    pub visible_range: VisibleRange,
    /// Id occupying the open slot, if any.
    pub open_id: Option<ItemId>,
    /// Scrollable content height in pixels.
    pub content_height: usize,
    /// Scroll offset after any jump or clamp applied this frame.
    pub scroll: usize,
    /// Highlighted rail letter; `None` when the rail is suppressed.
    pub active_letter: Option<Letter>,
}

/// Resolved associated-content panel for the open item.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedView {
    /// All non-trivial decks, series decks first.
    pub decks: Vec<Deck>,
    /// Key of the deck shown as the primary column.
    pub selected: String,
    /// Deck/stack region split.
    pub layout: AssociatedLayout,
    /// Slot assignment for the selected deck's cards.
    pub packing: DeckPacking,
    /// Remembered scroll offset inside the selected deck.
    pub scroll: usize,
}

/// Owner of the collection's layout and interaction state.
#[derive(Debug)]
pub struct CardGridEngine {
    items: Vec<Item>,
    index: IndexMap,
    metrics: Metrics,
    mode: ViewMode,
    viewport: Viewport,
    scroll: usize,
    model: RowModel,
    window: VirtualWindow,
    open: OpenItemController,
    restore: ScrollRestoreController,
    rail: AlphabetRail,
    rail_regime: RailRegime,
    alphabetical: bool,
    scroll_frames: Coalescer<usize>,
    deck_memory: DeckMemory,
    layout_dirty: bool,
}

impl CardGridEngine {
    /// An empty engine; supply items with [`set_items`](Self::set_items).
    pub fn new(metrics: Metrics) -> Self {
        let model = RowModel::build(0, None, 1, &metrics, ViewMode::Grid, 0);
        Self {
            items: Vec::new(),
            index: IndexMap::default(),
            metrics,
            mode: ViewMode::Grid,
            viewport: Viewport::default(),
            scroll: 0,
            model,
            window: VirtualWindow::new(),
            open: OpenItemController::new(),
            restore: ScrollRestoreController::new(),
            rail: AlphabetRail::build(&[], RailRegime::Flat),
            rail_regime: RailRegime::Flat,
            alphabetical: true,
            scroll_frames: Coalescer::new(),
            deck_memory: DeckMemory::new(),
            layout_dirty: true,
        }
    }

    /// Replace the item array wholesale (the data layer never patches).
    ///
    /// Items must already be sorted; an open item that vanished from the
    /// new array is closed without animation.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.index = IndexMap::build(&items);
        self.items = items;
        self.open.prune(&self.index);
        if self
            .restore
            .pending_item()
            .is_some_and(|id| !self.index.contains(id))
        {
            self.restore.cancel_pending();
        }
        self.layout_dirty = true;
        tracing::debug!(count = self.items.len(), "item array replaced");
    }

    /// Fresh measurement of the scroll container's content box.
    pub fn on_measure(&mut self, width: usize, height: usize) {
        if self.viewport.width != width {
            self.layout_dirty = true;
        }
        if self.viewport.height != height && self.model.open_row().is_some() {
            // Open rows track the viewport height; patch in place rather
            // than rebuilding the whole row table.
            self.model.set_viewport_height(height);
            self.window.invalidate();
        }
        self.viewport = Viewport::new(width, height);
    }

    /// Scroll event from the host, coalesced to at most one per frame.
    pub fn on_scroll(&mut self, offset: usize) {
        self.scroll_frames.request(offset);
    }

    /// Switch between grid and list presentation.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            self.mode = mode;
            self.layout_dirty = true;
        }
    }

    /// Whether the current sort key is alphabetical, and under which
    /// grouping regime. Non-alphabetical sorts suppress the rail.
    pub fn set_sort(&mut self, alphabetical: bool, regime: RailRegime) {
        self.alphabetical = alphabetical;
        self.rail_regime = regime;
    }

    /// Click on an item card: open it, replace the open item with it, or
    /// begin closing it.
    pub fn toggle_item(&mut self, id: ItemId) {
        if !self.index.contains(&id) {
            tracing::warn!(%id, "toggle for unknown item ignored");
            return;
        }
        self.settle_scroll();
        match self.open.toggle(id) {
            ToggleOutcome::Opened(id) => self.restore.note_opened(id, self.scroll),
            ToggleOutcome::Replaced { next, .. } => self.restore.note_replaced(next),
            ToggleOutcome::Closing(_) => self.finish_close(),
        }
        self.layout_dirty = true;
    }

    /// Converge on the externally-routed open id (routing is the source
    /// of truth; this never pushes back).
    pub fn sync_route(&mut self, desired: Option<&ItemId>) {
        let desired = desired.filter(|id| self.index.contains(id));
        self.settle_scroll();
        match self.open.sync_external(desired) {
            SyncAction::Unchanged => return,
            SyncAction::Opened(id) => self.restore.note_opened(id, self.scroll),
            SyncAction::Replaced { next, .. } => self.restore.note_replaced(next),
            SyncAction::Closed(_) => self.finish_close(),
        }
        self.layout_dirty = true;
    }

    /// Rail click: jump to the first item of a letter bucket.
    pub fn jump_to_letter(&mut self, letter: Letter) {
        if !self.rail_shown() {
            return;
        }
        if let Some(index) = self.rail.jump_index(letter) {
            self.jump_to_index(index);
        }
    }

    /// Scroll so the row holding item `index` is in view.
    pub fn jump_to_index(&mut self, index: usize) {
        self.settle_layout();
        if let Some(offset) = jump::jump_to_item(
            &self.model,
            index,
            self.metrics.gap,
            self.viewport.height,
            self.scroll,
        ) {
            // A jump is an immediate re-sync; a pending scroll event from
            // before it would overwrite the result.
            self.scroll_frames.cancel();
            self.scroll = offset;
        }
    }

    /// Current scroll offset as the engine understands it.
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Id occupying the open slot.
    pub fn open_id(&self) -> Option<&ItemId> {
        self.open.open_id()
    }

    /// Whether the alphabet rail should render at all.
    pub fn rail_shown(&self) -> bool {
        self.alphabetical && self.rail.is_shown()
    }

    /// The rail index for rendering letter buttons.
    pub fn rail(&self) -> &AlphabetRail {
        &self.rail
    }

    /// Run one frame: settle inputs, rebuild layout if needed, apply any
    /// deferred jump, and produce the render output.
    pub fn frame(&mut self) -> FrameOutput {
        self.settle_scroll();
        self.settle_layout();

        // Deferred jump scheduled by an open/replace, now that the open
        // row's height is real.
        if self.restore.pending_item().is_some() {
            if let Some(offset) = self.restore.layout_settled(
                self.open.open_id(),
                &self.model,
                &self.metrics,
                self.viewport.height,
                self.scroll,
            ) {
                self.scroll_frames.cancel();
                self.scroll = offset;
            }
        }
        self.open.settle();

        let content_height = self.model.content_height();
        let max_scroll = content_height.saturating_sub(self.viewport.height);
        self.scroll = self.scroll.min(max_scroll);

        let visible_range = self.window.query(
            &self.model,
            self.scroll,
            self.viewport.height,
            self.metrics.overscan,
        );

        if !self.rail.matches(self.rail_regime, self.items.len()) {
            self.rail = AlphabetRail::build(&self.items, self.rail_regime);
        }
        let active_letter = if self.rail_shown() {
            let middle = self
                .model
                .item_near_offset(self.scroll + self.viewport.height / 2);
            self.rail.update_active(middle)
        } else {
            None
        };

        FrameOutput {
            positions: self.model.positions(),
            visible_range,
            open_id: self.open.open_id().cloned(),
            content_height,
            scroll: self.scroll,
            active_letter,
        }
    }

    /// Build the associated panel for the open item, or `None` when
    /// nothing is open or no deck has enough members.
    ///
    /// `width`/`height` are the pixel region available for the combined
    /// deck and stack areas.
    pub fn associated_view(&mut self, width: usize, height: usize) -> Option<AssociatedView> {
        let open_id = self.open.open_id()?;
        let open_index = self.index.get(open_id)?;
        let decks = assoc::build_decks(&self.items, open_index);
        if decks.is_empty() {
            return None;
        }
        let keys: Vec<String> = decks.iter().map(|d| d.key.clone()).collect();
        let selected = self.deck_memory.preferred(&keys)?.to_string();
        let deck = decks.iter().find(|d| d.key == selected)?;
        let layout = assoc::solve(width, height, deck.items.len(), &self.metrics.deck);
        let packing = DeckPacking::new(
            deck.items.len(),
            layout.deck_columns,
            layout.max_cards_per_deck_column,
        );
        let scroll = self.deck_memory.scroll(&selected);
        Some(AssociatedView {
            decks,
            selected,
            layout,
            packing,
            scroll,
        })
    }

    /// Stack click: remember the chosen deck across expansions.
    pub fn select_deck(&mut self, key: impl Into<String>) {
        self.deck_memory.select(key);
    }

    /// Remember how far a deck's column area was scrolled.
    pub fn set_deck_scroll(&mut self, key: impl Into<String>, offset: usize) {
        self.deck_memory.set_scroll(key, offset);
    }

    /// Apply any scroll event still waiting for its frame.
    ///
    /// Open and close both read the current offset (capture on open,
    /// restore target on close), so they drain the coalescer first; a
    /// click that lands between a scroll burst and the next frame must
    /// see where the user actually scrolled to.
    fn settle_scroll(&mut self) {
        if let Some(offset) = self.scroll_frames.take() {
            self.scroll = offset;
        }
    }

    /// Rebuild the row table when anything structural changed.
    fn settle_layout(&mut self) {
        if !self.layout_dirty {
            return;
        }
        let open_index = self
            .open
            .open_id()
            .and_then(|id| self.index.get(id));
        let columns = match self.mode {
            ViewMode::Grid => grid::columns(self.viewport.width, &self.metrics),
            ViewMode::List => 1,
        };
        self.model = RowModel::build(
            self.items.len(),
            open_index,
            columns,
            &self.metrics,
            self.mode,
            self.viewport.height,
        );
        self.window.invalidate();
        self.layout_dirty = false;
    }

    /// Resolve the restore offset against the still-open layout, then let
    /// the row collapse on the next rebuild.
    fn finish_close(&mut self) {
        self.settle_layout();
        self.scroll = self.restore.close_target(
            &self.model,
            &self.metrics,
            self.viewport.height,
            self.scroll,
        );
        self.scroll_frames.cancel();
        self.open.settle();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
