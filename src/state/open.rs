//! Single-item-open state machine.
//!
//! At most one item is expanded at any time. The machine is an explicit
//! tagged state with a pure transition function; replacing the open item
//! (`Open(a) -> Opening(b)`) is a first-class transition that never passes
//! through `Closed`, which is what the scroll-restore compensation relies
//! on.
//!
//! External identity (the host's route id) is the source of truth: the host
//! calls [`OpenItemController::sync_external`] whenever the routed id
//! changes, and the controller converges on it - never the reverse.

use crate::model::{IndexMap, ItemId};

/// The open-item lifecycle.
///
/// `Opening`/`Closing` are the windows between a state change and the layout
/// pass that makes it visible; [`OpenItemController::settle`] advances them
/// once the dependent layout exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpenState {
    /// Nothing expanded.
    #[default]
    Closed,
    /// Item is expanding; its row has not been laid out yet.
    Opening(ItemId),
    /// Item is fully expanded.
    Open(ItemId),
    /// Item is collapsing; its row still has the open height.
    Closing(ItemId),
}

impl OpenState {
    /// The id currently occupying the open slot, if any.
    ///
    /// `Closing` still reports its id: the row is still tall and layout
    /// queries against it must keep resolving.
    pub fn open_id(&self) -> Option<&ItemId> {
        match self {
            Self::Closed => None,
            Self::Opening(id) | Self::Open(id) | Self::Closing(id) => Some(id),
        }
    }

    /// Whether the slot is logically open (opening or open).
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Opening(_) | Self::Open(_))
    }
}

/// Input to the pure transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenEvent {
    /// User toggled an item: open it, or close it if already open.
    Toggle(ItemId),
    /// Switch directly to another item without a closed interlude.
    Replace(ItemId),
    /// Close whatever is open.
    Close,
    /// The layout pass for the pending transition has completed.
    Settle,
}

/// Pure transition function for the open-item machine.
pub fn transition(state: OpenState, event: OpenEvent) -> OpenState {
    use OpenEvent::*;
    use OpenState::*;

    match (state, event) {
        (Closed, Toggle(id) | Replace(id)) => Opening(id),
        (Opening(a) | Open(a), Toggle(b)) if a == b => Closing(a),
        (Opening(_) | Open(_) | Closing(_), Toggle(id) | Replace(id)) => Opening(id),
        (Opening(a) | Open(a), Close) => Closing(a),
        (Opening(id), Settle) => Open(id),
        (Closing(_), Settle) => Closed,
        (state, _) => state,
    }
}

/// What a toggle resolved to, for the caller's side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item began opening from a closed slot.
    Opened(ItemId),
    /// The item replaced another open item.
    Replaced {
        /// Previously open id.
        previous: ItemId,
        /// Newly opening id.
        next: ItemId,
    },
    /// The item was open and began closing.
    Closing(ItemId),
}

/// How a `sync_external` call changed the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Machine already matched the external id.
    Unchanged,
    /// External id opened from a closed slot.
    Opened(ItemId),
    /// External id replaced the previously open item.
    Replaced {
        /// Previously open id.
        previous: ItemId,
        /// Newly opening id.
        next: ItemId,
    },
    /// External id cleared; the open item is closing.
    Closed(ItemId),
}

/// Stateful wrapper driving [`transition`].
#[derive(Debug, Clone, Default)]
pub struct OpenItemController {
    state: OpenState,
}

impl OpenItemController {
    /// A controller with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current machine state.
    pub fn state(&self) -> &OpenState {
        &self.state
    }

    /// Id occupying the open slot (including while closing).
    pub fn open_id(&self) -> Option<&ItemId> {
        self.state.open_id()
    }

    /// Toggle an item open or closed.
    pub fn toggle(&mut self, id: ItemId) -> ToggleOutcome {
        let outcome = match self.state.open_id() {
            Some(current) if *current == id && self.state.is_open() => {
                ToggleOutcome::Closing(id.clone())
            }
            Some(current) if self.state.is_open() => ToggleOutcome::Replaced {
                previous: current.clone(),
                next: id.clone(),
            },
            _ => ToggleOutcome::Opened(id.clone()),
        };
        self.apply(OpenEvent::Toggle(id));
        outcome
    }

    /// Atomically swap the open slot to `next`, returning the previously
    /// open id (None when nothing was open).
    pub fn replace(&mut self, next: ItemId) -> Option<ItemId> {
        let previous = self
            .state
            .is_open()
            .then(|| self.state.open_id().cloned())
            .flatten();
        self.apply(OpenEvent::Replace(next));
        previous
    }

    /// Begin closing whatever is open.
    pub fn close(&mut self) {
        self.apply(OpenEvent::Close);
    }

    /// Advance a pending `Opening`/`Closing` once its layout pass ran.
    pub fn settle(&mut self) {
        self.apply(OpenEvent::Settle);
    }

    /// Converge on the externally-routed open id.
    pub fn sync_external(&mut self, desired: Option<&ItemId>) -> SyncAction {
        let current = self
            .state
            .is_open()
            .then(|| self.state.open_id().cloned())
            .flatten();
        match (current, desired) {
            (None, None) => SyncAction::Unchanged,
            (Some(open), Some(desired)) if open == *desired => SyncAction::Unchanged,
            (Some(open), None) => {
                self.close();
                SyncAction::Closed(open)
            }
            (None, Some(desired)) => {
                self.apply(OpenEvent::Toggle(desired.clone()));
                SyncAction::Opened(desired.clone())
            }
            (Some(open), Some(desired)) => {
                self.apply(OpenEvent::Replace(desired.clone()));
                SyncAction::Replaced {
                    previous: open,
                    next: desired.clone(),
                }
            }
        }
    }

    /// Drop an open id that no longer exists in the item array.
    ///
    /// A filter change can remove the open item; the slot snaps straight to
    /// `Closed` (there is no row left to animate) instead of erroring.
    pub fn prune(&mut self, index: &IndexMap) {
        if let Some(id) = self.state.open_id() {
            if !index.contains(id) {
                tracing::debug!(%id, "open item vanished from the array; closing");
                self.state = OpenState::Closed;
            }
        }
    }

    fn apply(&mut self, event: OpenEvent) {
        let next = transition(self.state.clone(), event.clone());
        if next != self.state {
            tracing::debug!(?event, from = ?self.state, to = ?next, "open-state transition");
            self.state = next;
        }
    }
}
