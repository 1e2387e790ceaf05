//! Frame coalescing - collapse a burst of events to one value per frame.
//!
//! Raw scroll events arrive far faster than frames; the engine only cares
//! about the latest offset when a frame actually runs. The coalescer keeps
//! a single pending slot: new values overwrite it, `take` drains it once
//! per frame tick, and `cancel` drops an in-flight value when an immediate
//! re-sync (e.g. right after a jump) must not be overwritten by a stale
//! event that raced it.

/// Coalesce-to-latest single-slot buffer.
#[derive(Debug, Clone, Default)]
pub struct Coalescer<T> {
    pending: Option<T>,
}

impl<T> Coalescer<T> {
    /// An empty coalescer.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Store `value`, replacing any pending one.
    ///
    /// Returns `true` when the slot was empty - the host should schedule a
    /// frame callback; `false` means one is already scheduled and the value
    /// merely replaced the stale intermediate.
    pub fn request(&mut self, value: T) -> bool {
        let newly_scheduled = self.pending.is_none();
        self.pending = Some(value);
        newly_scheduled
    }

    /// Drain the pending value. Called once per frame tick.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending value without delivering it, returning it for
    /// inspection.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Whether a value is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
