//! Controllers - the stateful seams between host events and pure layout.
//!
//! # Module Structure
//!
//! - `open`: single-item-open state machine (toggle/replace/close/settle)
//! - `restore`: scroll capture/replay across open transitions
//! - `jump`: pure "scroll row into view" target computation
//! - `rail`: alphabet rail index for jump navigation
//! - `frame`: coalesce-to-latest event throttling
//!
//! All shared mutable state is owned by [`crate::engine::CardGridEngine`]
//! and mutated only through these controllers' operations.

pub mod frame;
pub mod jump;
pub mod open;
pub mod rail;
pub mod restore;

pub use frame::Coalescer;
pub use open::{OpenItemController, OpenState, SyncAction, ToggleOutcome};
pub use rail::{AlphabetRail, Letter, RailRegime};
pub use restore::ScrollRestoreController;
