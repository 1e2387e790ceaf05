//! Associated-content panel: decks, the deck/stack layout solver, column
//! packing, and session deck memory.

pub mod decks;
pub mod layout;
pub mod memory;
pub mod packing;

pub use decks::{build_decks, edition_family, Deck};
pub use layout::{solve, AssociatedLayout};
pub use memory::DeckMemory;
pub use packing::{DeckPacking, DeckSlot};
