//! Domain model: items and their id-indexed side tables.
//!
//! Everything here is owned by the external data layer; the engine only
//! reads it. Layout-derived types live in [`crate::layout`].

pub mod index_map;
pub mod item;

pub use index_map::IndexMap;
pub use item::{Item, ItemId};
