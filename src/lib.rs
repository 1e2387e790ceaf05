//! cardgrid - virtualized card-grid layout engine for large media
//! libraries.
//!
//! Headless layout and interaction core for a host that renders
//! thousands of cover cards: dense grid/list rows with a single
//! expandable "open" row, windowed mounting with overscan, scroll
//! capture/restore across open/close/replace transitions, an alphabet
//! jump rail, and the associated-content deck panel shown inside an
//! expanded item.
//!
//! The host owns rendering, data, and event sources; it feeds
//! measurements, scroll offsets, routing and clicks into a
//! [`engine::CardGridEngine`] and renders the [`engine::FrameOutput`]
//! it gets back each frame. Everything in here is pure bookkeeping;
//! degenerate geometry clamps instead of erroring.

pub mod assoc;
pub mod config;
pub mod engine;
pub mod layout;
pub mod logging;
pub mod model;
pub mod state;

pub use engine::{AssociatedView, CardGridEngine, FrameOutput};
pub use layout::{Position, ViewMode, VisibleRange};
pub use model::{Item, ItemId};
