//! Layout layer - pure geometry for the virtualized collection.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemIndex, RowIndex, Position, Viewport, Overscan)
//! - `grid`: Dense-grid math - column count, per-item positions, content height
//! - `offsets`: RowOffsets - O(log n) row tops via Fenwick tree
//! - `rows`: RowModel - dense/open row grouping with in-place open-row resize
//! - `window`: VirtualWindow - memoized visible-range calculation
//!
//! Nothing in this layer performs I/O or throws on degenerate geometry;
//! all arithmetic clamps to sane bounds.

pub mod grid;
pub mod offsets;
pub mod rows;
pub mod types;
pub mod window;

pub use offsets::RowOffsets;
pub use rows::{Row, RowKind, RowModel};
pub use types::{ItemIndex, Overscan, Position, RowIndex, ViewMode, Viewport};
pub use window::{VirtualWindow, VisibleRange};
