//! Core layout newtypes and small value types.

use serde::{Deserialize, Serialize};

/// Index of an item within the supplied sorted array. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new index from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw 0-based value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Next index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Previous index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Index of a row in the current row model. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Create a new index from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw 0-based value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Absolute pixel position of an item inside the scrolling container.
///
/// Ephemeral, derived, never persisted; recomputed whenever item count,
/// column count, or per-item dimensions change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Pixels from the container's left edge.
    pub left: usize,
    /// Pixels from the container's top edge.
    pub top: usize,
}

impl Position {
    /// Create a position.
    pub fn new(left: usize, top: usize) -> Self {
        Self { left, top }
    }
}

/// Presentation mode for the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Dense grid of cover cards.
    #[default]
    Grid,
    /// Full-width rows, one item per row.
    List,
}

/// Live viewport metrics, fed in by the host's measurement subscription.
///
/// Width/height are the content-box size of the scrolling element;
/// both may be 0 before the first measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Content-box width in pixels.
    pub width: usize,
    /// Content-box height in pixels.
    pub height: usize,
}

impl Viewport {
    /// Create viewport metrics.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Extra pixels beyond the visible viewport kept mounted to mask
/// scroll-induced pop-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overscan {
    /// Pixels above the viewport.
    pub top: usize,
    /// Pixels below the viewport.
    pub bottom: usize,
}

impl Default for Overscan {
    fn default() -> Self {
        Self {
            top: 300,
            bottom: 300,
        }
    }
}
