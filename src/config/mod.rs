//! Configuration module.
//!
//! Layout constants have hardcoded defaults; hosts may override them via a
//! TOML file loaded by [`loader`].

pub mod loader;

pub use loader::{load_config_file, load_config_with_precedence, ConfigError, ConfigFile};

use crate::layout::types::{Overscan, ViewMode};
use serde::{Deserialize, Serialize};

/// Card geometry for the associated-content region (decks and stacks).
///
/// All values are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckGeometry {
    /// Width of one deck card.
    pub card_width: usize,
    /// Height of one deck card.
    pub card_height: usize,
    /// Gap between deck cards and columns.
    pub gap: usize,
    /// Nominal width of one stack column. Actual stack card width shrinks
    /// smoothly below this as the panel narrows.
    pub stack_width: usize,
}

impl DeckGeometry {
    /// Vertical stride between stacked deck cards (height plus gap).
    pub fn step_y(&self) -> usize {
        self.card_height + self.gap
    }

    /// Horizontal stride of one deck column (width plus gap).
    pub fn step_x(&self) -> usize {
        self.card_width + self.gap
    }
}

impl Default for DeckGeometry {
    fn default() -> Self {
        Self {
            card_width: 98,
            card_height: 140,
            gap: 8,
            stack_width: 156,
        }
    }
}

/// Numeric layout constants supplied by the host shell.
///
/// All values are pixels. These are engine inputs, not DOM measurements;
/// live viewport metrics arrive separately via the measurement subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Width of one grid card.
    pub card_width: usize,
    /// Height of one grid card.
    pub card_height: usize,
    /// Gap between cards, columns, and grid rows.
    pub gap: usize,
    /// Height of one list-view row. List rows have no inter-row gap.
    pub row_height: usize,
    /// Overscan margins for the virtual window.
    pub overscan: Overscan,
    /// Geometry of the associated-content region.
    pub deck: DeckGeometry,
}

impl Metrics {
    /// Horizontal stride of one grid column (card width plus gap).
    pub fn stride_x(&self) -> usize {
        self.card_width + self.gap
    }

    /// Height of a closed row in the given view mode.
    pub fn closed_row_height(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::Grid => self.card_height,
            ViewMode::List => self.row_height,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            card_width: 129,
            card_height: 193,
            gap: 8,
            row_height: 28,
            overscan: Overscan::default(),
            deck: DeckGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_row_height_tracks_view_mode() {
        let metrics = Metrics::default();
        assert_eq!(
            metrics.closed_row_height(ViewMode::Grid),
            metrics.card_height
        );
        assert_eq!(metrics.closed_row_height(ViewMode::List), metrics.row_height);
    }

    #[test]
    fn deck_strides_include_gap() {
        let deck = DeckGeometry::default();
        assert_eq!(deck.step_y(), deck.card_height + deck.gap);
        assert_eq!(deck.step_x(), deck.card_width + deck.gap);
    }
}
