//! DeckPacking - distribute a deck's cards into capped columns.
//!
//! Every card gets a `(column, index_in_column)` slot used for absolute
//! positioning inside the deck region. The per-column height cap is
//! honored while all cards still fit under it; otherwise the cap is
//! dropped and columns grow, because truncating content is worse than
//! overflowing the region.

use crate::config::DeckGeometry;
use crate::layout::types::Position;

/// A card's slot within the packed deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSlot {
    /// Column the card lands in.
    pub column: usize,
    /// Position within that column, top to bottom.
    pub index_in_column: usize,
}

/// Column assignment for one deck's card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckPacking {
    cards: usize,
    cards_per_column: usize,
}

impl DeckPacking {
    /// Pack `cards` cards into `columns` columns, each capped at
    /// `max_per_column` cards when a cap applies.
    ///
    /// `cards_per_column` is `min(cap, ceil(cards / columns))` while the
    /// cap can still hold everything, else `ceil(cards / columns)`.
    pub fn new(cards: usize, columns: usize, max_per_column: Option<usize>) -> Self {
        let columns = columns.max(1);
        let even = cards.div_ceil(columns).max(1);
        let cards_per_column = match max_per_column {
            Some(cap) if cap > 0 && cap * columns >= cards => cap.min(even),
            _ => even,
        };
        Self {
            cards,
            cards_per_column,
        }
    }

    /// Number of cards packed.
    pub fn cards(&self) -> usize {
        self.cards
    }

    /// Cards per full column.
    pub fn cards_per_column(&self) -> usize {
        self.cards_per_column
    }

    /// Number of columns actually holding cards.
    pub fn columns_used(&self) -> usize {
        self.cards.div_ceil(self.cards_per_column)
    }

    /// Number of cards in a given column (the trailing column may be short).
    pub fn column_len(&self, column: usize) -> usize {
        let start = column * self.cards_per_column;
        self.cards.saturating_sub(start).min(self.cards_per_column)
    }

    /// Slot for the card at `position` in the deck's item list.
    ///
    /// `None` when `position` is out of range.
    pub fn slot_of(&self, position: usize) -> Option<DeckSlot> {
        (position < self.cards).then(|| DeckSlot {
            column: position / self.cards_per_column,
            index_in_column: position % self.cards_per_column,
        })
    }

    /// Iterate every card's slot, in deck order.
    pub fn slots(&self) -> impl Iterator<Item = DeckSlot> + '_ {
        (0..self.cards).map(|position| {
            self.slot_of(position)
                .expect("positions below cards are always in range")
        })
    }

    /// Absolute pixel position of a slot within the deck region.
    pub fn slot_position(&self, slot: DeckSlot, geometry: &DeckGeometry) -> Position {
        Position::new(
            slot.column * geometry.step_x(),
            slot.index_in_column * geometry.step_y(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn respects_cap_when_cards_fit() {
        // 37 cards, 4 columns, cap 10: columns 0-2 full, column 3 short.
        let packing = DeckPacking::new(37, 4, Some(10));
        assert_eq!(packing.cards_per_column(), 10);
        assert_eq!(packing.columns_used(), 4);
        assert_eq!(packing.column_len(0), 10);
        assert_eq!(packing.column_len(2), 10);
        assert_eq!(packing.column_len(3), 7);
    }

    #[test]
    fn drops_cap_rather_than_truncating() {
        // 50 cards cannot fit in 4 columns of 10; columns grow to 13.
        let packing = DeckPacking::new(50, 4, Some(10));
        assert_eq!(packing.cards_per_column(), 13);
        assert_eq!(packing.columns_used(), 4);
        assert_eq!(packing.column_len(3), 11);
    }

    #[test]
    fn no_cap_spreads_evenly() {
        let packing = DeckPacking::new(10, 4, None);
        assert_eq!(packing.cards_per_column(), 3);
        assert_eq!(packing.columns_used(), 4);
        assert_eq!(packing.column_len(3), 1);
    }

    #[test]
    fn slot_positions_step_by_geometry() {
        let geometry = DeckGeometry::default();
        let packing = DeckPacking::new(5, 2, None);
        let slot = packing.slot_of(4).unwrap();
        assert_eq!(slot, DeckSlot { column: 1, index_in_column: 1 });
        assert_eq!(
            packing.slot_position(slot, &geometry),
            Position::new(geometry.step_x(), geometry.step_y())
        );
    }

    #[test]
    fn out_of_range_position_has_no_slot() {
        let packing = DeckPacking::new(3, 2, None);
        assert_eq!(packing.slot_of(3), None);
    }

    #[test]
    fn zero_cards_pack_into_nothing() {
        let packing = DeckPacking::new(0, 3, Some(5));
        assert_eq!(packing.columns_used(), 0);
        assert_eq!(packing.slots().count(), 0);
    }

    proptest! {
        /// Packing conservation: every card gets exactly one slot, and no
        /// two cards share a slot.
        #[test]
        fn prop_every_card_has_a_unique_slot(
            cards in 0usize..500,
            columns in 1usize..20,
            cap in prop::option::of(1usize..30),
        ) {
            let packing = DeckPacking::new(cards, columns, cap);
            let slots: Vec<DeckSlot> = packing.slots().collect();
            prop_assert_eq!(slots.len(), cards);

            let unique: HashSet<(usize, usize)> = slots
                .iter()
                .map(|s| (s.column, s.index_in_column))
                .collect();
            prop_assert_eq!(unique.len(), cards);
        }

        /// The cap holds whenever it could: no column exceeds it if
        /// cap * columns >= cards.
        #[test]
        fn prop_cap_honored_when_feasible(
            cards in 1usize..500,
            columns in 1usize..20,
            cap in 1usize..30,
        ) {
            let packing = DeckPacking::new(cards, columns, Some(cap));
            if cap * columns >= cards {
                prop_assert!(packing.cards_per_column() <= cap);
            }
            // Either way, the used columns never exceed what was asked for
            // while the cap is feasible.
            if cap * columns >= cards {
                prop_assert!(packing.columns_used() <= columns);
            }
        }
    }
}
