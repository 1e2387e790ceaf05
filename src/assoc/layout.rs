//! AssociatedLayoutEngine - fit decks and stacks into the side region.
//!
//! The expanded item's side panel is split into a primary deck area
//! (columns of association cards) and a secondary stack area (preview
//! tiles for switching decks). The solver picks the largest deck-column
//! count the width allows while still leaving room for the minimum stack
//! count, then lets stacks absorb the remaining width by shrinking their
//! card width smoothly instead of stepping down to fewer columns.
//!
//! Re-solved on every resize and whenever the deck card count changes.

use crate::config::DeckGeometry;

/// Solved region split for one (width, height, card count) input.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedLayout {
    /// Columns in the primary deck area (>= 1).
    pub deck_columns: usize,
    /// Columns in the stack area (may be 0 in a degraded narrow layout).
    pub stack_columns: usize,
    /// Height-derived per-column card cap; `None` when the chosen column
    /// count cannot hold all cards under the cap (packing then drops it).
    pub max_cards_per_deck_column: Option<usize>,
    /// Floor for the stack-column count at this deck width.
    pub min_stack_columns: usize,
    /// Width of one stack card after smooth shrink, in pixels.
    pub stack_card_width: f32,
}

/// Stack columns required to stay legible at a given deck width.
///
/// Wide decks (6+ columns) push the stacks into a sliver; from there the
/// minimum side panel is two columns.
fn min_stack_columns_for(deck_columns: usize) -> usize {
    if deck_columns >= 6 {
        2
    } else {
        1
    }
}

/// How many cards fit in one deck column of the given height.
fn max_cards_by_height(height: usize, geometry: &DeckGeometry) -> usize {
    if height <= geometry.card_height {
        1
    } else {
        (height - geometry.card_height) / geometry.step_y() + 1
    }
}

/// Solve the deck/stack split for the available region.
///
/// Never errors: a region too narrow for even one deck column degrades to
/// a single deck column with whatever stack columns remain (possibly 0).
pub fn solve(
    width: usize,
    height: usize,
    deck_cards: usize,
    geometry: &DeckGeometry,
) -> AssociatedLayout {
    let per_column = max_cards_by_height(height, geometry);
    let needed_columns = deck_cards.div_ceil(per_column).max(1);

    // Largest deck-column count that still admits the (dynamic) minimum
    // stack count in the remaining width.
    let mut deck_columns = 0;
    for candidate in 1..=needed_columns {
        let deck_width = candidate * geometry.step_x();
        let min_stacks = min_stack_columns_for(candidate);
        if deck_width + min_stacks * geometry.stack_width <= width {
            deck_columns = candidate;
        } else {
            break;
        }
    }

    let degraded = deck_columns == 0;
    if degraded {
        deck_columns = 1;
    }

    let min_stack_columns = min_stack_columns_for(deck_columns);
    let remaining = width.saturating_sub(deck_columns * geometry.step_x());

    // Stacks fill the remainder; card width shrinks smoothly rather than
    // the column count stepping down, bounded below by the minimum count.
    let stack_columns = if degraded {
        remaining / geometry.stack_width
    } else {
        (remaining / geometry.stack_width).max(min_stack_columns)
    };
    let stack_card_width = if stack_columns == 0 {
        0.0
    } else {
        (remaining as f32 / stack_columns as f32) - geometry.gap as f32
    };

    let layout = AssociatedLayout {
        deck_columns,
        stack_columns,
        max_cards_per_deck_column: (deck_columns >= needed_columns).then_some(per_column),
        min_stack_columns,
        stack_card_width: stack_card_width.max(0.0),
    };
    tracing::trace!(
        width,
        height,
        deck_cards,
        deck_columns = layout.deck_columns,
        stack_columns = layout.stack_columns,
        "associated layout solved"
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry() -> DeckGeometry {
        DeckGeometry::default() // card 98x140, gap 8, stack 156
    }

    #[test]
    fn height_cap_counts_whole_cards() {
        let g = geometry();
        // One card always fits, however short the region.
        assert_eq!(max_cards_by_height(0, &g), 1);
        assert_eq!(max_cards_by_height(g.card_height, &g), 1);
        // card + step fits two, etc.
        assert_eq!(max_cards_by_height(g.card_height + g.step_y(), &g), 2);
        assert_eq!(max_cards_by_height(g.card_height + g.step_y() - 1, &g), 1);
    }

    #[test]
    fn wide_region_gets_all_needed_columns() {
        let g = geometry();
        // 37 cards, 10 per column by height -> 4 columns needed.
        let height = g.card_height + 9 * g.step_y();
        let width = 4 * g.step_x() + g.stack_width + 50;
        let layout = solve(width, height, 37, &g);
        assert_eq!(layout.deck_columns, 4);
        assert_eq!(layout.max_cards_per_deck_column, Some(10));
        assert!(layout.stack_columns >= 1);
    }

    #[test]
    fn narrow_region_caps_deck_columns_below_needed() {
        let g = geometry();
        let height = g.card_height; // 1 card per column -> many needed
        let width = 2 * g.step_x() + g.stack_width;
        let layout = solve(width, height, 40, &g);
        assert_eq!(layout.deck_columns, 2);
        // Cap infeasible at this column count: packing must drop it.
        assert_eq!(layout.max_cards_per_deck_column, None);
    }

    #[test]
    fn six_plus_deck_columns_require_two_stack_columns() {
        let g = geometry();
        let height = g.card_height; // force one card per column
        // Wide enough for 6 deck columns only if two stacks also fit.
        let six_wide = 6 * g.step_x() + 2 * g.stack_width;
        let layout = solve(six_wide, height, 40, &g);
        assert_eq!(layout.deck_columns, 6);
        assert_eq!(layout.min_stack_columns, 2);
        assert!(layout.stack_columns >= 2);

        // One pixel short of the two-stack minimum: stuck at 5 columns.
        let layout = solve(six_wide - 1, height, 40, &g);
        assert_eq!(layout.deck_columns, 5);
        assert_eq!(layout.min_stack_columns, 1);
    }

    #[test]
    fn too_narrow_degrades_to_one_deck_column() {
        let g = geometry();
        let layout = solve(g.step_x() / 2, 500, 20, &g);
        assert_eq!(layout.deck_columns, 1);
        assert_eq!(layout.stack_columns, 0);
        assert_eq!(layout.stack_card_width, 0.0);
    }

    #[test]
    fn stack_cards_shrink_smoothly_at_the_floor() {
        let g = geometry();
        let height = g.card_height + 9 * g.step_y();
        // Room for 2 deck columns and a bit over one nominal stack.
        let width = 2 * g.step_x() + g.stack_width + 40;
        let layout = solve(width, height, 15, &g);
        assert_eq!(layout.deck_columns, 2);
        assert_eq!(layout.stack_columns, 1);
        let remaining = (width - 2 * g.step_x()) as f32;
        assert!((layout.stack_card_width - (remaining - g.gap as f32)).abs() < f32::EPSILON);

        // Narrower panel, same column count, narrower cards.
        let narrower = solve(width - 30, height, 15, &g);
        assert_eq!(narrower.stack_columns, 1);
        assert!(narrower.stack_card_width < layout.stack_card_width);
    }

    proptest! {
        /// The solver never produces zero deck columns and never lets the
        /// deck area alone overflow the width unless degraded to 1 column.
        #[test]
        fn prop_deck_columns_sane(
            width in 0usize..4_000,
            height in 0usize..3_000,
            cards in 0usize..300,
        ) {
            let g = geometry();
            let layout = solve(width, height, cards, &g);
            prop_assert!(layout.deck_columns >= 1);
            if layout.deck_columns > 1 {
                prop_assert!(layout.deck_columns * g.step_x() <= width);
            }
        }

        /// Whenever a cap is reported, it is feasible for the chosen
        /// column count.
        #[test]
        fn prop_reported_cap_is_feasible(
            width in 0usize..4_000,
            height in 0usize..3_000,
            cards in 1usize..300,
        ) {
            let g = geometry();
            let layout = solve(width, height, cards, &g);
            if let Some(cap) = layout.max_cards_per_deck_column {
                prop_assert!(cap * layout.deck_columns >= cards);
            }
        }
    }
}
