//! RowOffsets - O(log n) row tops and scroll-offset lookup via Fenwick tree.
//!
//! Stores one vertical *advance* per row (visual height plus the inter-row
//! gap that follows it, if any). Prefix sums over advances give row tops;
//! a binary search over prefix sums maps a scroll offset back to a row.
//!
//! The point of the tree is the open row: when the viewport is resized, the
//! open row's height changes and every row top below it shifts. `set` makes
//! that an O(log n) update instead of an O(n) rebuild.

/// Fenwick-tree-backed prefix sums over per-row advances.
#[derive(Debug, Clone)]
pub struct RowOffsets {
    /// Fenwick tree backing storage (exposes a 0-indexed API).
    tree: Vec<isize>,
    /// Number of valid rows (len <= tree.len()).
    len: usize,
}

impl RowOffsets {
    /// Create an empty index with the given initial capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity.max(1)],
            len: 0,
        }
    }

    /// Append a row with the given advance.
    pub fn push(&mut self, advance: usize) {
        if self.len >= self.tree.len() {
            self.grow();
        }

        let idx = self.len;
        self.len += 1;
        fenwick::array::update(&mut self.tree, idx, advance as isize);
    }

    /// Double the backing storage.
    ///
    /// Fenwick nodes span index-dependent ranges, so a widened tree must
    /// be rebuilt from the stored advances; extending with zeros would
    /// leave the new nodes missing earlier elements' contributions.
    fn grow(&mut self) {
        let advances: Vec<isize> = (0..self.len)
            .map(|row| self.advance_of(row) as isize)
            .collect();
        self.tree = vec![0; self.tree.len().max(1) * 2];
        for (row, advance) in advances.into_iter().enumerate() {
            fenwick::array::update(&mut self.tree, row, advance);
        }
    }

    /// Replace the advance of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn set(&mut self, row: usize, advance: usize) {
        assert!(row < self.len, "row {} out of bounds (len: {})", row, self.len);

        let delta = advance as isize - self.advance_of(row) as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, row, delta);
        }
    }

    /// Cumulative advance up to and including `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn prefix_sum(&self, row: usize) -> usize {
        assert!(row < self.len, "row {} out of bounds (len: {})", row, self.len);

        fenwick::array::prefix_sum(&self.tree, row).max(0) as usize
    }

    /// The advance stored for `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn advance_of(&self, row: usize) -> usize {
        if row == 0 {
            self.prefix_sum(0)
        } else {
            self.prefix_sum(row) - self.prefix_sum(row - 1)
        }
    }

    /// Top of `row`: the cumulative advance of all preceding rows.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn top_of(&self, row: usize) -> usize {
        if row == 0 {
            0
        } else {
            self.prefix_sum(row - 1)
        }
    }

    /// Total advance of all rows.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len - 1)
        }
    }

    /// The row whose vertical extent `[top, top + advance)` contains `offset`.
    ///
    /// Returns `None` when `offset >= total()` or the index is empty.
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        // Binary search for first row where prefix_sum(row) > offset.
        let mut left = 0;
        let mut right = self.len;
        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > offset {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        (left < self.len).then_some(left)
    }

    /// First row whose top is at or below (>=) the given offset.
    ///
    /// Returns `len()` when every row starts above `offset`; used as an
    /// exclusive end bound when windowing.
    pub fn first_row_at_or_after(&self, offset: usize) -> usize {
        if offset == 0 {
            return 0;
        }
        // top(row) >= offset  <=>  prefix_sum(row - 1) >= offset
        match self.row_at(offset - 1) {
            Some(row) => row + 1,
            None => self.len,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no rows have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all rows, retaining allocated capacity.
    pub fn clear(&mut self) {
        for slot in self.tree.iter_mut() {
            *slot = 0;
        }
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tops_accumulate_advances() {
        let mut offsets = RowOffsets::new(4);
        offsets.push(10);
        offsets.push(20);
        offsets.push(15);

        assert_eq!(offsets.top_of(0), 0);
        assert_eq!(offsets.top_of(1), 10);
        assert_eq!(offsets.top_of(2), 30);
        assert_eq!(offsets.total(), 45);
    }

    #[test]
    fn set_shifts_all_following_tops() {
        let mut offsets = RowOffsets::new(4);
        offsets.push(10);
        offsets.push(20);
        offsets.push(15);

        offsets.set(1, 800);

        assert_eq!(offsets.top_of(1), 10);
        assert_eq!(offsets.top_of(2), 810);
        assert_eq!(offsets.total(), 825);
        assert_eq!(offsets.advance_of(1), 800);
    }

    #[test]
    fn row_at_maps_offsets_to_rows() {
        let mut offsets = RowOffsets::new(4);
        offsets.push(10); // [0, 10)
        offsets.push(20); // [10, 30)
        offsets.push(15); // [30, 45)

        assert_eq!(offsets.row_at(0), Some(0));
        assert_eq!(offsets.row_at(9), Some(0));
        assert_eq!(offsets.row_at(10), Some(1));
        assert_eq!(offsets.row_at(29), Some(1));
        assert_eq!(offsets.row_at(30), Some(2));
        assert_eq!(offsets.row_at(44), Some(2));
        assert_eq!(offsets.row_at(45), None);
    }

    #[test]
    fn first_row_at_or_after_is_exclusive_end_bound() {
        let mut offsets = RowOffsets::new(4);
        offsets.push(10);
        offsets.push(20);
        offsets.push(15);

        assert_eq!(offsets.first_row_at_or_after(0), 0);
        assert_eq!(offsets.first_row_at_or_after(1), 1);
        assert_eq!(offsets.first_row_at_or_after(10), 1);
        assert_eq!(offsets.first_row_at_or_after(11), 2);
        assert_eq!(offsets.first_row_at_or_after(30), 2);
        assert_eq!(offsets.first_row_at_or_after(31), 3);
        assert_eq!(offsets.first_row_at_or_after(10_000), 3);
    }

    #[test]
    fn pushing_past_capacity_keeps_prefix_sums() {
        let mut offsets = RowOffsets::new(1);
        offsets.push(10);
        offsets.push(20);
        offsets.push(15);

        assert_eq!(offsets.top_of(1), 10);
        assert_eq!(offsets.top_of(2), 30);
        assert_eq!(offsets.total(), 45);
        assert_eq!(offsets.row_at(29), Some(1));
    }

    #[test]
    fn empty_index_answers_safely() {
        let offsets = RowOffsets::new(0);
        assert!(offsets.is_empty());
        assert_eq!(offsets.total(), 0);
        assert_eq!(offsets.row_at(0), None);
        assert_eq!(offsets.first_row_at_or_after(5), 0);
    }

    #[test]
    fn clear_retains_capacity_for_reuse() {
        let mut offsets = RowOffsets::new(2);
        offsets.push(7);
        offsets.push(9);
        offsets.clear();
        assert_eq!(offsets.len(), 0);
        assert_eq!(offsets.total(), 0);

        offsets.push(3);
        assert_eq!(offsets.total(), 3);
        assert_eq!(offsets.top_of(0), 0);
    }

    proptest! {
        /// Tops reconstruct from raw advances for any input sequence,
        /// including ones that outgrow the initial capacity.
        #[test]
        fn prop_tops_match_scan(advances in prop::collection::vec(1usize..500, 1..80)) {
            let mut offsets = RowOffsets::new(1);
            for &advance in &advances {
                offsets.push(advance);
            }

            let mut expected_top = 0;
            for (row, &advance) in advances.iter().enumerate() {
                prop_assert_eq!(offsets.top_of(row), expected_top);
                prop_assert_eq!(offsets.advance_of(row), advance);
                expected_top += advance;
            }
            prop_assert_eq!(offsets.total(), expected_top);
        }

        /// row_at returns the row whose extent contains the offset.
        #[test]
        fn prop_row_at_is_consistent_with_tops(
            advances in prop::collection::vec(1usize..500, 1..80),
            offset in 0usize..50_000,
        ) {
            let mut offsets = RowOffsets::new(advances.len());
            for &advance in &advances {
                offsets.push(advance);
            }

            match offsets.row_at(offset) {
                Some(row) => {
                    prop_assert!(offsets.top_of(row) <= offset);
                    prop_assert!(offset < offsets.top_of(row) + offsets.advance_of(row));
                }
                None => prop_assert!(offset >= offsets.total()),
            }
        }
    }
}
