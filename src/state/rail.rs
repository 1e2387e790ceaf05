//! AlphabetRailIndexer - per-letter counts and first indices for jump
//! navigation.
//!
//! Buckets are `#` plus A-Z, derived from the first character of the sort
//! key (`sorting_name` or `title`); anything non-alphabetic lands in `#`.
//! The rail only makes sense over alphabetical ordering, so the engine
//! skips building it under any other sort key, and the rail suppresses
//! itself when fewer than [`AlphabetRail::MIN_BUCKETS`] buckets are
//! populated - a side index over three letters is noise.

use crate::model::Item;

/// One rail bucket: `#` or a letter A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The non-alphabetic bucket.
    pub const HASH: Letter = Letter(0);

    /// Number of buckets (`#` + 26 letters).
    pub const COUNT: usize = 27;

    /// Bucket for the given sort key: normalized first letter, `#` for
    /// anything that does not start with an ASCII letter.
    pub fn of_key(key: &str) -> Self {
        match key.trim_start().chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Letter(c.to_ascii_uppercase() as u8 - b'A' + 1),
            _ => Self::HASH,
        }
    }

    /// Display character for the bucket.
    pub fn as_char(&self) -> char {
        if self.0 == 0 {
            '#'
        } else {
            (b'A' + self.0 - 1) as char
        }
    }

    /// All buckets in rail order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }

    fn slot(&self) -> usize {
        self.0 as usize
    }
}

/// How the item list is organized letter-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailRegime {
    /// A flat alphabetically sorted list; buckets derived per item.
    Flat,
    /// A pre-grouped list whose buckets are already contiguous.
    Grouped,
}

/// Per-letter index over one sorted item array.
///
/// Rebuilt (with a cleared active letter) whenever the regime or the item
/// count changes - stale highlighting after a filter change is worse than
/// a momentarily empty rail.
#[derive(Debug, Clone)]
pub struct AlphabetRail {
    counts: [usize; Letter::COUNT],
    first: [Option<usize>; Letter::COUNT],
    letters: Vec<Letter>,
    regime: RailRegime,
    active: Option<Letter>,
}

impl AlphabetRail {
    /// Fewer populated buckets than this and the rail renders nothing.
    pub const MIN_BUCKETS: usize = 10;

    /// Build the index over a sorted (or pre-grouped) item array.
    pub fn build(items: &[Item], regime: RailRegime) -> Self {
        let mut counts = [0usize; Letter::COUNT];
        let mut first = [None; Letter::COUNT];
        let mut letters = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let letter = Letter::of_key(item.sort_key());
            counts[letter.slot()] += 1;
            first[letter.slot()].get_or_insert(index);
            letters.push(letter);
        }

        Self {
            counts,
            first,
            letters,
            regime,
            active: None,
        }
    }

    /// The regime this index was built under.
    pub fn regime(&self) -> RailRegime {
        self.regime
    }

    /// Number of items indexed.
    pub fn item_count(&self) -> usize {
        self.letters.len()
    }

    /// Item count within a bucket.
    pub fn count(&self, letter: Letter) -> usize {
        self.counts[letter.slot()]
    }

    /// Index of the first item in a bucket, if populated.
    pub fn first_index(&self, letter: Letter) -> Option<usize> {
        self.first[letter.slot()]
    }

    /// Number of populated buckets.
    pub fn populated(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether the rail should render at all.
    pub fn is_shown(&self) -> bool {
        self.populated() >= Self::MIN_BUCKETS
    }

    /// Resolve a rail click to the item index to jump to.
    ///
    /// Empty buckets resolve to nothing; the host renders them inert.
    pub fn jump_index(&self, letter: Letter) -> Option<usize> {
        self.first_index(letter)
    }

    /// Currently highlighted letter.
    pub fn active(&self) -> Option<Letter> {
        self.active
    }

    /// Re-derive the active letter from the item nearest the vertical
    /// middle of the viewport (resolved through row pixel extents by the
    /// caller; an index midpoint drifts when a tall open row is mounted).
    pub fn update_active(&mut self, index: Option<usize>) -> Option<Letter> {
        self.active = index.and_then(|index| self.letters.get(index).copied());
        self.active
    }

    /// Whether this index still matches the given list shape; a mismatch
    /// means the engine must rebuild (which clears the active letter).
    pub fn matches(&self, regime: RailRegime, item_count: usize) -> bool {
        self.regime == regime && self.letters.len() == item_count
    }
}
