//! Id → position side table, rebuilt once per data refresh.
//!
//! Association building needs to recover an item's position in the array it
//! was supplied in while iterating derived subsets. Rather than writing an
//! index field onto shared item records (which aliases badly when the same
//! item appears in several derived lists), the engine keeps this separate
//! lookup and passes it alongside the item slice.

use crate::model::{Item, ItemId};
use std::collections::HashMap;

/// Immutable id → index lookup over one supplied item array.
///
/// Invalidated wholesale whenever the item array is replaced; never patched.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    by_id: HashMap<ItemId, usize>,
}

impl IndexMap {
    /// Build the lookup for the given item slice.
    ///
    /// If the source layer violates the unique-id contract, the last
    /// occurrence wins; the engine does not police its collaborators.
    pub fn build(items: &[Item]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            by_id.insert(item.id.clone(), index);
        }
        Self { by_id }
    }

    /// Index of the item with the given id, if present.
    pub fn get(&self, id: &ItemId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Whether an item with this id exists in the current array.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when no items are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
