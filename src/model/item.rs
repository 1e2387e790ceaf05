//! Media items as supplied by the item-source collaborator.
//!
//! The engine never mutates semantic fields on an [`Item`]; it only reads
//! them to derive layout and association data. Items arrive as a wholesale
//! replacement on every data refresh, typically decoded from JSON by the
//! host, hence the camelCase serde renames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier for an item.
///
/// Owned by the external data layer. The engine treats it as opaque and
/// only ever compares/hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A single media entry in the library.
///
/// This is the boundary contract with the host's item source: a stable
/// `id`, a required `title`, and the optional attributes used for
/// association decks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable unique id.
    pub id: ItemId,
    /// Display title.
    pub title: String,
    /// Alternate name used for alphabetical sorting (e.g. article-stripped).
    #[serde(default)]
    pub sorting_name: Option<String>,
    /// URL of the cover asset, if any. Opaque to the engine.
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Series this item belongs to.
    #[serde(default)]
    pub series: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Developers / creators.
    #[serde(default)]
    pub developers: Vec<String>,
    /// Release year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Whether the item is installed locally.
    #[serde(default)]
    pub is_installed: bool,
    /// Whether the item is hidden from the default view.
    #[serde(default)]
    pub is_hidden: bool,
}

impl Item {
    /// Minimal constructor used by hosts and tests; optional fields empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.into(),
            sorting_name: None,
            cover_url: None,
            series: Vec::new(),
            tags: Vec::new(),
            developers: Vec::new(),
            year: None,
            is_installed: false,
            is_hidden: false,
        }
    }

    /// The name alphabetical sorting and letter bucketing operate on:
    /// `sorting_name` when present, `title` otherwise.
    pub fn sort_key(&self) -> &str {
        self.sorting_name.as_deref().unwrap_or(&self.title)
    }
}
