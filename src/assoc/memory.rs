//! Session-scoped memory of the user's deck choices.

use std::collections::HashMap;

/// Remembers which deck the user last selected and how far each deck was
/// scrolled, across expansions of different items.
///
/// Keys are deck keys such as `series:Myst`, so the map is bounded by
/// the number of distinct attribute values in the library. Lives for the
/// session; nothing is ever evicted.
#[derive(Debug, Default)]
pub struct DeckMemory {
    last_key: Option<String>,
    scroll: HashMap<String, usize>,
}

impl DeckMemory {
    /// Create with no remembered selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deck selection.
    pub fn select(&mut self, key: impl Into<String>) {
        self.last_key = Some(key.into());
    }

    /// The most recently selected deck key, if any.
    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    /// Record the scroll offset inside a deck.
    pub fn set_scroll(&mut self, key: impl Into<String>, offset: usize) {
        self.scroll.insert(key.into(), offset);
    }

    /// The remembered scroll offset for a deck, defaulting to 0.
    pub fn scroll(&self, key: &str) -> usize {
        self.scroll.get(key).copied().unwrap_or(0)
    }

    /// Pick the deck to show first from the available candidates: the
    /// remembered key when it is still present, else the first candidate.
    pub fn preferred<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        if let Some(last) = self.last_key.as_deref() {
            if let Some(found) = candidates.iter().find(|k| k.as_str() == last) {
                return Some(found.as_str());
            }
        }
        candidates.first().map(String::as_str)
    }
}
