//! Deck building for the associated-content panel.
//!
//! When an item is open, every attribute it shares with other items
//! becomes a candidate deck: each series it belongs to, each tag, each
//! developer, its release year, installed state, hidden state, and an
//! "edition family" derived from the title with edition suffixes
//! stripped. Decks are rebuilt from scratch whenever the open item
//! changes and never persisted past the expansion.

use crate::model::Item;

/// A named bucket of items sharing one attribute with the open item.
///
/// `items` holds indices into the full sorted item slice the deck was
/// built from, never the open item's own index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Stable key, also used by the deck scroll memory ("series:Myst").
    pub key: String,
    /// Human-readable label for the stack tile.
    pub label: String,
    /// Member indices into the item slice, in item order.
    pub items: Vec<usize>,
}

impl Deck {
    fn new(key: String, label: String) -> Self {
        Self { key, label, items: Vec::new() }
    }
}

/// Title words that mark a re-release rather than a distinct work.
const EDITION_WORDS: &[&str] = &[
    "edition",
    "goty",
    "definitive",
    "deluxe",
    "remastered",
    "remaster",
    "enhanced",
    "complete",
    "collection",
    "anniversary",
    "redux",
    "directors",
    "director's",
    "cut",
    "hd",
];

/// Lowercased alphanumeric words of a title.
fn title_words(title: &str) -> Vec<String> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Title with trailing edition markers removed, for grouping releases of
/// the same work. Returns `None` when nothing is left after stripping.
pub fn edition_family(title: &str) -> Option<String> {
    let mut words = title_words(title);
    while let Some(last) = words.last() {
        if EDITION_WORDS.contains(&last.as_str()) {
            words.pop();
        } else {
            break;
        }
    }
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Word-overlap score between a series name and the open item's title.
///
/// Used only to order series decks so the closest-named series shows
/// first. Ties keep insertion order; equal scores carry no priority.
fn series_score(series: &str, title_words: &[String]) -> usize {
    title_words
        .iter()
        .filter(|w| {
            series
                .split(|c: char| !c.is_alphanumeric())
                .any(|s| s.eq_ignore_ascii_case(w))
        })
        .count()
}

/// Build all decks for the open item at `open_index`.
///
/// Decks with fewer than two members are dropped. Series decks come
/// first, ordered by title-word overlap with the open item (descending,
/// stable), then edition family, tags, developers, year, installed and
/// hidden decks in that order.
pub fn build_decks(items: &[Item], open_index: usize) -> Vec<Deck> {
    let Some(open) = items.get(open_index) else {
        return Vec::new();
    };
    let open_words = title_words(&open.title);
    let open_family = edition_family(&open.title);

    let mut series_decks: Vec<Deck> = open
        .series
        .iter()
        .map(|s| Deck::new(format!("series:{s}"), s.clone()))
        .collect();
    let mut family_deck = open_family
        .as_ref()
        .map(|f| Deck::new(format!("family:{f}"), open.title.clone()));
    let mut tag_decks: Vec<Deck> = open
        .tags
        .iter()
        .map(|t| Deck::new(format!("tag:{t}"), t.clone()))
        .collect();
    let mut developer_decks: Vec<Deck> = open
        .developers
        .iter()
        .map(|d| Deck::new(format!("developer:{d}"), d.clone()))
        .collect();
    let mut year_deck = open
        .year
        .map(|y| Deck::new(format!("year:{y}"), y.to_string()));
    let mut installed_deck = open
        .is_installed
        .then(|| Deck::new("installed".to_string(), "Installed".to_string()));
    let mut hidden_deck = open
        .is_hidden
        .then(|| Deck::new("hidden".to_string(), "Hidden".to_string()));

    for (index, item) in items.iter().enumerate() {
        if index == open_index {
            continue;
        }
        for deck in series_decks.iter_mut() {
            let name = &deck.label;
            if item.series.iter().any(|s| s == name) {
                deck.items.push(index);
            }
        }
        if let (Some(deck), Some(family)) = (family_deck.as_mut(), open_family.as_ref()) {
            if edition_family(&item.title).as_ref() == Some(family) {
                deck.items.push(index);
            }
        }
        for deck in tag_decks.iter_mut() {
            if item.tags.iter().any(|t| *t == deck.label) {
                deck.items.push(index);
            }
        }
        for deck in developer_decks.iter_mut() {
            if item.developers.iter().any(|d| *d == deck.label) {
                deck.items.push(index);
            }
        }
        if let (Some(deck), Some(year)) = (year_deck.as_mut(), open.year) {
            if item.year == Some(year) {
                deck.items.push(index);
            }
        }
        if let Some(deck) = installed_deck.as_mut() {
            if item.is_installed {
                deck.items.push(index);
            }
        }
        if let Some(deck) = hidden_deck.as_mut() {
            if item.is_hidden {
                deck.items.push(index);
            }
        }
    }

    // Stable by score: equal-scored series keep their original order.
    series_decks.sort_by_key(|deck| {
        std::cmp::Reverse(series_score(&deck.label, &open_words))
    });

    let mut decks = series_decks;
    decks.extend(family_deck);
    decks.extend(tag_decks);
    decks.extend(developer_decks);
    decks.extend(year_deck);
    decks.extend(installed_deck);
    decks.extend(hidden_deck);
    decks.retain(|deck| deck.items.len() >= 2);
    tracing::debug!(open_index, decks = decks.len(), "decks rebuilt");
    decks
}
