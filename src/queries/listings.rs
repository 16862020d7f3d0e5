//! Listing queries over the immutable catalog.
//!
//! Search combines a case-insensitive name term with an exact category label,
//! both conjunctive, then applies a stable sort. The script partition groups
//! an already-filtered sequence by whether the primary name is Cyrillic.

use crate::catalog::CatalogIndex;
use crate::config;
use crate::models::Listing;

// ---------------------------------------------------------------------------
// ListingSearchParams
// ---------------------------------------------------------------------------

/// Sort order applied to search results.
///
/// All sorts are stable: listings with equal keys keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Locale-aware compare on the primary name (`ё` collates after `е`).
    #[default]
    GameName,
    /// Ordinary lexicographic compare on the secondary label, falling back to
    /// the primary name where the label is absent.
    GameNameLocalized,
    /// Ordinary lexicographic compare on the category label.
    Category,
}

/// Parameters for a catalog search.
///
/// The default value matches every listing and sorts by primary name.
#[derive(Debug, Clone, Default)]
pub struct ListingSearchParams {
    /// Case-insensitive substring matched against the primary name or the
    /// secondary label. `None` or empty matches everything.
    pub term: Option<String>,
    /// Exact category label. `None` or `"all"` matches everything; a label
    /// outside the enumerated set matches nothing.
    pub category: Option<String>,
    pub sort: SortKey,
}

// ---------------------------------------------------------------------------
// ListingQuery
// ---------------------------------------------------------------------------

/// Query interface for catalog listings.
pub struct ListingQuery<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> ListingQuery<'a> {
    /// Create a new `ListingQuery` bound to the given catalog.
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// Search the catalog, returning a fresh owned sequence.
    ///
    /// An empty result is a normal value, not an error; the presentation
    /// layer renders it as a "no results" state.
    pub fn search(&self, params: &ListingSearchParams) -> Vec<Listing> {
        let term = params
            .term
            .as_deref()
            .unwrap_or("")
            .to_lowercase();

        let mut results: Vec<Listing> = self
            .catalog
            .iter()
            .filter(|l| matches_term(l, &term) && matches_category(l, params.category.as_deref()))
            .cloned()
            .collect();

        match params.sort {
            SortKey::GameName => {
                results.sort_by(|a, b| collation_key(&a.game_name).cmp(&collation_key(&b.game_name)))
            }
            SortKey::GameNameLocalized => {
                results.sort_by(|a, b| a.localized_or_primary().cmp(b.localized_or_primary()))
            }
            SortKey::Category => {
                results.sort_by(|a, b| a.category.label().cmp(b.category.label()))
            }
        }

        results
    }

    /// Look up a single listing by id.
    ///
    /// This is the bridge a presentation layer uses between a selected
    /// listing and [`CartLedger::add_line`](crate::cart::CartLedger::add_line).
    pub fn get_by_id(&self, id: &str) -> Option<&'a Listing> {
        self.catalog.get(id)
    }

    /// Total number of listings in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.len()
    }
}

// ---------------------------------------------------------------------------
// Script partition
// ---------------------------------------------------------------------------

/// Listings grouped by the script of their primary name.
///
/// The two sequences are disjoint and together cover the partitioned input.
#[derive(Debug, Clone, Default)]
pub struct ScriptPartition {
    /// Listings whose primary name contains at least one Cyrillic letter.
    pub cyrillic: Vec<Listing>,
    /// Everything else.
    pub latin: Vec<Listing>,
}

/// Partition a listing sequence by primary-name script.
///
/// The test is simple character-class membership (`а`..`я` plus `ё`, case
/// insensitive), not locale detection, and is independent of any search
/// filters: the input is typically a [`ListingQuery::search`] result and its
/// order is preserved within each group.
pub fn partition_by_script(listings: &[Listing]) -> ScriptPartition {
    let mut partition = ScriptPartition::default();
    for listing in listings {
        if has_cyrillic(&listing.game_name) {
            partition.cyrillic.push(listing.clone());
        } else {
            partition.latin.push(listing.clone());
        }
    }
    partition
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Term filter: case-insensitive substring of the primary name or the
/// secondary label. The term is expected pre-lowercased.
fn matches_term(listing: &Listing, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if listing.game_name.to_lowercase().contains(term) {
        return true;
    }
    listing
        .game_name_localized
        .as_deref()
        .map(|name| name.to_lowercase().contains(term))
        .unwrap_or(false)
}

/// Category filter: exact label match, with `None`/`"all"` matching
/// everything. Labels outside the enumerated set never match.
fn matches_category(listing: &Listing, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(label) if label == config::CATEGORY_ALL => true,
        Some(label) => listing.category.label() == label,
    }
}

fn has_cyrillic(s: &str) -> bool {
    s.chars()
        .flat_map(char::to_lowercase)
        .any(|c| ('а'..='я').contains(&c) || c == 'ё')
}

/// Collation key for the locale-aware primary-name sort: lowercased
/// code points, with `ё` ordered directly after `е`.
fn collation_key(s: &str) -> Vec<(char, u8)> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { ('е', 1) } else { (c, 0) })
        .collect()
}
