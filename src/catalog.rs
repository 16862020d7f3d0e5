//! Load-time-immutable listing catalog.
//!
//! The catalog is constructed once (from the built-in seed, a JSON document,
//! or an explicit listing collection), validated, and then only ever read.
//! Stock is not decremented on purchase; the cart works off price snapshots.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config;
use crate::error::{MarketError, Result};
use crate::models::Listing;

/// Immutable, validated collection of [`Listing`]s.
///
/// Queries go through [`ListingQuery`](crate::queries::listings::ListingQuery),
/// obtained from [`Marketplace::listings`](crate::Marketplace::listings) or
/// directly via [`ListingQuery::new`](crate::queries::listings::ListingQuery::new).
#[derive(Debug)]
pub struct CatalogIndex {
    listings: Vec<Listing>,
}

impl CatalogIndex {
    /// Build a catalog from an explicit listing collection.
    ///
    /// Validates every listing (positive price, rating within 0..=5, unique
    /// ids) and rejects the whole collection on the first violation.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        for listing in &listings {
            if listing.price <= 0.0 || listing.price.is_nan() {
                return Err(MarketError::InvalidListing(format!(
                    "listing '{}' has non-positive price {}",
                    listing.id, listing.price
                )));
            }
            if !(0.0..=5.0).contains(&listing.seller.rating) {
                return Err(MarketError::InvalidListing(format!(
                    "listing '{}' has seller rating {} outside 0..=5",
                    listing.id, listing.seller.rating
                )));
            }
            if !seen_ids.insert(listing.id.as_str()) {
                return Err(MarketError::InvalidListing(format!(
                    "duplicate listing id '{}'",
                    listing.id
                )));
            }
        }
        Ok(Self { listings })
    }

    /// Parse a catalog from a JSON array of listings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The ten-listing seed catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(config::BUILTIN_CATALOG)
    }

    // -- Read access ---------------------------------------------------------

    /// All listings, in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by id.
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Iterate over the listings in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
