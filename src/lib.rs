//! SDK for a game-currency storefront.
//!
//! Provides the storefront's core engine: an immutable, queryable catalog of
//! currency listings and a per-session shopping cart ledger, plus the canned
//! buyer/seller chat. Presentation layers drive these components and render
//! the results; the SDK itself performs no I/O beyond loading catalog seed
//! data.
//!
//! # Quick start
//!
//! ```
//! use gamecurrency_sdk::{ListingSearchParams, Marketplace};
//!
//! let market = Marketplace::builder().build().unwrap();
//!
//! // Query the catalog
//! let results = market.listings().search(&ListingSearchParams {
//!     term: Some("genshin".to_string()),
//!     ..Default::default()
//! });
//!
//! // Put the hit in a session cart
//! let mut cart = market.new_cart();
//! let line_id = cart.add_line(&results[0], 50_000).unwrap();
//! cart.step_down(line_id).unwrap();
//! assert_eq!(cart.subtotal(), results[0].price);
//! ```

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;

pub use cart::CartLedger;
pub use catalog::CatalogIndex;
pub use chat::{ChatKind, ChatMessage, ChatSession, Sender};
pub use error::{MarketError, Result};
pub use models::{CartLine, Category, LineId, Listing, Seller};
pub use queries::{partition_by_script, ListingQuery, ListingSearchParams, ScriptPartition, SortKey};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// MarketplaceBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Marketplace`] instance.
///
/// Use [`Marketplace::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MarketplaceBuilder::build) to create the
/// marketplace.
#[derive(Default)]
pub struct MarketplaceBuilder {
    listings: Option<Vec<Listing>>,
    catalog_path: Option<PathBuf>,
}

impl MarketplaceBuilder {
    /// Seed the catalog from an explicit listing collection.
    ///
    /// Takes precedence over [`catalog_file`](Self::catalog_file).
    pub fn listings(mut self, listings: Vec<Listing>) -> Self {
        self.listings = Some(listings);
        self
    }

    /// Seed the catalog from a JSON file (an array of listings).
    pub fn catalog_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the marketplace, loading and validating the catalog.
    ///
    /// Falls back to the built-in seed catalog when no source was configured.
    pub fn build(self) -> Result<Marketplace> {
        let catalog = if let Some(listings) = self.listings {
            CatalogIndex::from_listings(listings)?
        } else if let Some(path) = self.catalog_path {
            CatalogIndex::from_json_file(path)?
        } else {
            CatalogIndex::builtin()?
        };
        Ok(Marketplace { catalog })
    }
}

// ---------------------------------------------------------------------------
// Marketplace
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the immutable [`CatalogIndex`] and mints the per-session mutable
/// components ([`CartLedger`], [`ChatSession`]). The catalog may be shared
/// read-only across any number of query callers; carts and chats are
/// exclusively owned by their session.
pub struct Marketplace {
    catalog: CatalogIndex,
}

impl Marketplace {
    /// Create a new builder for configuring the marketplace.
    pub fn builder() -> MarketplaceBuilder {
        MarketplaceBuilder::default()
    }

    /// Access the listing query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the catalog.
    pub fn listings(&self) -> ListingQuery<'_> {
        ListingQuery::new(&self.catalog)
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Create an empty cart ledger for one user session.
    pub fn new_cart(&self) -> CartLedger {
        CartLedger::new()
    }

    /// Open a canned chat with a seller.
    pub fn chat_with_seller(&self, seller_name: &str) -> ChatSession {
        ChatSession::with_seller(seller_name)
    }

    /// Open a canned support chat.
    pub fn support_chat(&self) -> ChatSession {
        ChatSession::with_support()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marketplace(listings={})", self.catalog.len())
    }
}
