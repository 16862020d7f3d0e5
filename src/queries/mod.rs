//! Query modules for the storefront catalog.
//!
//! Each module provides a query struct that borrows from a
//! [`CatalogIndex`](crate::catalog::CatalogIndex) and answers read-only
//! questions over the listing set.

pub mod listings;

pub use listings::{partition_by_script, ListingQuery, ListingSearchParams, ScriptPartition, SortKey};
