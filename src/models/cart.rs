use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Listing;

// ---------------------------------------------------------------------------
// LineId
// ---------------------------------------------------------------------------

/// Synthetic identifier of a cart line.
///
/// Ids are assigned by the owning [`CartLedger`](crate::cart::CartLedger),
/// increase monotonically and are never reused, so re-adding a listing
/// produces a distinct line rather than resurrecting a removed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CartLine
// ---------------------------------------------------------------------------

/// One in-progress purchase request for a listing.
///
/// Carries a denormalized copy of the fields a cart view renders, plus the
/// price captured at add time so later catalog changes cannot affect an open
/// cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub line_id: LineId,
    /// Reference back to the originating listing (not ownership).
    pub listing_id: String,
    pub game_name: String,
    pub currency_name: String,
    pub seller_name: String,
    pub seller_verified: bool,
    /// Requested units. Positive while the line is in the ledger; a quantity
    /// driven to zero or below removes the line instead.
    pub amount: i64,
    /// Lot price captured when the line was added.
    pub unit_price_snapshot: f64,
}

impl CartLine {
    /// Build a line from a listing at the given quantity.
    ///
    /// The ledger validates the quantity and assigns the id; callers go
    /// through [`CartLedger::add_line`](crate::cart::CartLedger::add_line).
    pub(crate) fn from_listing(line_id: LineId, listing: &Listing, amount: i64) -> Self {
        Self {
            line_id,
            listing_id: listing.id.clone(),
            game_name: listing.game_name.clone(),
            currency_name: listing.currency_name.clone(),
            seller_name: listing.seller.name.clone(),
            seller_verified: listing.seller.verified,
            amount,
            unit_price_snapshot: listing.price,
        }
    }
}
