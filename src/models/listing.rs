use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category -- closed set of game genres carried by the catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "MMORPG")]
    Mmorpg,
    #[serde(rename = "MOBA")]
    Moba,
    #[serde(rename = "Battle Royale")]
    BattleRoyale,
    Shooter,
    #[serde(rename = "RPG")]
    Rpg,
    Action,
    Sandbox,
}

impl Category {
    /// The display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mmorpg => "MMORPG",
            Category::Moba => "MOBA",
            Category::BattleRoyale => "Battle Royale",
            Category::Shooter => "Shooter",
            Category::Rpg => "RPG",
            Category::Action => "Action",
            Category::Sandbox => "Sandbox",
        }
    }

    /// Parse a display label back into a category.
    ///
    /// Returns `None` for labels outside the enumerated set; category filters
    /// treat such labels as matching nothing rather than as an error.
    pub fn from_label(label: &str) -> Option<Category> {
        match label {
            "MMORPG" => Some(Category::Mmorpg),
            "MOBA" => Some(Category::Moba),
            "Battle Royale" => Some(Category::BattleRoyale),
            "Shooter" => Some(Category::Shooter),
            "RPG" => Some(Category::Rpg),
            "Action" => Some(Category::Action),
            "Sandbox" => Some(Category::Sandbox),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Seller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: String,
    /// Seller rating on a 0..=5 scale.
    pub rating: f64,
    pub sales_count: u64,
    pub verified: bool,
}

// ---------------------------------------------------------------------------
// Listing -- one seller's offer of an in-game currency lot
// ---------------------------------------------------------------------------

/// A purchasable catalog entry: game, currency, seller and price.
///
/// Listings are immutable once the catalog is constructed; the cart keeps its
/// own price snapshot instead of borrowing from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique within a catalog snapshot.
    pub id: String,
    /// Primary display name; may contain Cyrillic letters.
    pub game_name: String,
    /// Optional secondary label (typically the Latin-script title).
    pub game_name_localized: Option<String>,
    pub category: Category,
    pub currency_name: String,
    /// Flat price of the whole lot, in currency units. Always positive.
    pub price: f64,
    pub seller: Seller,
    /// Maximum units purchasable from this listing.
    pub stock_quantity: u64,
}

impl Listing {
    /// The secondary label if present, otherwise the primary name.
    pub fn localized_or_primary(&self) -> &str {
        self.game_name_localized.as_deref().unwrap_or(&self.game_name)
    }
}
