//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides `sample_catalog()`, a six-listing catalog mixing Cyrillic and
//! Latin primary names across several categories, deliberately stored in
//! non-sorted order so sorting tests have something to do.

use gamecurrency_sdk::{CatalogIndex, Listing};

/// The fixture listings, in catalog (insertion) order.
pub fn sample_listings() -> Vec<Listing> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "1",
            "gameName": "Мир Танков",
            "gameNameLocalized": "World of Tanks",
            "category": "Action",
            "currencyName": "Золото",
            "price": 15.99,
            "seller": { "name": "TankMaster", "rating": 4.9, "salesCount": 1200, "verified": true },
            "stockQuantity": 200000
        },
        {
            "id": "2",
            "gameName": "Аллоды Онлайн",
            "gameNameLocalized": "Allods Online",
            "category": "MMORPG",
            "currencyName": "Астралы",
            "price": 5.99,
            "seller": { "name": "AllodsKing", "rating": 4.7, "salesCount": 234, "verified": true },
            "stockQuantity": 100000
        },
        {
            "id": "3",
            "gameName": "World of Warcraft",
            "gameNameLocalized": "World of Warcraft",
            "category": "MMORPG",
            "currencyName": "WoW Gold",
            "price": 12.99,
            "seller": { "name": "ProGamer777", "rating": 4.9, "salesCount": 1205, "verified": true },
            "stockQuantity": 600000
        },
        {
            "id": "4",
            "gameName": "Genshin Impact",
            "gameNameLocalized": "Genshin Impact",
            "category": "RPG",
            "currencyName": "Primogems",
            "price": 8.5,
            "seller": { "name": "GenshinMaster", "rating": 4.9, "salesCount": 1800, "verified": true },
            "stockQuantity": 150000
        },
        {
            "id": "5",
            "gameName": "Dota 2",
            "gameNameLocalized": "Dota 2",
            "category": "MOBA",
            "currencyName": "Steam Wallet",
            "price": 12.0,
            "seller": { "name": "DotaLegend", "rating": 4.8, "salesCount": 1500, "verified": true },
            "stockQuantity": 300000
        },
        {
            "id": "6",
            "gameName": "Варфейс",
            "gameNameLocalized": "Warface",
            "category": "Shooter",
            "currencyName": "Варбаксы",
            "price": 3.5,
            "seller": { "name": "WarPro", "rating": 4.5, "salesCount": 567, "verified": false },
            "stockQuantity": 50000
        }
    ]))
    .unwrap()
}

/// A validated catalog over the fixture listings.
pub fn sample_catalog() -> CatalogIndex {
    CatalogIndex::from_listings(sample_listings()).unwrap()
}

/// Build a single ad-hoc listing with fixed seller and stock.
#[allow(dead_code)]
pub fn listing(id: &str, game_name: &str, localized: &str, category: &str, price: f64) -> Listing {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "gameName": game_name,
        "gameNameLocalized": localized,
        "category": category,
        "currencyName": "Gold",
        "price": price,
        "seller": { "name": "TestSeller", "rating": 4.5, "salesCount": 10, "verified": true },
        "stockQuantity": 100000
    }))
    .unwrap()
}
