use std::time::Duration;

/// Smallest amount a cart line can be stepped down to through the +/- controls.
pub const MIN_CART_UNITS: i64 = 1000;

/// Step size used by the cart quantity stepper.
pub const CART_STEP_UNITS: i64 = 5000;

/// Fixed delay before a canned chat reply is considered delivered.
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Sentinel category label that matches every listing.
pub const CATEGORY_ALL: &str = "all";

/// The built-in ten-listing catalog seed, shipped with the crate.
pub const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Category labels offered by a presentation-layer filter widget, with the
/// "all" sentinel first.
pub fn category_labels() -> Vec<&'static str> {
    vec![
        CATEGORY_ALL,
        "MMORPG",
        "MOBA",
        "Battle Royale",
        "Shooter",
        "RPG",
        "Action",
        "Sandbox",
    ]
}
