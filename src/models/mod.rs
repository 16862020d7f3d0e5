pub mod cart;
pub mod listing;

pub use cart::*;
pub use listing::*;
