use crate::models::LineId;

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Invalid listing: {0}")]
    InvalidListing(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
