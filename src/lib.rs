//! Classified-Ads Catalogue Library
//!
//! An in-memory model of a minimal classified-ads marketplace.
//!
//! # Features
//!
//! - Categorized, newest-first ad lists with no duplicate listings
//! - Bidirectional iteration, scoped to all categories or a selected one
//! - Per-user catalogues keyed by listing state (open, closed, purchased)
//! - Cross-user purchase transaction with cash transfer
//!
//! # Example
//!
//! ```rust
//! use adboard::{AdState, Category, User};
//!
//! fn main() -> adboard::Result<()> {
//!     let mut seller = User::new("Marcel", "hunter2")?;
//!     let mut buyer = User::new("Sonia", "s3cret")?;
//!
//!     let ad = seller.post(Category::Books, "Collected works, good condition", 40)?;
//!     buyer.buy(&mut seller, &ad)?;
//!
//!     assert!(buyer.contains_in(AdState::Purchased, &ad));
//!     assert!(seller.contains_in(AdState::Closed, &ad));
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod utils;

use thiserror::Error;

/// Result type alias for catalogue operations
pub type Result<T> = std::result::Result<T, AdBoardError>;

/// Errors that can occur in the ads catalogue
#[derive(Error, Debug)]
pub enum AdBoardError {
    /// Invalid user input
    #[error("Validation failed: {field} - {message}")]
    Validation {
        field: String,
        message: String,
    },

    /// The ad is already present in the target list
    #[error("Ad already listed: {0}")]
    Duplicate(String),

    /// The buyer cannot cover the asking price
    #[error("Insufficient cash: have {available}, need {required}")]
    InsufficientCash {
        available: u64,
        required: u64,
    },

    /// The ad is not among the vendor's open listings
    #[error("Ad is not open for sale: {0}")]
    NotForSale(String),
}

impl AdBoardError {
    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate-listing error for an ad description
    pub fn duplicate(description: impl Into<String>) -> Self {
        Self::Duplicate(description.into())
    }

    /// Create a not-for-sale error for an ad description
    pub fn not_for_sale(description: impl Into<String>) -> Self {
        Self::NotForSale(description.into())
    }
}

// Re-export commonly used types for convenience
pub use models::{AdList, AdRecord, AdState, Category, User};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cash endowment granted to every newly registered user
pub const INITIAL_CASH: u64 = 1_000_000;

/// Maximum length of an ad description in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AdBoardError::validation("price", "must be positive");
        assert_eq!(err.to_string(), "Validation failed: price - must be positive");
    }

    #[test]
    fn test_duplicate_error_display() {
        let err = AdBoardError::duplicate("Old bike");
        assert_eq!(err.to_string(), "Ad already listed: Old bike");
    }

    #[test]
    fn test_insufficient_cash_display() {
        let err = AdBoardError::InsufficientCash {
            available: 10,
            required: 50,
        };
        assert_eq!(err.to_string(), "Insufficient cash: have 10, need 50");
    }
}
