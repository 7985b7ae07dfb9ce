//! Classified-ad records and their categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Timestamped;
use crate::utils::{validate_description, validate_price};
use crate::Result;

/// Category of an ad, used for partitioning and filtered browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Vehicles,
    Books,
}

impl Category {
    /// Get all categories in declaration order
    pub fn all() -> [Self; 5] {
        [
            Self::Electronics,
            Self::Furniture,
            Self::Clothing,
            Self::Vehicles,
            Self::Books,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Clothing => "Clothing",
            Self::Vehicles => "Vehicles",
            Self::Books => "Books",
        };
        write!(f, "{}", s)
    }
}

/// A single classified ad.
///
/// Immutable once created: the category, description, price and creation
/// timestamp are fixed for the lifetime of the record. Two records are equal
/// iff all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdRecord {
    /// Category the ad is filed under
    category: Category,
    /// Free-text description of the item for sale
    description: String,
    /// Asking price, strictly positive
    price: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl AdRecord {
    /// Create a new ad timestamped now.
    ///
    /// The description must be non-blank and at most
    /// [`MAX_DESCRIPTION_LEN`](crate::MAX_DESCRIPTION_LEN) characters; the
    /// price must be strictly positive.
    pub fn new(category: Category, description: impl Into<String>, price: u32) -> Result<Self> {
        Self::with_timestamp(category, description, price, Utc::now())
    }

    /// Create an ad with an explicit creation timestamp.
    ///
    /// Same validation as [`AdRecord::new`]; used when importing historical
    /// listings or building fixtures.
    pub fn with_timestamp(
        category: Category,
        description: impl Into<String>,
        price: u32,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let description = description.into();
        validate_description(&description)?;
        validate_price(price)?;

        Ok(Self {
            category,
            description,
            price,
            created_at,
        })
    }

    /// Category the ad is filed under
    pub fn category(&self) -> Category {
        self.category
    }

    /// Description of the item for sale
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Asking price
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Check if this ad was created strictly after the other one
    pub fn is_after(&self, other: &AdRecord) -> bool {
        self.created_at > other.created_at
    }

    /// Check if this ad was created strictly before the other one
    pub fn is_before(&self, other: &AdRecord) -> bool {
        self.created_at < other.created_at
    }
}

impl Timestamped for AdRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for AdRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.category, self.price, self.description)
    }
}
