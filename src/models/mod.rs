//! Data models for the ads catalogue.
//!
//! This module contains all the core data structures used throughout
//! the library: AdRecord, AdList, User, and related types.

mod ad;
mod list;
mod user;

pub use ad::{AdRecord, Category};
pub use list::AdList;
pub use user::{AdState, User};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Trait for entities that have a unique identifier
pub trait Identifiable {
    /// Get the unique identifier
    fn id(&self) -> Uuid;
}

/// Trait for entities stamped with their creation instant
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
}
