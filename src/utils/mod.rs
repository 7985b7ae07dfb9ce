//! Utility functions for the ads catalogue.

mod validation;

pub use validation::{
    validate_description, validate_password, validate_price, validate_user_name,
};
