//! Input validation utilities.

use crate::{AdBoardError, Result, MAX_DESCRIPTION_LEN};

/// Validate a user name
pub fn validate_user_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AdBoardError::validation(
            "name",
            "User name cannot be blank",
        ));
    }

    if name.len() > 32 {
        return Err(AdBoardError::validation(
            "name",
            "User name cannot exceed 32 characters",
        ));
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(AdBoardError::validation(
            "password",
            "Password cannot be blank",
        ));
    }

    if password.len() > 128 {
        return Err(AdBoardError::validation(
            "password",
            "Password cannot exceed 128 characters",
        ));
    }

    Ok(())
}

/// Validate an ad description
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(AdBoardError::validation(
            "description",
            "Description cannot be blank",
        ));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AdBoardError::validation(
            "description",
            format!("Description cannot exceed {} characters", MAX_DESCRIPTION_LEN),
        ));
    }

    Ok(())
}

/// Validate an asking price
pub fn validate_price(price: u32) -> Result<()> {
    if price == 0 {
        return Err(AdBoardError::validation(
            "price",
            "Price must be strictly positive",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_name() {
        assert!(validate_user_name("Marcel").is_ok());
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name(" \n\t").is_err());
        assert!(validate_user_name(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("pass-Marcel").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("   ").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Hardly used lawnmower").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("  ").is_err());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(1).is_ok());
        assert!(validate_price(0).is_err());
    }
}
