//! Synchronous form validation.
//!
//! Rules run in a fixed order and only the first violation is reported; no
//! aggregated multi-error display exists. Validation failures are caught
//! before any network call is made.

mod auth;
mod club;

pub use auth::{validate_login, validate_signup};
pub use club::validate_club;

use serde::{Deserialize, Serialize};

/// First-violation validation outcome. `Display` is the exact notification
/// text shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    RequiredFields,
    InvalidEmail,
    PasswordTooShort,
    NameTooShort,
    /// A named field failed its length rule, e.g.
    /// `"club name (minimum 3 characters)"`.
    InvalidField(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredFields => write!(f, "Please fill in all required fields"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::PasswordTooShort => {
                write!(f, "Password must be at least 6 characters long")
            }
            Self::NameTooShort => write!(f, "Name must be at least 2 characters long"),
            Self::InvalidField(field) => write!(f, "Please enter a valid {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
