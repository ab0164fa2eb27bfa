//! Login and signup form validation.

use crate::model::{LoginForm, SignupForm};

use super::ValidationError;

/// Order: required fields, email shape, password length.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::RequiredFields);
    }
    if !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.len() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Order: required fields, name length, email shape, password length.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::RequiredFields);
    }
    if form.name.len() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.len() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
