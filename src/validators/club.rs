//! Create/edit club form validation.

use crate::model::ClubForm;

use super::ValidationError;

/// Order: name present, name length, description present, description
/// length, category selected.
pub fn validate_club(form: &ClubForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::RequiredFields);
    }
    if form.name.trim().len() < 3 {
        return Err(ValidationError::InvalidField(
            "club name (minimum 3 characters)".to_owned(),
        ));
    }
    if form.description.trim().is_empty() {
        return Err(ValidationError::RequiredFields);
    }
    if form.description.trim().len() < 10 {
        return Err(ValidationError::InvalidField(
            "description (minimum 10 characters)".to_owned(),
        ));
    }
    if form.category.is_none() {
        return Err(ValidationError::RequiredFields);
    }
    Ok(())
}
