//! Form payloads submitted by views.
//!
//! Validation lives in [`crate::validators`]; the types here only carry the
//! data and know how to encode themselves for the wire.

use serde::Serialize;

use super::{ClubCategory, Role};
use crate::transport::Part;

/// Login form: posted as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form: posted as JSON. The requested role is optional; the backend
/// decides whether to honor it.
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Image file attached to a club form.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Create/edit club form: sent as multipart with fields `name`,
/// `description`, `category` and an optional `image` file.
#[derive(Debug, Clone, Default)]
pub struct ClubForm {
    pub name: String,
    pub description: String,
    pub category: Option<ClubCategory>,
    pub image: Option<ImageFile>,
}

impl ClubForm {
    /// Encodes the form as multipart parts. Call after validation; a missing
    /// category is simply omitted.
    pub fn into_parts(self) -> Vec<Part> {
        let mut parts = vec![
            Part::text("name", self.name),
            Part::text("description", self.description),
        ];
        if let Some(category) = self.category {
            parts.push(Part::text("category", category.as_str()));
        }
        if let Some(image) = self.image {
            parts.push(Part::file(
                "image",
                image.filename,
                image.content_type,
                image.bytes,
            ));
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::PartValue;
    use serde_json::json;

    #[test]
    fn test_login_form_serializes_as_json() {
        let form = LoginForm {
            email: "a@b.com".to_owned(),
            password: "secret1".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"email": "a@b.com", "password": "secret1"})
        );
    }

    #[test]
    fn test_signup_form_omits_absent_role() {
        let form = SignupForm {
            name: "Ada".to_owned(),
            email: "ada@b.com".to_owned(),
            password: "secret1".to_owned(),
            role: None,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("role").is_none());

        let with_role = SignupForm {
            role: Some(Role::Admin),
            ..form
        };
        assert_eq!(
            serde_json::to_value(&with_role).unwrap()["role"],
            json!("admin")
        );
    }

    #[test]
    fn test_club_form_parts() {
        let form = ClubForm {
            name: "Chess Club".to_owned(),
            description: "We play chess on Thursdays.".to_owned(),
            category: Some(ClubCategory::Gaming),
            image: Some(ImageFile {
                filename: "logo.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: vec![1, 2, 3],
            }),
        };

        let parts = form.into_parts();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], Part::text("name", "Chess Club"));
        assert_eq!(parts[2], Part::text("category", "Gaming"));
        match &parts[3].value {
            PartValue::File {
                filename,
                content_type,
                bytes,
            } => {
                assert_eq!(filename, "logo.png");
                assert_eq!(content_type, "image/png");
                assert_eq!(bytes, &[1, 2, 3]);
            }
            PartValue::Text(_) => panic!("expected file part"),
        }
    }

    #[test]
    fn test_club_form_without_image_or_category() {
        let parts = ClubForm {
            name: "Chess Club".to_owned(),
            description: "We play chess on Thursdays.".to_owned(),
            category: None,
            image: None,
        }
        .into_parts();
        assert_eq!(parts.len(), 2);
    }
}
