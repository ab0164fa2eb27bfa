//! Wire and domain types.
//!
//! The backend is a Mongo-backed REST API: identifiers may be spelled `id`
//! or `_id`, and user references inside a club may arrive either as a bare
//! id string or as an embedded user object. Both quirks are absorbed here so
//! nothing downstream has to care.

mod forms;
mod responses;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use forms::{ClubForm, ImageFile, LoginForm, SignupForm};
pub use responses::{
    ClubListResponse, ClubResponse, LoginResponse, MembersResponse, MessageResponse,
    SignupResponse,
};

/// Role carried by the authenticated user. Everything that is not an admin
/// is a plain member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Member => write!(f, "member"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The user record held in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// A user as embedded inside a club's `members` or `createdBy` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A reference to a user: either a bare identifier or an embedded object.
///
/// All equality checks go through [`UserRef::id`], the single normalization
/// point for the two representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Embedded(UserSummary),
    Id(String),
}

impl UserRef {
    /// The referenced user's identifier, whichever shape this is.
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Embedded(user) => &user.id,
        }
    }

    /// Display name, when the embedded object carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Id(_) => None,
            UserRef::Embedded(user) => user.name.as_deref(),
        }
    }
}

/// The fourteen fixed club categories.
///
/// Deserialization is lenient: an unrecognized category maps to `Others`
/// rather than rejecting the whole club record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClubCategory {
    Technology,
    Music,
    Art,
    Dance,
    Literature,
    Photography,
    Drama,
    Science,
    Sports,
    Gaming,
    Business,
    Coding,
    Cultural,
    Others,
}

impl<'de> Deserialize<'de> for ClubCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(ClubCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .unwrap_or(ClubCategory::Others))
    }
}

impl ClubCategory {
    pub const ALL: [ClubCategory; 14] = [
        ClubCategory::Technology,
        ClubCategory::Music,
        ClubCategory::Art,
        ClubCategory::Dance,
        ClubCategory::Literature,
        ClubCategory::Photography,
        ClubCategory::Drama,
        ClubCategory::Science,
        ClubCategory::Sports,
        ClubCategory::Gaming,
        ClubCategory::Business,
        ClubCategory::Coding,
        ClubCategory::Cultural,
        ClubCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::Technology => "Technology",
            ClubCategory::Music => "Music",
            ClubCategory::Art => "Art",
            ClubCategory::Dance => "Dance",
            ClubCategory::Literature => "Literature",
            ClubCategory::Photography => "Photography",
            ClubCategory::Drama => "Drama",
            ClubCategory::Science => "Science",
            ClubCategory::Sports => "Sports",
            ClubCategory::Gaming => "Gaming",
            ClubCategory::Business => "Business",
            ClubCategory::Coding => "Coding",
            ClubCategory::Cultural => "Cultural",
            ClubCategory::Others => "Others",
        }
    }
}

impl Default for ClubCategory {
    fn default() -> Self {
        ClubCategory::Others
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A club as served by the backend. Read-mostly projection; never cached
/// beyond the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ClubCategory,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub members: Vec<UserRef>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<UserRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Club {
    /// True when `user_id` appears in the member list, whichever
    /// representation each entry uses.
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member.id() == user_id)
    }

    /// True when the club was created by `user_id`.
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.created_by
            .as_ref()
            .is_some_and(|creator| creator.id() == user_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
