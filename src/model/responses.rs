//! Typed response payloads, one per endpoint family.
//!
//! All fields default on absence: the backend's envelope is
//! `{ success, ...data, message? }` but the exact shape varies by endpoint.

use serde::Deserialize;

use super::{Club, SessionUser, UserRef};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClubResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub club: Option<Club>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClubListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub members: Vec<UserRef>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Catch-all for endpoints that only acknowledge (join, leave, delete).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
