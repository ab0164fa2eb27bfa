//! Endpoint registry.
//!
//! Pure data: a mapping from logical operation names to absolute URLs, all
//! rooted at one configured base URL. Consumed by the actions; it carries no
//! behavior of its own.

/// URL builders for every backend operation.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Creates a registry rooted at `base`, e.g. `https://host/api/v1`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    // Auth

    pub fn signup(&self) -> String {
        format!("{}/auth/signup", self.base)
    }

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    pub fn profile(&self) -> String {
        format!("{}/auth/profile", self.base)
    }

    // Clubs

    pub fn create_club(&self) -> String {
        format!("{}/clubs/create", self.base)
    }

    pub fn all_clubs(&self) -> String {
        format!("{}/clubs/all", self.base)
    }

    pub fn club_by_id(&self, club_id: &str) -> String {
        format!("{}/clubs/{}", self.base, club_id)
    }

    pub fn my_clubs(&self) -> String {
        format!("{}/clubs/my-clubs", self.base)
    }

    pub fn club_members(&self, club_id: &str) -> String {
        format!("{}/clubs/members/{}", self.base, club_id)
    }

    pub fn join_club(&self, club_id: &str) -> String {
        format!("{}/clubs/join/{}", self.base, club_id)
    }

    pub fn leave_club(&self, club_id: &str) -> String {
        format!("{}/clubs/leave/{}", self.base, club_id)
    }

    pub fn update_club(&self, club_id: &str) -> String {
        format!("{}/clubs/update/{}", self.base, club_id)
    }

    /// Delete shares the get-by-id path; only the method differs.
    pub fn delete_club(&self, club_id: &str) -> String {
        self.club_by_id(club_id)
    }
}
