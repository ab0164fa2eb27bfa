//! Message catalog.
//!
//! Every transient message the client can show, grouped by concern. The
//! `*_error` helpers prefer the backend's own message and fall back to a
//! flow-specific generic.

pub mod auth {
    pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please login.";
    pub const LOGIN_SUCCESS: &str = "Login successful! Welcome back!";
    pub const LOGOUT_SUCCESS: &str = "Logged out successfully!";
    pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

    pub fn signup_error(server: Option<&str>) -> String {
        server.unwrap_or("Signup failed. Please try again.").to_owned()
    }

    pub fn login_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Login failed. Please check your credentials.")
            .to_owned()
    }
}

pub mod club {
    pub const CREATE_SUCCESS: &str = "Club created successfully!";
    pub const UPDATE_SUCCESS: &str = "Club updated successfully!";
    pub const DELETE_SUCCESS: &str = "Club deleted successfully!";
    pub const JOIN_SUCCESS: &str = "Successfully joined the club!";
    pub const LEAVE_SUCCESS: &str = "Successfully left the club!";

    pub fn create_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Failed to create club. Please try again.")
            .to_owned()
    }

    pub fn update_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Failed to update club. Please try again.")
            .to_owned()
    }

    pub fn delete_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Failed to delete club. Please try again.")
            .to_owned()
    }

    pub fn join_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Failed to join club. Please try again.")
            .to_owned()
    }

    pub fn leave_error(server: Option<&str>) -> String {
        server
            .unwrap_or("Failed to leave club. Please try again.")
            .to_owned()
    }

    /// Reads are not celebratory: they notify only on failure, with the
    /// fetched thing named ("clubs", "your clubs", "club members", "club").
    pub fn fetch_error(what: &str) -> String {
        format!("Failed to fetch {what}. Please try again.")
    }
}

pub mod permission {
    pub const LOGIN_REQUIRED: &str = "Please login to perform this action.";
    pub const ADMIN_REQUIRED: &str = "Admin privileges required for this action.";
    pub const UNAUTHORIZED: &str = "You are not authorized to perform this action.";
}

pub mod progress {
    pub const CREATING_ACCOUNT: &str = "Creating your account...";
    pub const SIGNING_IN: &str = "Signing you in...";
    pub const CREATING_CLUB: &str = "Creating club...";
    pub const UPDATING_CLUB: &str = "Updating club...";
    pub const DELETING_CLUB: &str = "Deleting club...";
    pub const JOINING_CLUB: &str = "Joining club...";
    pub const LEAVING_CLUB: &str = "Leaving club...";
}
