//! Client configuration.
//!
//! Centralizes the settings views would otherwise hardcode: the API base URL
//! and the UX debounce applied before the post-signup redirect.
//!
//! # Example
//!
//! ```rust
//! use clubhouse::ClubhouseConfig;
//! use std::time::Duration;
//!
//! let config = ClubhouseConfig::new("https://api.example.com/api/v1");
//! assert_eq!(config.signup_redirect_delay, Duration::from_secs(1));
//!
//! // Tests and dev builds skip the redirect debounce.
//! let config = ClubhouseConfig::development("http://localhost:4000/api/v1");
//! assert!(config.signup_redirect_delay.is_zero());
//! ```

use std::time::Duration;

use crate::endpoints::Endpoints;

/// Configuration for the clubhouse client.
#[derive(Debug, Clone)]
pub struct ClubhouseConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,

    /// Delay applied between a successful signup notification and the
    /// redirect to the login route. Purely a UX debounce; zero is valid.
    pub signup_redirect_delay: Duration,
}

impl ClubhouseConfig {
    /// Creates a configuration with production defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            signup_redirect_delay: Duration::from_secs(1),
        }
    }

    /// Creates a configuration suitable for development and testing.
    ///
    /// Disables the post-signup redirect debounce.
    pub fn development(base_url: impl Into<String>) -> Self {
        Self {
            signup_redirect_delay: Duration::ZERO,
            ..Self::new(base_url)
        }
    }

    /// The endpoint registry rooted at this configuration's base URL.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = ClubhouseConfig::new("https://api.example.com/api/v1");
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.signup_redirect_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClubhouseConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
    }

    #[test]
    fn test_development_config_has_no_redirect_delay() {
        let config = ClubhouseConfig::development("http://localhost:4000");
        assert!(config.signup_redirect_delay.is_zero());
    }
}
