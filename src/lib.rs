//! Client SDK for the clubhouse membership platform.
//!
//! This crate owns the client-side session and authorization model together
//! with the API access layer: a generic HTTP transport, a typed endpoint
//! registry, a persisted session store, and composed operations for the auth
//! and club flows. Views are external collaborators: they read the session
//! through [`SessionStore`], invoke an action, and receive outcome feedback
//! through an injected [`Notifier`] and [`Navigator`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use clubhouse::actions::LoginAction;
//! use clubhouse::model::LoginForm;
//! use clubhouse::notify::LogNotifier;
//! use clubhouse::session::MemorySessionStore;
//! use clubhouse::transport::HttpTransport;
//! use clubhouse::ClubhouseConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClubhouseConfig::new("https://api.example.com/api/v1");
//!     let login = LoginAction::new(
//!         HttpTransport::new(),
//!         config.endpoints(),
//!         MemorySessionStore::new(),
//!         LogNotifier::new(),
//!         my_router,
//!     );
//!
//!     let form = LoginForm {
//!         email: "a@b.com".to_owned(),
//!         password: "secret1".to_owned(),
//!     };
//!     let _ = login.execute(&form).await;
//! }
//! ```

pub mod actions;
pub mod config;
pub mod endpoints;
pub mod gate;
pub mod model;
pub mod navigate;
pub mod notify;
pub mod session;
pub mod transport;
pub mod validators;

use std::fmt;

pub use config::ClubhouseConfig;
pub use endpoints::Endpoints;
pub use navigate::{Navigator, Route};
pub use notify::Notifier;
pub use session::{Session, SessionStore};
pub use transport::Transport;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use navigate::RecordingNavigator;
#[cfg(any(test, feature = "mocks"))]
pub use notify::RecordingNotifier;
#[cfg(any(test, feature = "mocks"))]
pub use transport::MockTransport;

/// Errors surfaced by the transport, session store and operations.
///
/// The [`Display`](fmt::Display) rendering of each variant is the exact text
/// shown to the user when an operation notifies a failure, so backend-reported
/// messages pass through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response was received (DNS failure, refused connection, ...).
    Network(String),
    /// The backend answered with a non-success status. `message` carries the
    /// body's `message` field when one was present.
    Api { status: u16, message: Option<String> },
    /// The request's abort signal fired before the response settled.
    Aborted,
    /// A response or persisted value could not be (de)serialized.
    Serialization(String),
    /// The session store's backing storage failed.
    Storage(String),
    /// The persisted user record exists but cannot be parsed. Propagated to
    /// the caller rather than silently clearing the session.
    CorruptSession(String),
    /// A form failed validation before any network call was made.
    Validation(ValidationError),
}

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "{}", msg),
            ClientError::Api {
                message: Some(msg), ..
            } => write!(f, "{}", msg),
            ClientError::Api {
                status,
                message: None,
            } => write!(f, "Request failed with status {}", status),
            ClientError::Aborted => write!(f, "Request aborted"),
            ClientError::Serialization(msg) => write!(f, "Failed to parse response: {}", msg),
            ClientError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ClientError::CorruptSession(msg) => write!(f, "Corrupt session record: {}", msg),
            ClientError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl ClientError {
    /// The message the backend sent with a failed response, if any.
    ///
    /// Operations fall back to a flow-specific generic message when this
    /// returns `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api {
                message: Some(msg), ..
            } => Some(msg),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}
