//! Composed operations.
//!
//! Each action binds the transport, the endpoint registry and the outcome
//! side effects (session writes, notifications, navigation) for one backend
//! operation. Auth actions own their session and navigation effects; club
//! actions take the bearer token from the caller — they never read the
//! session store themselves.
//!
//! Failure policy is uniform: catch the transport error only to notify
//! (server message first, flow-specific fallback second), then re-throw.
//! Reads notify only on failure. Logout alone cannot fail observably.

mod club_members;
mod create_club;
mod delete_club;
mod get_club;
mod join_club;
mod leave_club;
mod list_clubs;
mod login;
mod logout;
mod profile;
mod signup;
mod update_club;

pub use club_members::ClubMembersAction;
pub use create_club::CreateClubAction;
pub use delete_club::DeleteClubAction;
pub use get_club::GetClubAction;
pub use join_club::JoinClubAction;
pub use leave_club::LeaveClubAction;
pub use list_clubs::ListClubsAction;
pub use login::LoginAction;
pub use logout::LogoutAction;
pub use profile::GetProfileAction;
pub use signup::SignupAction;
pub use update_club::UpdateClubAction;
