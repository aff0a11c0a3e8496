//! Auth feature covering login, session check and logout against the backend
//! session API. It touches the security boundary: passwords stay in
//! `SecretString` and are never logged, and the session cookie is only ever
//! written by the backend.
//!
//! Flow Overview: login primes the CSRF cookie, POSTs the credentials and the
//! backend answers with the user and a session cookie. Check asks the backend
//! whether that cookie is still valid. Logout asks the backend to expire it.

pub mod client;
pub mod state;
pub mod types;

pub use state::AuthSession;
pub use types::{AuthenticatedUser, LoginRequest, Role, RolePolicy};
