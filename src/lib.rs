//! # Paydesk (Payroll & HR administration console)
//!
//! `paydesk` talks to a payroll/HR backend that protects its session API with
//! the double-submit cookie CSRF convention (Laravel Sanctum style) and serves a
//! guarded web console in front of the administration pages.
//!
//! ## CSRF handshake
//!
//! 1. **Prime:** `GET /sanctum/csrf-cookie` makes the backend set an `XSRF-TOKEN`
//!    cookie.
//! 2. **Mirror:** every API call copies the decoded cookie value into the
//!    `X-XSRF-TOKEN` header and sends the cookie jar along.
//! 3. **Refresh:** a `419` answer means the token went stale; the client primes
//!    again and resends the call exactly once.
//!
//! ## Route guard
//!
//! The console decides per request, from the session cookie alone, whether a
//! navigation goes through or is redirected between `/login` and the landing
//! page. The guard is a UX convenience; authorization lives on the backend.

pub mod api;
pub mod cli;
pub mod console;
pub mod features;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
