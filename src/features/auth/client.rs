//! Client wrappers for the backend auth endpoints. Session cookies are set and
//! expired by the backend; these helpers only send the requests.

use crate::{
    api::{ApiClient, ApiError},
    features::auth::types::{LoginRequest, UserEnvelope},
};
use reqwest::Method;

/// Primes the CSRF cookie and posts the credentials.
/// Must never log the request body.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<UserEnvelope, ApiError> {
    api.prime_token().await;
    api.post_json("/login", request).await
}

/// Fetches the current user for the stored session cookie.
/// Returns `None` when the session is missing or expired.
pub async fn auth_check(api: &ApiClient) -> Result<Option<UserEnvelope>, ApiError> {
    api.get_optional_json("/auth-check").await
}

/// Asks the backend to end the session; it expires the session cookie.
pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.prime_token().await;
    api.send_empty(Method::POST, "/logout").await
}
