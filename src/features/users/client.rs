//! Client helpers for console user accounts. Authorization is enforced by
//! the backend.

use crate::{
    api::{ApiClient, ApiError},
    features::users::types::{UserAccount, UserAccountForm, UserStatusUpdate},
};
use serde_json::Value;

pub async fn list(api: &ApiClient) -> Result<Vec<UserAccount>, ApiError> {
    api.get_json("/users").await
}

/// Creates an account after basic input validation.
/// Must never log the form, it carries the password.
pub async fn create(api: &ApiClient, form: &UserAccountForm) -> Result<Value, ApiError> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() {
        return Err(ApiError::invalid("Name and email are required."));
    }
    api.post_json("/users", form).await
}

pub async fn set_active(api: &ApiClient, id: u64, is_active: bool) -> Result<Value, ApiError> {
    api.patch_json(&format!("/users/{id}"), &UserStatusUpdate { is_active })
        .await
}
