use crate::{
    api::{ApiClient, ApiError},
    features::time_entries::types::{TimeEntry, TimeEntryForm},
};
use serde_json::Value;

pub async fn list(api: &ApiClient) -> Result<Vec<TimeEntry>, ApiError> {
    api.get_json("/time-entries").await
}

pub async fn for_employee(api: &ApiClient, employee_number: &str) -> Result<Vec<TimeEntry>, ApiError> {
    let trimmed = employee_number.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid("Employee number is required."));
    }
    api.get_json(&format!("/time-entries/{}", urlencoding::encode(trimmed)))
        .await
}

pub async fn create(api: &ApiClient, form: &TimeEntryForm) -> Result<Value, ApiError> {
    api.post_json("/time-entries", form).await
}

pub async fn delete(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("/time-entries/{id}")).await
}
