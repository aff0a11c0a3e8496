//! Client helpers for payroll periods and entries. Pay computation happens
//! on the backend; the console only triggers it.

use crate::{
    api::{ApiClient, ApiError},
    features::payroll::types::{PayrollEntry, PayrollPeriod, PayrollPeriodForm},
};
use reqwest::Method;
use serde_json::Value;

pub async fn list_periods(api: &ApiClient) -> Result<Vec<PayrollPeriod>, ApiError> {
    api.get_json("/payroll-periods").await
}

pub async fn create_period(api: &ApiClient, form: &PayrollPeriodForm) -> Result<Value, ApiError> {
    api.post_json("/payroll-periods", form).await
}

pub async fn list_entries(api: &ApiClient) -> Result<Vec<PayrollEntry>, ApiError> {
    api.get_json("/payroll-entries").await
}

pub async fn employee_entries(
    api: &ApiClient,
    employee_number: &str,
) -> Result<Vec<PayrollEntry>, ApiError> {
    let number = encoded(employee_number)?;
    api.get_json(&format!("/payroll-entries/{number}")).await
}

/// Asks the backend to compute the payroll of one employee for one period.
pub async fn calculate(
    api: &ApiClient,
    employee_number: &str,
    period_id: u64,
) -> Result<(), ApiError> {
    let number = encoded(employee_number)?;
    api.send_empty(
        Method::POST,
        &format!("/calculate-payroll/{number}/{period_id}"),
    )
    .await
}

fn encoded(employee_number: &str) -> Result<String, ApiError> {
    let trimmed = employee_number.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid("Employee number is required."));
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}
