//! Client helpers for employee endpoints. Employees are addressed by their
//! employee number, not the numeric id.

use crate::{
    api::{ApiClient, ApiError},
    features::employees::types::{Employee, EmployeeForm},
};
use serde_json::Value;

pub async fn list(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.get_json("/employees").await
}

pub async fn show(api: &ApiClient, employee_number: &str) -> Result<Employee, ApiError> {
    let number = required_number(employee_number)?;
    api.get_json(&format!("/employees/{number}")).await
}

pub async fn create(api: &ApiClient, form: &EmployeeForm) -> Result<Value, ApiError> {
    required_number(&form.employee_number)?;
    api.post_json("/employees", form).await
}

pub async fn update(
    api: &ApiClient,
    employee_number: &str,
    form: &EmployeeForm,
) -> Result<Value, ApiError> {
    let number = required_number(employee_number)?;
    api.put_json(&format!("/employees/{number}"), form).await
}

pub async fn delete(api: &ApiClient, employee_number: &str) -> Result<(), ApiError> {
    let number = required_number(employee_number)?;
    api.delete(&format!("/employees/{number}")).await
}

fn required_number(employee_number: &str) -> Result<String, ApiError> {
    let trimmed = employee_number.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid("Employee number is required."));
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_number_is_trimmed_and_encoded() {
        assert_eq!(required_number(" EMP-001 "), Ok("EMP-001".to_string()));
        assert_eq!(required_number("A/B"), Ok("A%2FB".to_string()));
        assert!(required_number("  ").is_err());
    }
}
