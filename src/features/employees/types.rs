use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub assigned_area: Option<String>,
    #[serde(default)]
    pub date_hired: String,
    #[serde(default)]
    pub years_of_service: f64,
    #[serde(default)]
    pub employment_status: String,
    #[serde(default)]
    pub date_of_regularization: Option<String>,
    #[serde(default, rename = "status201")]
    pub status_201: Option<String>,
    #[serde(default)]
    pub resignation_termination_date: Option<String>,
    #[serde(default)]
    pub rate_type: Option<i64>,
    #[serde(default)]
    pub civil_status: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub birthplace: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub id_status: Option<i64>,
    #[serde(default)]
    pub sss_no: Option<String>,
    #[serde(default)]
    pub tin_no: Option<String>,
    #[serde(default)]
    pub philhealth_no: Option<String>,
    #[serde(default)]
    pub pagibig_no: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_mobile: String,
}

/// Payload for creating or updating an employee.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub assigned_area: String,
    #[serde(default)]
    pub date_hired: String,
    #[serde(default = "default_employment_status")]
    pub employment_status: String,
    #[serde(default = "default_civil_status")]
    pub civil_status: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub birthplace: String,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_mobile: String,
    #[serde(default)]
    pub sss_no: String,
    #[serde(default)]
    pub tin_no: String,
    #[serde(default)]
    pub philhealth_no: String,
    #[serde(default)]
    pub pagibig_no: String,
}

fn default_employment_status() -> String {
    "Regular".to_string()
}

fn default_civil_status() -> String {
    "Single".to_string()
}

fn default_gender() -> String {
    "Male".to_string()
}

/// Local list filter. `None` fields match everything.
#[derive(Clone, Debug, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub employment_status: Option<String>,
}
