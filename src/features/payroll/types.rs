use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriod {
    pub id: u64,
    pub period_start: String,
    pub period_end: String,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriodForm {
    pub period_start: String,
    pub period_end: String,
    pub payment_date: String,
    #[serde(default = "default_period_status")]
    pub status: String,
}

fn default_period_status() -> String {
    "pending".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    pub id: u64,
    pub employee_number: String,
    pub payroll_period_id: u64,
    #[serde(default)]
    pub gross_pay: f64,
    #[serde(default)]
    pub sss_deduction: f64,
    #[serde(default)]
    pub philhealth_deduction: f64,
    #[serde(default)]
    pub pagibig_deduction: f64,
    #[serde(default)]
    pub tax_deduction: f64,
    #[serde(default)]
    pub other_deductions: f64,
    #[serde(default)]
    pub net_pay: f64,
    #[serde(default)]
    pub status: String,
}

impl PayrollEntry {
    /// Sum of every deduction line.
    #[must_use]
    pub fn total_deductions(&self) -> f64 {
        self.sss_deduction
            + self.philhealth_deduction
            + self.pagibig_deduction
            + self.tax_deduction
            + self.other_deductions
    }
}
