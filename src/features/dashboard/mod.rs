//! Dashboard summary built from the employee, payroll and time-entry lists.

use crate::{
    api::{ApiClient, ApiError},
    features::{
        employees::{self, Employee},
        payroll::{self, PayrollEntry, PayrollPeriod},
        time_entries::{self, TimeEntry},
    },
};
use serde::Serialize;
use tracing::instrument;

/// Number of rows in each "recent" list.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_payrolls: usize,
    pub pending_payrolls: usize,
    pub total_time_entries: usize,
    pub recent_time_entries: Vec<TimeEntry>,
    pub recent_payrolls: Vec<PayrollEntry>,
    pub recent_employees: Vec<Employee>,
}

impl DashboardStats {
    /// Counts and recent rows. "Recent" time entries and payroll entries are
    /// the first rows in backend order; recent employees are the latest hires
    /// by ISO `dateHired`.
    #[must_use]
    pub fn build(
        employees: Vec<Employee>,
        periods: &[PayrollPeriod],
        time_entries: Vec<TimeEntry>,
        payroll_entries: Vec<PayrollEntry>,
    ) -> Self {
        let count_status = |status: &str| periods.iter().filter(|p| p.status == status).count();

        let total_employees = employees.len();
        let total_time_entries = time_entries.len();

        let mut recent_employees = employees;
        recent_employees.sort_by(|a, b| b.date_hired.cmp(&a.date_hired));
        recent_employees.truncate(RECENT_LIMIT);

        Self {
            total_employees,
            active_payrolls: count_status("active"),
            pending_payrolls: count_status("pending"),
            total_time_entries,
            recent_time_entries: time_entries.into_iter().take(RECENT_LIMIT).collect(),
            recent_payrolls: payroll_entries.into_iter().take(RECENT_LIMIT).collect(),
            recent_employees,
        }
    }
}

/// Fetches the four lists one after another and summarizes them.
///
/// # Errors
/// Returns the first failing request's error.
#[instrument(skip(api))]
pub async fn fetch(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    let employees = employees::client::list(api).await?;
    let periods = payroll::client::list_periods(api).await?;
    let time_entries = time_entries::client::list(api).await?;
    let payroll_entries = payroll::client::list_entries(api).await?;

    Ok(DashboardStats::build(
        employees,
        &periods,
        time_entries,
        payroll_entries,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employees() -> Result<Vec<Employee>, serde_json::Error> {
        let hired = [
            "2019-01-10", "2023-05-01", "2021-07-15", "2024-02-01", "2018-11-30", "2022-03-03",
        ];
        hired
            .iter()
            .enumerate()
            .map(|(index, date)| {
                serde_json::from_value(json!({
                    "id": index,
                    "employeeNumber": format!("EMP00{index}"),
                    "firstName": "A",
                    "lastName": "B",
                    "dateHired": date
                }))
            })
            .collect()
    }

    fn period(id: u64, status: &str) -> PayrollPeriod {
        PayrollPeriod {
            id,
            period_start: "2024-01-01".to_string(),
            period_end: "2024-01-15".to_string(),
            payment_date: "2024-01-20".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn counts_statuses_and_picks_latest_hires() -> Result<(), serde_json::Error> {
        let periods = vec![
            period(1, "active"),
            period(2, "pending"),
            period(3, "pending"),
            period(4, "closed"),
        ];
        let entries: Vec<TimeEntry> = (0..7)
            .map(|id| TimeEntry {
                id,
                employee_number: "EMP001".to_string(),
                clock_in: "2024-03-01T08:00:00".to_string(),
                clock_out: None,
                total_hours: 0.0,
            })
            .collect();

        let stats = DashboardStats::build(employees()?, &periods, entries, Vec::new());

        assert_eq!(stats.total_employees, 6);
        assert_eq!(stats.active_payrolls, 1);
        assert_eq!(stats.pending_payrolls, 2);
        assert_eq!(stats.total_time_entries, 7);
        assert_eq!(stats.recent_time_entries.len(), RECENT_LIMIT);
        assert_eq!(stats.recent_time_entries[0].id, 0);
        assert!(stats.recent_payrolls.is_empty());

        let hired: Vec<&str> = stats
            .recent_employees
            .iter()
            .map(|employee| employee.date_hired.as_str())
            .collect();
        assert_eq!(
            hired,
            vec!["2024-02-01", "2023-05-01", "2022-03-03", "2021-07-15", "2019-01-10"]
        );
        Ok(())
    }
}
