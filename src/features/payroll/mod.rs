pub mod client;
pub mod types;

pub use types::{PayrollEntry, PayrollPeriod, PayrollPeriodForm};

/// Entries of one payroll period (all periods when `None`), optionally
/// narrowed by an employee-number search (case-insensitive substring).
#[must_use]
pub fn filter_entries<'a>(
    entries: &'a [PayrollEntry],
    period_id: Option<u64>,
    search: Option<&str>,
) -> Vec<&'a PayrollEntry> {
    let needle = search.map(str::trim).unwrap_or_default().to_lowercase();
    entries
        .iter()
        .filter(|entry| period_id.map_or(true, |id| entry.payroll_period_id == id))
        .filter(|entry| entry.employee_number.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, number: &str, period: u64) -> PayrollEntry {
        PayrollEntry {
            id,
            employee_number: number.to_string(),
            payroll_period_id: period,
            gross_pay: 20_000.0,
            sss_deduction: 900.0,
            philhealth_deduction: 400.0,
            pagibig_deduction: 100.0,
            tax_deduction: 1_000.0,
            other_deductions: 0.0,
            net_pay: 17_600.0,
            status: "pending".to_string(),
        }
    }

    #[test]
    fn filters_by_period_and_search() {
        let entries = vec![entry(1, "EMP001", 1), entry(2, "EMP002", 1), entry(3, "EMP001", 2)];

        let ids: Vec<u64> = filter_entries(&entries, Some(1), None)
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let ids: Vec<u64> = filter_entries(&entries, None, Some("EMP001"))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let ids: Vec<u64> = filter_entries(&entries, Some(1), Some("emp002"))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn deductions_add_up() {
        let entry = entry(1, "EMP001", 1);
        assert!((entry.total_deductions() - 2_400.0).abs() < f64::EPSILON);
        assert!((entry.gross_pay - entry.total_deductions() - entry.net_pay).abs() < f64::EPSILON);
    }
}
