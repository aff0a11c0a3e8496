pub mod client;
pub mod types;

pub use types::{Employee, EmployeeFilter, EmployeeForm};

/// Applies the local search, department and status filters.
///
/// Search is case-insensitive over employee number, first and last name,
/// position and department. Department and status must match exactly.
#[must_use]
pub fn filter<'a>(employees: &'a [Employee], filter: &EmployeeFilter) -> Vec<&'a Employee> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_lowercase);

    employees
        .iter()
        .filter(|employee| {
            search.as_deref().map_or(true, |needle| {
                [
                    &employee.employee_number,
                    &employee.first_name,
                    &employee.last_name,
                    &employee.position,
                    &employee.department,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
            })
        })
        .filter(|employee| {
            filter
                .department
                .as_deref()
                .map_or(true, |department| employee.department == department)
        })
        .filter(|employee| {
            filter
                .employment_status
                .as_deref()
                .map_or(true, |status| employee.employment_status == status)
        })
        .collect()
}

/// Sorted, de-duplicated, non-empty departments.
#[must_use]
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = employees
        .iter()
        .map(|employee| employee.department.clone())
        .filter(|department| !department.is_empty())
        .collect();
    departments.sort();
    departments.dedup();
    departments
}
