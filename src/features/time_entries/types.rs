use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: u64,
    pub employee_number: String,
    pub clock_in: String,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub total_hours: f64,
}

impl TimeEntry {
    /// Calendar day of the clock-in (`YYYY-MM-DD`), if the timestamp has one.
    #[must_use]
    pub fn clock_in_date(&self) -> Option<&str> {
        self.clock_in.get(..10)
    }

    /// Whether the employee has not clocked out yet.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.clock_out.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryForm {
    pub employee_number: String,
    pub clock_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
}
