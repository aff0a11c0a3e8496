pub mod client;
pub mod types;

pub use types::{TimeEntry, TimeEntryForm};

/// Entries clocked in on `date` (`YYYY-MM-DD`), optionally narrowed by an
/// employee-number search (case-insensitive substring).
///
/// The day is taken from the timestamp as sent by the backend; no timezone
/// conversion is applied.
#[must_use]
pub fn filter<'a>(entries: &'a [TimeEntry], date: Option<&str>, search: Option<&str>) -> Vec<&'a TimeEntry> {
    let needle = search.map(str::trim).unwrap_or_default().to_lowercase();
    entries
        .iter()
        .filter(|entry| date.map_or(true, |date| entry.clock_in_date() == Some(date)))
        .filter(|entry| entry.employee_number.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, number: &str, clock_in: &str, clock_out: Option<&str>) -> TimeEntry {
        TimeEntry {
            id,
            employee_number: number.to_string(),
            clock_in: clock_in.to_string(),
            clock_out: clock_out.map(ToString::to_string),
            total_hours: 8.0,
        }
    }

    #[test]
    fn filters_by_clock_in_day() {
        let entries = vec![
            entry(1, "EMP001", "2024-03-01T08:00:00", Some("2024-03-01T17:00:00")),
            entry(2, "EMP002", "2024-03-01T09:00:00", None),
            entry(3, "EMP001", "2024-03-02T08:00:00", None),
        ];

        let ids: Vec<u64> = filter(&entries, Some("2024-03-01"), None)
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let ids: Vec<u64> = filter(&entries, None, Some("emp001"))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn short_timestamps_never_match_a_day() {
        let entries = vec![entry(1, "EMP001", "2024", None)];
        assert!(filter(&entries, Some("2024-03-01"), None).is_empty());
        assert_eq!(entries[0].clock_in_date(), None);
        assert!(entries[0].is_open());
    }
}
