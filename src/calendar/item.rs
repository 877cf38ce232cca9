use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the appointment the form writes onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub subject: String,
    pub location: String,
    pub categories: Vec<String>,
    pub attendees: Vec<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

impl CalendarItem {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            subject: String::new(),
            location: String::new(),
            categories: vec![],
            attendees: vec![],
            start,
            end,
            all_day: false,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        span_minutes(self.start, self.end)
    }
}

/// Length of a span in whole minutes, halves rounded up.
pub fn span_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds() as f64;
    (millis / 60_000.0 + 0.5).floor() as i64
}
