use chrono::{DateTime, Utc};

/// What the form last wrote onto one open item.
///
/// Owned by whoever holds the item open; a fresh value means nothing has
/// been applied yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_category: Option<String>,
    pub last_start: Option<DateTime<Utc>>,
    pub last_duration_minutes: Option<i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.last_category.is_none()
    }

    /// True when the item still carries exactly the timing recorded here.
    pub fn matches(&self, category: &str, start: DateTime<Utc>, minutes: i64) -> bool {
        self.last_category.as_deref() == Some(category)
            && self.last_start == Some(start)
            && self.last_duration_minutes == Some(minutes)
    }

    pub fn record(&mut self, category: &str, start: DateTime<Utc>, minutes: i64) {
        self.last_category = Some(category.to_string());
        self.last_start = Some(start);
        self.last_duration_minutes = Some(minutes);
    }

    pub fn record_all_day(&mut self, category: &str) {
        self.last_category = Some(category.to_string());
        self.last_start = None;
        self.last_duration_minutes = None;
    }
}
