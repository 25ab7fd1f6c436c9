use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One entry of `.git/logs/HEAD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub commit_hash: String,
    pub parent_commit_hash: String,
    pub author_name: String,
    pub author_email: String,
    pub timestamp: i64,
    pub timezone_offset: String,
    pub message: String,
}

impl CommitRecord {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub index: usize,
    pub line: String,
    pub record: CommitRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub range: DateRange,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Entries joined back to back. Every line already carries its own index.
    pub fn text(&self) -> String {
        self.entries.iter().map(|e| e.line.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Inclusive window in Unix seconds. `None` leaves that side open;
/// `Some(0)` is a bound at the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub since: Option<i64>,
    pub until: Option<i64>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    pub fn unbounded() -> Self {
        Self::new()
    }

    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: i64) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        if let Some(since) = self.since {
            if timestamp < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if timestamp > until {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |ts: Option<i64>| {
            ts.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
                .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        };
        match (show(self.since), show(self.until)) {
            (Some(s), Some(u)) => write!(f, "{s} to {u}"),
            (Some(s), None) => write!(f, "since {s}"),
            (None, Some(u)) => write!(f, "until {u}"),
            (None, None) => write!(f, "all time"),
        }
    }
}
