use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// One timestamped log line. Immutable once read from a source; merged
/// streams of these are ordered by `date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub date: DateTime<Utc>,
    pub msg: String,
}

impl LogEntry {
    pub fn new(date: DateTime<Utc>, msg: impl Into<String>) -> Self {
        LogEntry {
            date,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.to_rfc3339(), self.msg)
    }
}
