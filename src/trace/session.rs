use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

/// Record of one launch of the traced program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSession {
    pub program: String,
    pub arguments: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    /// None when the program was terminated by a signal
    pub exit_status: Option<i32>,
}

impl TraceSession {
    pub fn success(&self) -> bool {
        self.exit_status == Some(0)
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// RFC 3339 start time, second precision, `Z` suffix
    pub fn utc_timestamp(&self) -> String {
        self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
