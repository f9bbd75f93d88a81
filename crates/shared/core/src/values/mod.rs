use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Span of time, used for window lengths
pub type Span = chrono::Duration;
