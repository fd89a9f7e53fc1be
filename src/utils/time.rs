use chrono::{DateTime, Utc};

/// Reference instant for a ranking request.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
