//! Storage key layout.
//!
//! # Responsibility
//! - Build and parse the keys all per-identity data is stored under.
//!
//! # Invariants
//! - Layout is compatibility-critical; existing stored data uses exactly
//!   `logs:{identityId}:{YYYY-MM-DD}` and `reminders:{identityId}`.

use crate::time::{self, DateParseError};
use chrono::NaiveDate;

const LOG_NAMESPACE: &str = "logs";
const REMINDER_NAMESPACE: &str = "reminders";

/// Key of the day bucket for `(identity, date)`.
pub fn log_bucket_key(identity_id: &str, date: NaiveDate) -> String {
    format!(
        "{LOG_NAMESPACE}:{identity_id}:{}",
        time::format_date(date)
    )
}

/// Prefix shared by every day bucket of one identity.
pub fn log_bucket_prefix(identity_id: &str) -> String {
    format!("{LOG_NAMESPACE}:{identity_id}:")
}

/// Key of the reminder list for one identity.
pub fn reminders_key(identity_id: &str) -> String {
    format!("{REMINDER_NAMESPACE}:{identity_id}")
}

/// Extracts the bucket date from a key produced by [`log_bucket_key`].
pub fn bucket_date(key: &str, prefix: &str) -> Result<NaiveDate, DateParseError> {
    match key.strip_prefix(prefix) {
        Some(raw) => time::parse_date(raw),
        None => Err(DateParseError {
            value: key.to_string(),
        }),
    }
}
