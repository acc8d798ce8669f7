//! Log and reminder entry records.
//!
//! # Responsibility
//! - Define the persisted shapes for day-bucket entries and reminders.
//!
//! # Invariants
//! - Wire field names are stable: existing stored JSON must keep decoding.
//! - `period` is one of the fixed daily slots; buckets never hold two
//!   entries with the same period (enforced by the repository).

use serde::{Deserialize, Serialize};

/// One recorded class period inside a day bucket.
///
/// Serialized with camelCase field names to match the JSON layout already
/// written by earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Creation timestamp in epoch milliseconds; unique within the process.
    pub id: i64,
    /// Class period slot, 1 through [`crate::schedule::PERIODS_PER_DAY`].
    pub period: u8,
    /// Subject code; a key of the configured subject catalog.
    pub subject: String,
    /// Teacher name; a member of the subject's teacher list.
    pub teacher: String,
    /// Free-form note text. May be empty.
    #[serde(default)]
    pub note: String,
    /// Device-local time of day the entry was recorded.
    pub recorded_at: String,
}

/// Request model for creating one log entry.
///
/// The repository assigns `id` and `recorded_at` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDraft {
    pub period: u8,
    pub subject: String,
    pub teacher: String,
    pub note: String,
}

impl LogDraft {
    /// Convenience constructor for callers assembling form input.
    pub fn new(
        period: u8,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            period,
            subject: subject.into(),
            teacher: teacher.into(),
            note: note.into(),
        }
    }
}

/// One date-independent reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEntry {
    /// Creation timestamp in epoch milliseconds; unique within the process.
    pub id: i64,
    /// Reminder text, trimmed at creation.
    pub text: String,
}
