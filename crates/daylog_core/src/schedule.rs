//! Period availability and teacher defaults.
//!
//! # Responsibility
//! - Report which of the fixed daily slots remain open for a bucket.
//! - Keep the teacher selection consistent when the subject changes.
//!
//! # Invariants
//! - Pure functions of current bucket state, recomputed on demand.
//! - The scheduler only reports availability; gating entry creation is the
//!   decision of whichever caller is about to write.

use crate::model::catalog::SubjectCatalog;
use crate::model::entry::LogEntry;

/// Number of fixed class period slots per day.
pub const PERIODS_PER_DAY: u8 = 7;

/// Availability and default-selection helpers over one day bucket.
pub struct PeriodScheduler<'a> {
    catalog: &'a SubjectCatalog,
}

impl<'a> PeriodScheduler<'a> {
    pub fn new(catalog: &'a SubjectCatalog) -> Self {
        Self { catalog }
    }

    /// Periods not yet logged in `entries`, ascending.
    ///
    /// An empty result means the day is completed.
    pub fn available_periods(&self, entries: &[LogEntry]) -> Vec<u8> {
        (1..=PERIODS_PER_DAY)
            .filter(|period| !entries.iter().any(|entry| entry.period == *period))
            .collect()
    }

    /// Whether every slot of the day is logged.
    pub fn is_day_complete(&self, entries: &[LogEntry]) -> bool {
        self.available_periods(entries).is_empty()
    }

    /// Teacher selection to apply when `subject` is chosen.
    ///
    /// Keeps `previous` when it is listed for the subject, otherwise falls
    /// back to the subject's first teacher. `None` for unknown subjects.
    pub fn default_teacher(&self, subject: &str, previous: Option<&str>) -> Option<&'a str> {
        let teachers = self.catalog.teachers_for(subject)?;
        if let Some(previous) = previous {
            if let Some(kept) = teachers.iter().find(|name| name.as_str() == previous) {
                return Some(kept.as_str());
            }
        }
        teachers.first().map(String::as_str)
    }
}
