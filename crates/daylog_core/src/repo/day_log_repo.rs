//! Day-log repository: per-(identity, date) period buckets.
//!
//! # Responsibility
//! - Provide load/save/add/remove over day buckets with period uniqueness.
//! - Keep the stored JSON layout stable (`logs:{identityId}:{YYYY-MM-DD}`).
//!
//! # Invariants
//! - A bucket never holds two entries with the same period.
//! - Buckets are persisted and returned ordered by period ascending.
//! - Write paths validate subject and teacher against the catalog first.
//! - Buckets are created lazily on first write and never deleted; removing
//!   the last entry leaves an empty, still-materialized bucket.

use crate::model::catalog::SubjectCatalog;
use crate::model::entry::{LogDraft, LogEntry};
use crate::model::identity::Identity;
use crate::schedule::PERIODS_PER_DAY;
use crate::store::keys::log_bucket_key;
use crate::store::{KeyedStore, StoreError};
use crate::time::{next_entry_id, Clock};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from day-log persistence and validation.
#[derive(Debug)]
pub enum RepoError {
    /// The bucket already holds an entry for this period.
    DuplicatePeriod(u8),
    /// Period is outside the fixed daily slots.
    PeriodOutOfRange(u8),
    /// Subject is not in the catalog, or the teacher is not listed for it.
    InvalidSubjectOrTeacher { subject: String, teacher: String },
    /// Persisted bucket cannot be decoded into valid entries.
    InvalidData(String),
    /// Substrate failure.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePeriod(period) => {
                write!(f, "period {period} is already logged for this day")
            }
            Self::PeriodOutOfRange(period) => {
                write!(f, "period {period} is outside 1..={PERIODS_PER_DAY}")
            }
            Self::InvalidSubjectOrTeacher { subject, teacher } => {
                write!(f, "teacher `{teacher}` is not listed for subject `{subject}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted day-log data: {message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Day-log repository over a keyed store.
///
/// Performs no temporal validation: the repository does not know the current
/// date, and the read-only-history policy lives with the caller.
pub struct DayLogRepository<'a, S: KeyedStore, C: Clock> {
    store: &'a mut S,
    catalog: &'a SubjectCatalog,
    clock: &'a C,
}

impl<'a, S: KeyedStore, C: Clock> DayLogRepository<'a, S, C> {
    pub fn new(store: &'a mut S, catalog: &'a SubjectCatalog, clock: &'a C) -> Self {
        Self {
            store,
            catalog,
            clock,
        }
    }

    /// Loads the bucket for `(identity, date)`, ordered by period ascending.
    ///
    /// A missing bucket is an empty day, never an error.
    pub fn load(&self, identity: &Identity, date: NaiveDate) -> RepoResult<Vec<LogEntry>> {
        let key = log_bucket_key(&identity.id, date);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };
        let mut entries = decode_bucket(&key, &raw).map_err(RepoError::InvalidData)?;
        entries.sort_by_key(|entry| entry.period);
        Ok(entries)
    }

    /// Overwrites the bucket for `(identity, date)` with `entries`.
    ///
    /// Entries are persisted sorted by period; duplicate periods are
    /// rejected before anything is written.
    pub fn save(
        &mut self,
        identity: &Identity,
        date: NaiveDate,
        mut entries: Vec<LogEntry>,
    ) -> RepoResult<()> {
        entries.sort_by_key(|entry| entry.period);
        if let Some(period) = first_duplicate_period(&entries) {
            return Err(RepoError::DuplicatePeriod(period));
        }

        let key = log_bucket_key(&identity.id, date);
        let payload = serde_json::to_string(&entries)
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        self.store.set(&key, &payload)?;
        Ok(())
    }

    /// Records one new entry in the `(identity, date)` bucket.
    ///
    /// Validates the period slot, the catalog membership of subject and
    /// teacher, and period uniqueness; assigns `id` and `recorded_at` from
    /// the clock. A failed add leaves the bucket unchanged.
    pub fn add(
        &mut self,
        identity: &Identity,
        date: NaiveDate,
        draft: &LogDraft,
    ) -> RepoResult<LogEntry> {
        if draft.period < 1 || draft.period > PERIODS_PER_DAY {
            return Err(RepoError::PeriodOutOfRange(draft.period));
        }
        if !self.catalog.is_listed(&draft.subject, &draft.teacher) {
            return Err(RepoError::InvalidSubjectOrTeacher {
                subject: draft.subject.clone(),
                teacher: draft.teacher.clone(),
            });
        }

        let mut entries = self.load(identity, date)?;
        if entries.iter().any(|entry| entry.period == draft.period) {
            return Err(RepoError::DuplicatePeriod(draft.period));
        }

        let entry = LogEntry {
            id: next_entry_id(self.clock),
            period: draft.period,
            subject: draft.subject.clone(),
            teacher: draft.teacher.clone(),
            note: draft.note.clone(),
            recorded_at: self.clock.time_of_day(),
        };
        entries.push(entry.clone());
        self.save(identity, date, entries)?;

        debug!(
            "event=entry_add module=repo status=ok period={} note_len={}",
            entry.period,
            entry.note.len()
        );
        Ok(entry)
    }

    /// Removes the entry with `entry_id` from the bucket when present.
    ///
    /// Absent ids are a no-op, not an error, keeping UI deletion idempotent.
    pub fn remove(
        &mut self,
        identity: &Identity,
        date: NaiveDate,
        entry_id: i64,
    ) -> RepoResult<()> {
        let mut entries = self.load(identity, date)?;
        entries.retain(|entry| entry.id != entry_id);
        self.save(identity, date, entries)
    }
}

/// Decodes one stored bucket payload, rejecting invalid persisted state.
pub(crate) fn decode_bucket(key: &str, raw: &str) -> Result<Vec<LogEntry>, String> {
    let entries: Vec<LogEntry> = serde_json::from_str(raw)
        .map_err(|err| format!("bucket `{key}` is not a log entry array: {err}"))?;
    for entry in &entries {
        if entry.period < 1 || entry.period > PERIODS_PER_DAY {
            return Err(format!(
                "bucket `{key}` holds out-of-range period {}",
                entry.period
            ));
        }
    }
    Ok(entries)
}

fn first_duplicate_period(sorted: &[LogEntry]) -> Option<u8> {
    sorted
        .windows(2)
        .find(|pair| pair[0].period == pair[1].period)
        .map(|pair| pair[0].period)
}
