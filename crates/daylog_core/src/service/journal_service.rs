//! Day-journal use-case facade.
//!
//! # Responsibility
//! - Expose the full per-identity surface: day browsing, entry and reminder
//!   mutation, period availability, analytics.
//! - Enforce the read-only-history policy: entry writes only on today.
//!
//! # Invariants
//! - Entry writes are rejected unless the cursor sits on the device-local
//!   today at the moment of the call.
//! - Reminders are date-independent and never gated.
//! - Log events carry metadata only, never note or reminder text.

use crate::analytics::{
    search_entries, subject_frequency, top_teachers, AnalyticsError, SearchHit, SubjectFrequency,
    TeacherRank,
};
use crate::cursor::DateCursor;
use crate::model::catalog::SubjectCatalog;
use crate::model::entry::{LogDraft, LogEntry, ReminderEntry};
use crate::model::identity::Identity;
use crate::repo::day_log_repo::{DayLogRepository, RepoError};
use crate::repo::reminder_repo::{ReminderError, ReminderRepository};
use crate::schedule::PeriodScheduler;
use crate::store::KeyedStore;
use crate::time::Clock;
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from journal use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    /// The viewed date is not today; historical days are read-only.
    ReadOnlyDate(NaiveDate),
    /// Day-log repository failure.
    Log(RepoError),
    /// Reminder repository failure.
    Reminder(ReminderError),
    /// Analytics scan failure.
    Analytics(AnalyticsError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadOnlyDate(date) => {
                write!(f, "day {date} is read-only; only today accepts changes")
            }
            Self::Log(err) => write!(f, "{err}"),
            Self::Reminder(err) => write!(f, "{err}"),
            Self::Analytics(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReadOnlyDate(_) => None,
            Self::Log(err) => Some(err),
            Self::Reminder(err) => Some(err),
            Self::Analytics(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Log(value)
    }
}

impl From<ReminderError> for ServiceError {
    fn from(value: ReminderError) -> Self {
        Self::Reminder(value)
    }
}

impl From<AnalyticsError> for ServiceError {
    fn from(value: AnalyticsError) -> Self {
        Self::Analytics(value)
    }
}

/// Use-case facade bound to one identity.
///
/// Owns the store, the catalog, the clock and the viewed-date cursor; the
/// presentation layer talks to this and to nothing below it.
pub struct JournalService<S: KeyedStore, C: Clock> {
    store: S,
    catalog: SubjectCatalog,
    clock: C,
    identity: Identity,
    cursor: DateCursor,
}

impl<S: KeyedStore, C: Clock> JournalService<S, C> {
    /// Creates a service with the cursor on the device-local today.
    pub fn new(store: S, catalog: SubjectCatalog, clock: C, identity: Identity) -> Self {
        let cursor = DateCursor::new(clock.today());
        Self {
            store,
            catalog,
            clock,
            identity,
            cursor,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Date currently viewed.
    pub fn current_date(&self) -> NaiveDate {
        self.cursor.current()
    }

    /// Whether the viewed date accepts entry writes right now.
    pub fn is_editable(&self) -> bool {
        self.cursor.is_editable(self.clock.today())
    }

    /// Moves the viewed date by whole days.
    pub fn shift_date(&mut self, delta_days: i64) {
        self.cursor.shift(delta_days);
    }

    /// Jumps the viewed date to an arbitrary day, e.g. from a search hit.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.cursor.set(date);
    }

    /// Returns the viewed date to the device-local today.
    pub fn jump_to_today(&mut self) {
        self.cursor.set(self.clock.today());
    }

    /// Entries of the viewed date, ordered by period.
    pub fn entries(&mut self) -> ServiceResult<Vec<LogEntry>> {
        let date = self.cursor.current();
        let repo = DayLogRepository::new(&mut self.store, &self.catalog, &self.clock);
        Ok(repo.load(&self.identity, date)?)
    }

    /// Records one entry on today's bucket.
    pub fn add_entry(&mut self, draft: &LogDraft) -> ServiceResult<LogEntry> {
        let date = self.editable_date()?;
        let mut repo = DayLogRepository::new(&mut self.store, &self.catalog, &self.clock);
        let entry = repo.add(&self.identity, date, draft)?;
        info!(
            "event=entry_add module=service status=ok date={date} period={}",
            entry.period
        );
        Ok(entry)
    }

    /// Removes one entry from today's bucket; absent ids are a no-op.
    pub fn remove_entry(&mut self, entry_id: i64) -> ServiceResult<()> {
        let date = self.editable_date()?;
        let mut repo = DayLogRepository::new(&mut self.store, &self.catalog, &self.clock);
        repo.remove(&self.identity, date, entry_id)?;
        info!("event=entry_remove module=service status=ok date={date}");
        Ok(())
    }

    /// Periods still open on the viewed date, ascending.
    pub fn available_periods(&mut self) -> ServiceResult<Vec<u8>> {
        let entries = self.entries()?;
        Ok(PeriodScheduler::new(&self.catalog).available_periods(&entries))
    }

    /// Whether every slot of the viewed date is logged.
    pub fn day_complete(&mut self) -> ServiceResult<bool> {
        let entries = self.entries()?;
        Ok(PeriodScheduler::new(&self.catalog).is_day_complete(&entries))
    }

    /// Teacher to preselect when the subject selection changes.
    pub fn default_teacher(&self, subject: &str, previous: Option<&str>) -> Option<&str> {
        PeriodScheduler::new(&self.catalog).default_teacher(subject, previous)
    }

    /// The identity's reminders, insertion order.
    pub fn reminders(&mut self) -> ServiceResult<Vec<ReminderEntry>> {
        let repo = ReminderRepository::new(&mut self.store, &self.clock);
        Ok(repo.load(&self.identity)?)
    }

    /// Appends one reminder. Reminders are date-independent, so the viewed
    /// date never gates this.
    pub fn add_reminder(&mut self, text: &str) -> ServiceResult<ReminderEntry> {
        let mut repo = ReminderRepository::new(&mut self.store, &self.clock);
        let entry = repo.add(&self.identity, text)?;
        info!(
            "event=reminder_add module=service status=ok text_len={}",
            entry.text.len()
        );
        Ok(entry)
    }

    /// Removes one reminder; absent ids are a no-op.
    pub fn remove_reminder(&mut self, entry_id: i64) -> ServiceResult<()> {
        let mut repo = ReminderRepository::new(&mut self.store, &self.clock);
        repo.remove(&self.identity, entry_id)?;
        info!("event=reminder_remove module=service status=ok");
        Ok(())
    }

    /// Subject occurrence shares across every recorded day.
    pub fn subject_frequency(&self) -> ServiceResult<Vec<SubjectFrequency>> {
        Ok(subject_frequency(&self.store, &self.catalog, &self.identity)?)
    }

    /// Teachers ranked by recorded classes, truncated to `limit`.
    pub fn top_teachers(&self, limit: usize) -> ServiceResult<Vec<TeacherRank>> {
        Ok(top_teachers(&self.store, &self.identity, limit)?)
    }

    /// Free-text search across all recorded days.
    pub fn search(&self, query: &str) -> ServiceResult<Vec<SearchHit>> {
        Ok(search_entries(&self.store, &self.identity, query)?)
    }

    fn editable_date(&self) -> ServiceResult<NaiveDate> {
        let date = self.cursor.current();
        if !self.cursor.is_editable(self.clock.today()) {
            return Err(ServiceError::ReadOnlyDate(date));
        }
        Ok(date)
    }
}
