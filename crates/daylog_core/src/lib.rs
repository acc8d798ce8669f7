//! Core domain logic for DayLog, a per-identity day-log tracker.
//! This crate is the single source of truth for business invariants.

pub mod analytics;
pub mod cursor;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod store;
pub mod time;

pub use analytics::{
    search_entries, subject_frequency, top_teachers, AnalyticsError, AnalyticsResult, SearchHit,
    SubjectFrequency, TeacherRank,
};
pub use cursor::DateCursor;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{CatalogError, SubjectCatalog};
pub use model::entry::{LogDraft, LogEntry, ReminderEntry};
pub use model::identity::Identity;
pub use repo::day_log_repo::{DayLogRepository, RepoError, RepoResult};
pub use repo::reminder_repo::{ReminderError, ReminderRepository, ReminderResult};
pub use schedule::{PeriodScheduler, PERIODS_PER_DAY};
pub use service::journal_service::{JournalService, ServiceError, ServiceResult};
pub use store::{KeyedStore, MemoryKeyedStore, SqliteKeyedStore, StoreError, StoreResult};
pub use time::{format_date, parse_date, Clock, DateParseError, FixedClock, SystemClock};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
