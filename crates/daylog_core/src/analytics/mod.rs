//! Cross-date analytics over an identity's recorded days.
//!
//! # Responsibility
//! - Scan every bucket belonging to one identity via prefix enumeration.
//! - Produce subject frequencies, teacher rankings, and free-text hits.
//!
//! # Invariants
//! - All operations are read-only full scans; no incremental index. The
//!   data set is one identity's local history, never a shared store.
//! - Scan order is the store's ascending key order, which is chronological
//!   for dated bucket keys.

mod search;
mod stats;

pub use search::{search_entries, SearchHit};
pub use stats::{subject_frequency, top_teachers, SubjectFrequency, TeacherRank};

use crate::model::entry::LogEntry;
use crate::model::identity::Identity;
use crate::repo::day_log_repo::decode_bucket;
use crate::store::keys::{bucket_date, log_bucket_prefix};
use crate::store::{KeyedStore, StoreError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors from analytics scans.
#[derive(Debug)]
pub enum AnalyticsError {
    /// Persisted bucket cannot be decoded.
    InvalidData(String),
    /// Substrate failure.
    Store(StoreError),
}

impl Display for AnalyticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData(message) => write!(f, "invalid scanned data: {message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidData(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AnalyticsError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub(crate) struct ScannedBucket {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
}

/// Loads every bucket of `identity` in ascending date order.
pub(crate) fn scan_buckets<S: KeyedStore>(
    store: &S,
    identity: &Identity,
) -> AnalyticsResult<Vec<ScannedBucket>> {
    let prefix = log_bucket_prefix(&identity.id);
    let mut buckets = Vec::new();

    for key in store.list_keys(&prefix)? {
        let Ok(date) = bucket_date(&key, &prefix) else {
            return Err(AnalyticsError::InvalidData(format!(
                "bucket key `{key}` has no parseable date"
            )));
        };
        let Some(raw) = store.get(&key)? else {
            continue;
        };
        let entries = decode_bucket(&key, &raw).map_err(AnalyticsError::InvalidData)?;
        buckets.push(ScannedBucket { date, entries });
    }

    Ok(buckets)
}
