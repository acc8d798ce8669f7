//! Free-text search across every recorded day.

use super::{scan_buckets, AnalyticsError, AnalyticsResult};
use crate::model::entry::LogEntry;
use crate::model::identity::Identity;
use crate::store::KeyedStore;
use chrono::NaiveDate;
use regex::RegexBuilder;

/// One matching entry annotated with its source date, so the caller can
/// navigate the date cursor to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub entry: LogEntry,
}

/// Scans all buckets for entries whose note or subject contains `query`,
/// case-insensitively.
///
/// Blank queries return no hits. Results come most recently dated bucket
/// first, in period order within one day.
pub fn search_entries<S: KeyedStore>(
    store: &S,
    identity: &Identity,
    query: &str,
) -> AnalyticsResult<Vec<SearchHit>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let matcher = RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
        .map_err(|err| AnalyticsError::InvalidData(format!("unusable search query: {err}")))?;

    let mut hits = Vec::new();
    for bucket in scan_buckets(store, identity)?.into_iter().rev() {
        let date = bucket.date;
        for entry in bucket.entries {
            if matcher.is_match(&entry.note) || matcher.is_match(&entry.subject) {
                hits.push(SearchHit { date, entry });
            }
        }
    }
    Ok(hits)
}
