//! Subject frequency and teacher ranking aggregates.

use super::{scan_buckets, AnalyticsResult};
use crate::model::catalog::SubjectCatalog;
use crate::model::identity::Identity;
use crate::schedule::PERIODS_PER_DAY;
use crate::store::KeyedStore;

/// Per-subject occurrence share across every recorded day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFrequency {
    pub subject: String,
    /// Entries recorded with this subject, across all dates.
    pub occurrences: u32,
    /// Share of the identity's total possible slots, rounded to 0..=100.
    pub percent: u32,
}

/// Teacher ranked by total classes recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRank {
    pub teacher: String,
    pub class_count: u32,
}

/// Counts subject occurrences across all of `identity`'s buckets.
///
/// Results follow catalog declaration order. The denominator is
/// `distinct recorded dates * PERIODS_PER_DAY`; with no recorded days every
/// percentage is 0, not a division error.
pub fn subject_frequency<S: KeyedStore>(
    store: &S,
    catalog: &SubjectCatalog,
    identity: &Identity,
) -> AnalyticsResult<Vec<SubjectFrequency>> {
    let buckets = scan_buckets(store, identity)?;
    let distinct_dates = buckets.len() as u32;
    let total_slots = distinct_dates * u32::from(PERIODS_PER_DAY);

    Ok(catalog
        .subject_codes()
        .map(|code| {
            let occurrences = buckets
                .iter()
                .flat_map(|bucket| bucket.entries.iter())
                .filter(|entry| entry.subject == code)
                .count() as u32;
            let percent = if total_slots == 0 {
                0
            } else {
                ((f64::from(occurrences) / f64::from(total_slots)) * 100.0).round() as u32
            };
            SubjectFrequency {
                subject: code.to_string(),
                occurrences,
                percent,
            }
        })
        .collect())
}

/// Ranks teachers by class count, descending.
///
/// Ties keep first-encountered scan order; the result is truncated to
/// `limit`.
pub fn top_teachers<S: KeyedStore>(
    store: &S,
    identity: &Identity,
    limit: usize,
) -> AnalyticsResult<Vec<TeacherRank>> {
    let buckets = scan_buckets(store, identity)?;

    let mut ranks: Vec<TeacherRank> = Vec::new();
    for entry in buckets.iter().flat_map(|bucket| bucket.entries.iter()) {
        match ranks.iter_mut().find(|rank| rank.teacher == entry.teacher) {
            Some(rank) => rank.class_count += 1,
            None => ranks.push(TeacherRank {
                teacher: entry.teacher.clone(),
                class_count: 1,
            }),
        }
    }

    // Stable sort keeps first-encountered order among equal counts.
    ranks.sort_by(|a, b| b.class_count.cmp(&a.class_count));
    ranks.truncate(limit);
    Ok(ranks)
}
