//! Wall-clock collaborator and calendar date codec.
//!
//! # Responsibility
//! - Define the clock interface repositories and services consume.
//! - Issue process-unique entry ids derived from the clock.
//! - Convert between `NaiveDate` and the stored `YYYY-MM-DD` shape.
//!
//! # Invariants
//! - Issued ids are strictly increasing within one process.
//! - Stored date strings always use the `%Y-%m-%d` shape.

use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};

/// Storage shape for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Wall-clock collaborator supplied by the platform.
pub trait Clock {
    /// Current timestamp in Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
    /// Current device-local time of day, formatted for display.
    fn time_of_day(&self) -> String;
    /// Current device-local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Device-local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn time_of_day(&self) -> String {
        Local::now().format(TIME_OF_DAY_FORMAT).to_string()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic clock pinned to one instant, for tests and previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
    epoch_ms: i64,
    time_of_day: String,
}

impl FixedClock {
    /// Creates a clock pinned to the given date, timestamp and time of day.
    pub fn new(today: NaiveDate, epoch_ms: i64, time_of_day: impl Into<String>) -> Self {
        Self {
            today,
            epoch_ms,
            time_of_day: time_of_day.into(),
        }
    }

    /// Moves the pinned date, keeping timestamp and time of day.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    fn time_of_day(&self) -> String {
        self.time_of_day.clone()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Issues the next entry id for this process.
///
/// Ids are creation timestamps in epoch milliseconds. When the clock has not
/// advanced past the last issued id, the issuer bumps by one millisecond so
/// ids stay strictly increasing and unique within the process.
pub fn next_entry_id(clock: &impl Clock) -> i64 {
    let now = clock.now_epoch_ms();
    let updated = LAST_ISSUED_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(last.max(now - 1) + 1)
    });
    match updated {
        Ok(last) => last.max(now - 1) + 1,
        // The update closure never returns `None`.
        Err(last) => last,
    }
}

/// Formats a date the way bucket keys store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a stored or user-picked `YYYY-MM-DD` value.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DateParseError {
        value: value.to_string(),
    })
}

/// Input is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub value: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid calendar date `{}`; expected YYYY-MM-DD", self.value)
    }
}

impl Error for DateParseError {}

#[cfg(test)]
mod tests {
    use super::{format_date, next_entry_id, parse_date, Clock, FixedClock};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_codec_round_trips() {
        let day = date(2025, 1, 10);
        assert_eq!(format_date(day), "2025-01-10");
        assert_eq!(parse_date("2025-01-10").unwrap(), day);
        assert_eq!(parse_date("  2025-01-10 ").unwrap(), day);
    }

    #[test]
    fn parse_date_rejects_non_dates() {
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("10/01/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn issued_ids_are_strictly_increasing_on_a_frozen_clock() {
        let clock = FixedClock::new(date(2025, 1, 10), 1_736_480_000_000, "09:15");
        let first = next_entry_id(&clock);
        let second = next_entry_id(&clock);
        let third = next_entry_id(&clock);
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn issued_ids_follow_the_clock_when_it_is_ahead() {
        let clock = FixedClock::new(date(2025, 1, 10), i64::MAX / 2, "09:15");
        assert!(next_entry_id(&clock) >= clock.now_epoch_ms());
    }
}
