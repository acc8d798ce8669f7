//! Viewed-date cursor.
//!
//! # Responsibility
//! - Track the date currently shown and its navigation.
//! - Report whether the viewed date may be edited.
//!
//! # Invariants
//! - Only the device-local "today" is editable.
//! - Editability is recomputed against a caller-supplied today on every
//!   check, so an app left open across midnight flips to read-only.

use chrono::{Duration, NaiveDate};

/// Tracks the currently viewed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    current: NaiveDate,
}

impl DateCursor {
    /// Starts on the supplied date, normally the device-local today.
    pub fn new(today: NaiveDate) -> Self {
        Self { current: today }
    }

    /// Date currently viewed.
    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// Moves by whole days; month and year boundaries follow the calendar.
    ///
    /// A shift past the representable date range leaves the cursor
    /// unchanged.
    pub fn shift(&mut self, delta_days: i64) {
        if let Some(shifted) = Duration::try_days(delta_days)
            .and_then(|step| self.current.checked_add_signed(step))
        {
            self.current = shifted;
        }
    }

    /// Jumps to an arbitrary date.
    ///
    /// Past and future dates are both viewable; editability stays governed
    /// by [`DateCursor::is_editable`].
    pub fn set(&mut self, date: NaiveDate) {
        self.current = date;
    }

    /// True only when the viewed date equals `today`.
    pub fn is_editable(&self, today: NaiveDate) -> bool {
        self.current == today
    }
}

#[cfg(test)]
mod tests {
    use super::DateCursor;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_crosses_month_and_year_boundaries() {
        let mut cursor = DateCursor::new(date(2025, 1, 1));
        cursor.shift(-1);
        assert_eq!(cursor.current(), date(2024, 12, 31));

        cursor.shift(31);
        assert_eq!(cursor.current(), date(2025, 1, 31));

        cursor.shift(1);
        assert_eq!(cursor.current(), date(2025, 2, 1));
    }

    #[test]
    fn extreme_shift_leaves_cursor_unchanged() {
        let mut cursor = DateCursor::new(date(2025, 1, 10));
        cursor.shift(i64::MAX);
        assert_eq!(cursor.current(), date(2025, 1, 10));
    }

    #[test]
    fn only_today_is_editable() {
        let today = date(2025, 1, 10);
        let mut cursor = DateCursor::new(today);
        assert!(cursor.is_editable(today));

        cursor.shift(-1);
        assert!(!cursor.is_editable(today));

        cursor.set(today);
        assert!(cursor.is_editable(today));

        // The app stayed open across midnight: same cursor, new today.
        assert!(!cursor.is_editable(date(2025, 1, 11)));
    }

    #[test]
    fn set_allows_past_and_future() {
        let mut cursor = DateCursor::new(date(2025, 1, 10));
        cursor.set(date(1999, 12, 31));
        assert_eq!(cursor.current(), date(1999, 12, 31));

        cursor.set(date(2030, 6, 15));
        assert_eq!(cursor.current(), date(2030, 6, 15));
    }
}
