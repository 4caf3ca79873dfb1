use chrono::{DateTime, Days, NaiveDate, Utc};

/// How far back a PR's creation or last update may lie and still be listed.
pub const REVIEW_WINDOW_DAYS: u64 = 21;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Calendar-day range `[today - 21 days, today]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn ending(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(REVIEW_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Whether `timestamp` falls on or after the first day of the window.
    /// Only the calendar date counts; the time of day is ignored.
    pub fn is_recent(&self, timestamp: &DateTime<Utc>) -> bool {
        timestamp.date_naive() >= self.start
    }

    /// `DD/MM/YYYY - DD/MM/YYYY (21 dias)`
    pub fn caption(&self) -> String {
        format!(
            "{} - {} ({} dias)",
            self.start.format(DISPLAY_FORMAT),
            self.end.format(DISPLAY_FORMAT),
            REVIEW_WINDOW_DAYS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_spans_21_days() {
        let window = DateWindow::ending(date(2024, 3, 10));
        assert_eq!(window.start, date(2024, 2, 18));
        assert_eq!(window.end, date(2024, 3, 10));
    }

    #[test]
    fn boundary_day_is_inclusive() {
        let window = DateWindow::ending(date(2024, 3, 10));

        let first_second = Utc.with_ymd_and_hms(2024, 2, 18, 0, 0, 0).unwrap();
        let last_second = Utc.with_ymd_and_hms(2024, 2, 18, 23, 59, 59).unwrap();
        let day_before = Utc.with_ymd_and_hms(2024, 2, 17, 23, 59, 59).unwrap();

        assert!(window.is_recent(&first_second));
        assert!(window.is_recent(&last_second));
        assert!(!window.is_recent(&day_before));
    }

    #[test]
    fn caption_uses_day_month_year() {
        let window = DateWindow::ending(date(2024, 1, 5));
        assert_eq!(window.caption(), "15/12/2023 - 05/01/2024 (21 dias)");
    }
}
