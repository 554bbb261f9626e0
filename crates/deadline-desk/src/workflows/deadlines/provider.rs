use super::calendar::BusinessCalendar;
use super::domain::Holiday;
use super::holidays::{
    build_court_recess_holidays, build_fixed_national_holidays, build_movable_holidays,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Knobs applied to every calendar the service assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSettings {
    pub include_movable_feasts: bool,
    /// Extra years loaded past the computed horizon of a request.
    pub year_span: u8,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            include_movable_feasts: false,
            year_span: 1,
        }
    }
}

/// Builds per-request calendars from the static tables plus the office's
/// regional holidays.
#[derive(Debug, Clone, Default)]
pub struct CalendarProvider {
    settings: CalendarSettings,
    regional: Vec<Holiday>,
}

impl CalendarProvider {
    pub fn new(settings: CalendarSettings) -> Self {
        Self {
            settings,
            regional: Vec::new(),
        }
    }

    pub fn with_regional_holidays(mut self, holidays: Vec<Holiday>) -> Self {
        self.regional = holidays;
        self
    }

    pub fn settings(&self) -> CalendarSettings {
        self.settings
    }

    pub fn regional_holidays(&self) -> &[Holiday] {
        &self.regional
    }

    /// Calendar covering every year from `start` through `end` plus the
    /// configured span.
    pub fn calendar_between(&self, start: NaiveDate, end: NaiveDate) -> BusinessCalendar {
        let (low, high) = if start <= end { (start, end) } else { (end, start) };
        let first = low.year();
        let last = high.year().saturating_add(i32::from(self.settings.year_span));

        let mut calendar = BusinessCalendar::for_years(first..=last);
        if self.settings.include_movable_feasts {
            calendar = calendar.merge((first..=last).flat_map(build_movable_holidays));
        }
        calendar.merge(self.regional.iter().cloned())
    }

    /// Calendar wide enough to resolve `business_days` forward from `start`.
    pub fn calendar_for_deadline(&self, start: NaiveDate, business_days: i64) -> BusinessCalendar {
        let horizon = business_days.max(0).saturating_mul(2).saturating_add(60);
        let end = start
            .checked_add_signed(Duration::days(horizon))
            .unwrap_or(NaiveDate::MAX);
        self.calendar_between(start, end)
    }

    /// Holidays observed during `year`, sorted by date.
    pub fn holidays_for_year(&self, year: i32, include_movable_feasts: bool) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = build_fixed_national_holidays(year)
            .into_iter()
            .chain(build_court_recess_holidays(year.saturating_sub(1)))
            .chain(build_court_recess_holidays(year))
            .filter(|holiday| holiday.date.year() == year)
            .collect();

        if include_movable_feasts {
            holidays.extend(build_movable_holidays(year));
        }

        holidays.extend(
            self.regional
                .iter()
                .filter(|holiday| holiday.date.year() == year)
                .cloned(),
        );

        holidays.sort_by_key(|holiday| holiday.date);
        holidays.dedup_by_key(|holiday| holiday.date);
        holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::deadlines::domain::HolidayCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn holidays_for_year_stay_within_the_year() {
        let provider = CalendarProvider::default();
        let holidays = provider.holidays_for_year(2024, false);
        // Jan 1 and Dec 25 fall inside the recess window, leaving six other
        // national days.
        assert_eq!(holidays.len(), 6 + 12 + 6);
        assert!(holidays.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn movable_feasts_are_opt_in() {
        let provider = CalendarProvider::new(CalendarSettings {
            include_movable_feasts: true,
            year_span: 0,
        });
        let calendar = provider.calendar_between(date(2024, 3, 1), date(2024, 4, 30));
        assert!(!calendar.is_business_day(date(2024, 3, 29)));

        let plain = CalendarProvider::default();
        let calendar = plain.calendar_between(date(2024, 3, 1), date(2024, 4, 30));
        assert!(calendar.is_business_day(date(2024, 3, 29)));
    }

    #[test]
    fn regional_holidays_are_merged() {
        let provider = CalendarProvider::default().with_regional_holidays(vec![Holiday::new(
            date(2024, 7, 9),
            "Revolução Constitucionalista",
            HolidayCategory::State,
        )]);
        let calendar = provider.calendar_for_deadline(date(2024, 7, 5), 5);
        assert!(!calendar.is_business_day(date(2024, 7, 9)));
        assert_eq!(calendar.add_business_days(date(2024, 7, 5), 2), date(2024, 7, 10));
    }
}
