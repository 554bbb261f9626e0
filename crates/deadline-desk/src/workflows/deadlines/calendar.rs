use super::domain::Holiday;
use super::holidays::{build_court_recess_holidays, build_fixed_national_holidays};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Immutable holiday set answering business-day questions.
///
/// Holidays are keyed by calendar date, so the first holiday registered for a
/// date wins and later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl BusinessCalendar {
    pub fn new<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        Self::default().merge(holidays)
    }

    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self::new(holidays.iter().cloned())
    }

    /// Fixed national holidays plus court recess for a single year, including
    /// the tail of the previous year's recess that lands in early January.
    pub fn standard(year: i32) -> Self {
        Self::for_years(year..=year)
    }

    pub fn for_years(years: RangeInclusive<i32>) -> Self {
        let national = years.clone().flat_map(build_fixed_national_holidays);
        let recess = (years.start().saturating_sub(1)..=*years.end())
            .flat_map(build_court_recess_holidays);
        Self::new(national).merge(recess)
    }

    pub fn merge<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        for holiday in holidays {
            self.holidays.entry(holiday.date).or_insert(holiday);
        }
        self
    }

    pub fn holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.holidays.contains_key(&date)
    }

    /// Advances `count` business days strictly after `start`. A non-positive
    /// count returns `start` unchanged.
    pub fn add_business_days(&self, start: NaiveDate, count: i64) -> NaiveDate {
        if count <= 0 {
            return start;
        }

        let mut remaining = count;
        let mut current = start;
        while remaining > 0 {
            let Some(next) = current.succ_opt() else {
                break;
            };
            current = next;
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Business days in `(start, end]`; zero when `end <= start`.
    pub fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if end <= start {
            return 0;
        }

        start
            .iter_days()
            .skip(1)
            .take_while(|day| *day <= end)
            .filter(|day| self.is_business_day(*day))
            .count() as i64
    }

    /// First business day on or after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }
}

pub fn is_business_day(date: NaiveDate, holidays: &[Holiday]) -> bool {
    !BusinessCalendar::is_weekend(date) && !holidays.iter().any(|holiday| holiday.date == date)
}

pub fn add_business_days(start: NaiveDate, count: i64, holidays: &[Holiday]) -> NaiveDate {
    BusinessCalendar::from_holidays(holidays).add_business_days(start, count)
}

pub fn count_business_days(start: NaiveDate, end: NaiveDate, holidays: &[Holiday]) -> i64 {
    BusinessCalendar::from_holidays(holidays).count_business_days(start, end)
}

pub fn next_business_day(date: NaiveDate, holidays: &[Holiday]) -> NaiveDate {
    BusinessCalendar::from_holidays(holidays).next_business_day(date)
}
