use chrono::{Datelike, Duration, NaiveDate, Weekday};
use deadline_desk::workflows::deadlines::{
    add_business_days, build_court_recess_holidays, build_fixed_national_holidays,
    count_business_days, is_business_day, next_business_day, BusinessCalendar, Holiday,
    HolidayCategory,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn national_and_recess(year: i32) -> Vec<Holiday> {
    let mut holidays = build_fixed_national_holidays(year);
    holidays.extend(build_court_recess_holidays(year - 1));
    holidays.extend(build_court_recess_holidays(year));
    holidays
}

fn sample_days() -> impl Iterator<Item = NaiveDate> {
    date(2024, 1, 1).iter_days().take(400)
}

#[test]
fn weekends_are_excluded_whatever_the_holidays() {
    let holidays = national_and_recess(2024);
    for day in sample_days() {
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            assert!(!is_business_day(day, &holidays), "{day} is a weekend");
            assert!(!is_business_day(day, &[]), "{day} is a weekend");
        }
    }
}

#[test]
fn weekdays_outside_the_holiday_list_are_business_days() {
    let holidays = national_and_recess(2024);
    for day in sample_days() {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        let holiday = holidays.iter().any(|h| h.date == day);
        assert_eq!(is_business_day(day, &holidays), !weekend && !holiday, "{day}");
    }
}

#[test]
fn new_year_is_never_a_business_day() {
    for year in 2020..=2030 {
        let holidays = build_fixed_national_holidays(year);
        assert!(!is_business_day(date(year, 1, 1), &holidays));
    }
}

#[test]
fn zero_business_days_is_a_no_op() {
    let holidays = national_and_recess(2024);
    for day in sample_days().step_by(7) {
        assert_eq!(add_business_days(day, 0, &holidays), day);
    }
}

#[test]
fn adding_more_days_never_moves_the_deadline_backwards() {
    let holidays = national_and_recess(2024);
    let start = date(2024, 11, 28);
    let mut previous = start;
    for n in 1..=40 {
        let deadline = add_business_days(start, n, &holidays);
        assert!(deadline > previous, "n = {n}");
        previous = deadline;
    }
}

#[test]
fn counting_reverses_adding() {
    let holidays = national_and_recess(2024);
    for start in sample_days().step_by(11) {
        for n in [0, 1, 2, 5, 15, 30] {
            let deadline = add_business_days(start, n, &holidays);
            assert_eq!(
                count_business_days(start, deadline, &holidays),
                n,
                "start {start}, n {n}"
            );
        }
    }
}

#[test]
fn friday_plus_one_is_monday() {
    let friday = date(2024, 3, 1);
    assert_eq!(friday.weekday(), Weekday::Fri);
    assert_eq!(add_business_days(friday, 1, &[]), date(2024, 3, 4));
}

#[test]
fn fifteen_day_deadline_jumps_the_court_recess() {
    // Deadline counted from Monday 2024-12-09 with the year-end recess.
    let holidays = national_and_recess(2025);
    let deadline = add_business_days(date(2024, 12, 9), 15, &holidays);
    // Dec 10-19 gives eight business days, the rest start on Jan 7.
    assert_eq!(deadline, date(2025, 1, 15));
}

#[test]
fn court_recess_for_2024_has_eighteen_entries() {
    let recess = build_court_recess_holidays(2024);
    assert_eq!(recess.len(), 18);
    assert!(recess
        .iter()
        .all(|holiday| holiday.category == HolidayCategory::CourtRecess));
}

#[test]
fn next_business_day_skips_holiday_and_weekend() {
    let holidays = build_fixed_national_holidays(2025);
    // Republic Day 2025 falls on a Saturday; Friday Nov 21 is an ordinary day.
    assert_eq!(next_business_day(date(2025, 11, 15), &holidays), date(2025, 11, 17));
    assert_eq!(next_business_day(date(2025, 11, 21), &holidays), date(2025, 11, 21));
}

#[test]
fn calendar_and_free_functions_agree() {
    let holidays = national_and_recess(2024);
    let calendar = BusinessCalendar::from_holidays(&holidays);
    for day in sample_days().step_by(3) {
        assert_eq!(calendar.is_business_day(day), is_business_day(day, &holidays));
        assert_eq!(
            calendar.add_business_days(day, 7),
            add_business_days(day, 7, &holidays)
        );
        let later = day + Duration::days(20);
        assert_eq!(
            calendar.count_business_days(day, later),
            count_business_days(day, later, &holidays)
        );
    }
}
