//! Static holiday tables. Every builder is a pure function of the year.

use super::domain::{Holiday, HolidayCategory};
use chrono::{Duration, NaiveDate};

const FIXED_NATIONAL: &[(u32, u32, &str)] = &[
    (1, 1, "Confraternização Universal"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalho"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Senhora Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

// Offsets in days from Easter Sunday.
const MOVABLE_FEASTS: &[(i64, &str)] = &[
    (-48, "Segunda-feira de Carnaval"),
    (-47, "Terça-feira de Carnaval"),
    (-2, "Sexta-feira Santa"),
    (60, "Corpus Christi"),
];

pub const COURT_RECESS_DECEMBER_START: u32 = 20;
pub const COURT_RECESS_JANUARY_END: u32 = 6;

/// The eight fixed-date national holidays for `year`.
pub fn build_fixed_national_holidays(year: i32) -> Vec<Holiday> {
    FIXED_NATIONAL
        .iter()
        .filter_map(|(month, day, description)| {
            NaiveDate::from_ymd_opt(year, *month, *day)
                .map(|date| Holiday::new(date, *description, HolidayCategory::National))
        })
        .collect()
}

/// Year-end court recess: Dec 20-31 of `year` followed by Jan 1-6 of `year + 1`.
pub fn build_court_recess_holidays(year: i32) -> Vec<Holiday> {
    let december = (COURT_RECESS_DECEMBER_START..=31).map(|day| (year, 12, day));
    let january = year
        .checked_add(1)
        .into_iter()
        .flat_map(|next| (1..=COURT_RECESS_JANUARY_END).map(move |day| (next, 1, day)));

    december
        .chain(january)
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .map(|date| Holiday::new(date, "Recesso Forense", HolidayCategory::CourtRecess))
        .collect()
}

/// Easter Sunday in the Gregorian calendar (anonymous algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Carnival, Good Friday and Corpus Christi, which courts observe even
/// though they move with Easter.
pub fn build_movable_holidays(year: i32) -> Vec<Holiday> {
    let Some(easter) = easter_sunday(year) else {
        return Vec::new();
    };

    MOVABLE_FEASTS
        .iter()
        .filter_map(|(offset, description)| {
            easter
                .checked_add_signed(Duration::days(*offset))
                .map(|date| Holiday::new(date, *description, HolidayCategory::National))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn fixed_table_has_eight_national_entries() {
        let holidays = build_fixed_national_holidays(2025);
        assert_eq!(holidays.len(), 8);
        assert!(holidays
            .iter()
            .all(|holiday| holiday.category == HolidayCategory::National));
        assert!(holidays.iter().all(|holiday| holiday.date.year() == 2025));
        assert_eq!(holidays[0].date, date(2025, 1, 1));
        assert_eq!(holidays[7].date, date(2025, 12, 25));
    }

    #[test]
    fn court_recess_spans_year_boundary() {
        let recess = build_court_recess_holidays(2024);
        assert_eq!(recess.len(), 18);
        assert_eq!(recess.first().map(|h| h.date), Some(date(2024, 12, 20)));
        assert_eq!(recess.last().map(|h| h.date), Some(date(2025, 1, 6)));
        assert_eq!(
            recess.iter().filter(|h| h.date.year() == 2024).count(),
            12
        );
        assert!(recess
            .iter()
            .all(|holiday| holiday.category == HolidayCategory::CourtRecess));
    }

    #[test]
    fn tables_are_empty_outside_the_representable_range() {
        for year in [i32::MIN, i32::MAX] {
            assert!(build_court_recess_holidays(year).is_empty());
            assert!(build_fixed_national_holidays(year).is_empty());
            assert!(build_movable_holidays(year).is_empty());
        }

        // The last representable year keeps its December but has no January tail.
        let last = build_court_recess_holidays(NaiveDate::MAX.year());
        assert_eq!(last.len(), 12);
        assert_eq!(last.last().map(|h| h.date), Some(NaiveDate::MAX));
    }

    #[test]
    fn easter_matches_known_years() {
        assert_eq!(easter_sunday(2023), Some(date(2023, 4, 9)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2000), Some(date(2000, 4, 23)));
    }

    #[test]
    fn movable_feasts_follow_easter() {
        let dates: Vec<NaiveDate> = build_movable_holidays(2024)
            .into_iter()
            .map(|holiday| holiday.date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 2, 12),
                date(2024, 2, 13),
                date(2024, 3, 29),
                date(2024, 5, 30),
            ]
        );
    }
}
