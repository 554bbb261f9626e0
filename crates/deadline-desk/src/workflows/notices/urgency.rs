use super::domain::{ParsedNotice, Urgency};
use chrono::{Duration, NaiveDate};

pub const CRITICAL_MAX_DAYS: i64 = 3;
pub const HIGH_MAX_DAYS: i64 = 5;
pub const MEDIUM_MAX_DAYS: i64 = 10;

/// Tier for an open notice. Overdue notices and those within three days share
/// the critical tier; every cutoff is inclusive.
pub fn classify_urgency(days_remaining: i64, overdue: bool) -> Urgency {
    if overdue || days_remaining <= CRITICAL_MAX_DAYS {
        Urgency::Critical
    } else if days_remaining <= HIGH_MAX_DAYS {
        Urgency::High
    } else if days_remaining <= MEDIUM_MAX_DAYS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Fills in the end date (when only start and length are known), the
/// remaining days, the overdue flag and the urgency tier.
pub(crate) fn resolve_schedule(notice: &mut ParsedNotice, today: NaiveDate) {
    if notice.period_end.is_none() {
        // Upstream periods are calendar days, not business days.
        notice.period_end = match (notice.period_start, notice.period_days) {
            (Some(start), Some(days)) => start.checked_add_signed(Duration::days(i64::from(days))),
            _ => None,
        };
    }

    let Some(end) = notice.period_end else {
        return;
    };

    let days_remaining = (end - today).num_days();
    notice.days_remaining = Some(days_remaining);
    notice.overdue = end < today;

    if notice.is_open() {
        notice.urgency = Some(classify_urgency(days_remaining, notice.overdue));
    }
}
