use super::domain::{NoticeStatus, ParsedNotice};
use super::urgency::resolve_schedule;
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const NOTICE_MARKER: &str = "intimação";

static PERIOD_DAYS: OnceLock<Regex> = OnceLock::new();
static PERIOD_START: OnceLock<Regex> = OnceLock::new();
static PERIOD_END: OnceLock<Regex> = OnceLock::new();
static STATUS: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("notice pattern compiles"))
}

fn period_days_pattern() -> &'static Regex {
    pattern(
        &PERIOD_DAYS,
        r"(?i)\bprazo\s*:\s*(\d+)\s*dias?(?:\s+[úu]teis)?",
    )
}

fn period_start_pattern() -> &'static Regex {
    pattern(
        &PERIOD_START,
        r"(?i)data\s+inicial\s+(?:da\s+)?contagem\s+(?:do\s+)?prazo\s*:\s*(\d{1,2}/\d{1,2}/\d{4})",
    )
}

fn period_end_pattern() -> &'static Regex {
    pattern(
        &PERIOD_END,
        r"(?i)data\s+final(?:\s+d[oa]\s+prazo)?\s*:\s*(\d{1,2}/\d{1,2}/\d{4})",
    )
}

fn status_pattern() -> &'static Regex {
    pattern(
        &STATUS,
        r"(?i)\bstatus\s*:\s*(aberto|fechado)(?:\s*\(([^)]*)\))?",
    )
}

/// Parses a notice against today's local date.
pub fn parse_notice<'a>(text: impl Into<Option<&'a str>>) -> ParsedNotice {
    parse_notice_on(text, Local::now().date_naive())
}

/// Parses a notice, deriving remaining days and urgency relative to `today`.
///
/// Never fails: text without the notice marker yields the default value, and
/// each field that cannot be extracted is simply left unset.
pub fn parse_notice_on<'a>(text: impl Into<Option<&'a str>>, today: NaiveDate) -> ParsedNotice {
    let Some(text) = text.into() else {
        return ParsedNotice::default();
    };

    if !is_notice(text) {
        return ParsedNotice::default();
    }

    let mut notice = ParsedNotice {
        is_notice: true,
        period_days: extract_period_days(text),
        period_start: extract_date(period_start_pattern(), text),
        period_end: extract_date(period_end_pattern(), text),
        ..ParsedNotice::default()
    };

    if let Some((status, detail)) = extract_status(text) {
        notice.status = status;
        notice.status_detail = detail;
    }

    resolve_schedule(&mut notice, today);
    notice
}

pub fn is_notice(text: &str) -> bool {
    text.to_lowercase().contains(NOTICE_MARKER)
}

fn extract_period_days(text: &str) -> Option<u32> {
    let captures = period_days_pattern().captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

fn extract_date(pattern: &Regex, text: &str) -> Option<NaiveDate> {
    let raw = pattern.captures(text)?.get(1)?.as_str();
    match NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(value = raw, error = %err, "ignoring malformed notice date");
            None
        }
    }
}

fn extract_status(text: &str) -> Option<(NoticeStatus, Option<String>)> {
    let captures = status_pattern().captures(text)?;
    let status = match captures.get(1)?.as_str().to_lowercase().as_str() {
        "aberto" => NoticeStatus::Open,
        "fechado" => NoticeStatus::Closed,
        _ => NoticeStatus::Unknown,
    };
    let detail = captures
        .get(2)
        .map(|detail| detail.as_str().trim().to_string())
        .filter(|detail| !detail.is_empty());

    Some((status, detail))
}
