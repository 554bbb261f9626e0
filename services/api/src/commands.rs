use crate::infra::{calendar_provider, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use deadline_desk::config::AppConfig;
use deadline_desk::error::AppError;
use deadline_desk::workflows::deadlines::router::{
    add_business_days_report, AddBusinessDaysResponse, CountBusinessDaysResponse,
    HolidayListResponse, NextBusinessDayResponse, MAX_BUSINESS_DAYS,
};
use deadline_desk::workflows::deadlines::CalendarProvider;
use deadline_desk::workflows::notices::router::ParsedNoticeView;
use deadline_desk::workflows::notices::parse_notice_on;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CalendarArgs {
    /// Include Carnival, Good Friday and Corpus Christi
    #[arg(long)]
    pub(crate) movable: bool,
    /// Regional holiday CSV (overrides APP_REGIONAL_HOLIDAYS_CSV)
    #[arg(long)]
    pub(crate) holidays_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DeadlineAddArgs {
    /// Start date (YYYY-MM-DD or DD/MM/YYYY); never counted itself
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: NaiveDate,
    /// Number of business days to add
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) business_days: i64,
    #[command(flatten)]
    pub(crate) calendar: CalendarArgs,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DeadlineCountArgs {
    /// Start date (exclusive)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: NaiveDate,
    /// End date (inclusive)
    #[arg(long, value_parser = parse_date)]
    pub(crate) end: NaiveDate,
    #[command(flatten)]
    pub(crate) calendar: CalendarArgs,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NextBusinessDayArgs {
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: NaiveDate,
    #[command(flatten)]
    pub(crate) calendar: CalendarArgs,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NoticeParseArgs {
    /// Notice text to parse
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// Read the notice text from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HolidayListArgs {
    #[arg(long)]
    pub(crate) year: i32,
    #[command(flatten)]
    pub(crate) calendar: CalendarArgs,
    #[arg(long)]
    pub(crate) json: bool,
}

fn load_provider(args: CalendarArgs) -> Result<CalendarProvider, AppError> {
    let mut calendar = AppConfig::load()?.calendar;
    if args.movable {
        calendar.include_movable_feasts = true;
    }
    if let Some(path) = args.holidays_csv {
        calendar.regional_holidays_csv = Some(path);
    }
    calendar_provider(&calendar)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|err| AppError::InvalidInput(err.to_string()))?;
        println!("{rendered}");
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

pub(crate) fn run_deadline_add(args: DeadlineAddArgs) -> Result<(), AppError> {
    if args.business_days > MAX_BUSINESS_DAYS {
        return Err(AppError::InvalidInput(format!(
            "business days must not exceed {MAX_BUSINESS_DAYS}"
        )));
    }

    let provider = load_provider(args.calendar)?;
    let report = add_business_days_report(&provider, args.start, args.business_days);
    emit(args.json, &report, render_deadline)
}

pub(crate) fn run_deadline_count(args: DeadlineCountArgs) -> Result<(), AppError> {
    let provider = load_provider(args.calendar)?;
    let calendar = provider.calendar_between(args.start, args.end);
    let report = CountBusinessDaysResponse {
        start: args.start,
        end: args.end,
        business_days: calendar.count_business_days(args.start, args.end),
    };
    emit(args.json, &report, |report| {
        format!(
            "{} business day(s) after {} up to and including {}",
            report.business_days, report.start, report.end
        )
    })
}

pub(crate) fn run_next_business_day(args: NextBusinessDayArgs) -> Result<(), AppError> {
    let provider = load_provider(args.calendar)?;
    let calendar = provider.calendar_for_deadline(args.date, 0);
    let report = NextBusinessDayResponse {
        requested: args.date,
        date: calendar.next_business_day(args.date),
        holiday: calendar.holiday_on(args.date).cloned(),
    };
    emit(args.json, &report, |report| match &report.holiday {
        Some(holiday) => format!(
            "{} is {} ({}); next business day: {}",
            report.requested,
            holiday.description,
            holiday.category.label(),
            report.date
        ),
        None => format!("next business day: {}", report.date),
    })
}

pub(crate) fn run_notice_parse(args: NoticeParseArgs) -> Result<(), AppError> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "provide --text or --file".to_string(),
            ))
        }
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let view = ParsedNoticeView::new(parse_notice_on(text.as_str(), today), today);
    emit(args.json, &view, render_notice)
}

pub(crate) fn run_holiday_list(args: HolidayListArgs) -> Result<(), AppError> {
    if NaiveDate::from_ymd_opt(args.year, 1, 1).is_none() {
        return Err(AppError::InvalidInput(format!(
            "year {} is out of range",
            args.year
        )));
    }

    let provider = load_provider(args.calendar)?;
    let report = holiday_list_report(&provider, args.year);
    emit(args.json, &report, |report| {
        let mut lines = vec![format!("Holidays in {} ({})", report.year, report.holidays.len())];
        lines.extend(report.holidays.iter().map(|holiday| {
            format!(
                "- {} {:<13} {}",
                holiday.date.format("%d/%m/%Y"),
                holiday.category.label(),
                holiday.description
            )
        }));
        lines.join("\n")
    })
}

/// Holidays observed by the provider's calendars, movable feasts included
/// when its settings enable them.
pub(crate) fn holiday_list_report(provider: &CalendarProvider, year: i32) -> HolidayListResponse {
    let include_movable = provider.settings().include_movable_feasts;
    HolidayListResponse {
        year,
        holidays: provider.holidays_for_year(year, include_movable),
    }
}

pub(crate) fn render_deadline(report: &AddBusinessDaysResponse) -> String {
    let mut lines = vec![format!(
        "{} + {} business day(s) = {}",
        report.start.format("%d/%m/%Y"),
        report.business_days,
        report.deadline.format("%d/%m/%Y")
    )];
    if !report.skipped_holidays.is_empty() {
        lines.push(format!(
            "Skipped {} holiday(s):",
            report.skipped_holidays.len()
        ));
        lines.extend(report.skipped_holidays.iter().map(|holiday| {
            format!(
                "  - {} {}",
                holiday.date.format("%d/%m/%Y"),
                holiday.description
            )
        }));
    }
    lines.join("\n")
}

pub(crate) fn render_notice(view: &ParsedNoticeView) -> String {
    let notice = &view.notice;
    if !notice.is_notice {
        return "Not a notice (no intimação marker found)".to_string();
    }

    let mut lines = vec![format!("Notice evaluated on {}", view.today)];
    lines.push(format!("- status: {}", notice.status.label()));
    if let Some(detail) = &notice.status_detail {
        lines.push(format!("- status detail: {detail}"));
    }
    if let Some(days) = notice.period_days {
        lines.push(format!("- period: {days} day(s)"));
    }
    if let Some(start) = notice.period_start {
        lines.push(format!("- period start: {}", start.format("%d/%m/%Y")));
    }
    if let Some(end) = notice.period_end {
        lines.push(format!("- period end: {}", end.format("%d/%m/%Y")));
    }
    if let Some(urgency) = notice.urgency {
        lines.push(format!(
            "- urgency: {} [{}]",
            urgency.label(),
            view.tone.label()
        ));
    }
    if let Some(label) = &view.label {
        lines.push(format!("- {label}"));
    }
    lines.join("\n")
}
