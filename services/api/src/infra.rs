use chrono::NaiveDate;
use deadline_desk::config::CalendarConfig;
use deadline_desk::error::AppError;
use deadline_desk::workflows::deadlines::{CalendarProvider, RegionalHolidayImporter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the calendar provider, loading the regional holiday file
/// when one is configured.
pub(crate) fn calendar_provider(config: &CalendarConfig) -> Result<CalendarProvider, AppError> {
    let provider = CalendarProvider::new(config.settings());

    match &config.regional_holidays_csv {
        Some(path) => {
            let holidays = RegionalHolidayImporter::from_path(path)?;
            info!(path = %path.display(), count = holidays.len(), "regional holidays loaded");
            Ok(provider.with_regional_holidays(holidays))
        }
        None => Ok(provider),
    }
}

/// Accepts `YYYY-MM-DD` and the `DD/MM/YYYY` form used in court documents.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD or DD/MM/YYYY ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_date_accepts_both_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 10).expect("valid");
        assert_eq!(parse_date("2024-12-10"), Ok(expected));
        assert_eq!(parse_date(" 10/12/2024 "), Ok(expected));
        assert!(parse_date("12/31/2024").is_err());
    }

    #[test]
    fn missing_regional_file_is_reported() {
        let config = CalendarConfig {
            regional_holidays_csv: Some(PathBuf::from("./no-such-holidays.csv")),
            include_movable_feasts: false,
            year_span: 1,
        };
        match calendar_provider(&config) {
            Err(AppError::Holidays(_)) => {}
            Err(other) => panic!("expected holiday error, got {other:?}"),
            Ok(_) => panic!("expected holiday error, got a provider"),
        }
    }
}
