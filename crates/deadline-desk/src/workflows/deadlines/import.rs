use super::domain::{Holiday, HolidayCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum HolidayImportError {
    #[error("failed to read regional holiday file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid regional holiday CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads office-specific state and municipal holidays from a CSV export with
/// `date,description,category` headers.
pub struct RegionalHolidayImporter;

impl RegionalHolidayImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Holiday>, HolidayImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Holiday>, HolidayImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen: HashSet<NaiveDate> = HashSet::new();
        let mut holidays = Vec::new();

        for (index, row) in csv_reader.deserialize::<HolidayRow>().enumerate() {
            let row = row?;
            let Some(date) = parse_holiday_date(&row.date) else {
                warn!(line = index + 2, value = %row.date, "skipping regional holiday with unreadable date");
                continue;
            };

            if !seen.insert(date) {
                debug!(%date, "duplicate regional holiday ignored");
                continue;
            }

            holidays.push(Holiday::new(date, row.description, row.category));
        }

        debug!(count = holidays.len(), "regional holidays imported");
        Ok(holidays)
    }
}

#[derive(Debug, Deserialize)]
struct HolidayRow {
    date: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    category: HolidayCategory,
}

fn default_category() -> HolidayCategory {
    HolidayCategory::Municipal
}

fn category_or_default<'de, D>(deserializer: D) -> Result<HolidayCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default_category()),
        Some(value) => value.parse().map_err(serde::de::Error::custom),
    }
}

fn parse_holiday_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}
