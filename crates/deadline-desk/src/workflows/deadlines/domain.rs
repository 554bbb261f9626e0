use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    National,
    State,
    Municipal,
    CourtRecess,
}

impl HolidayCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::National,
            Self::State,
            Self::Municipal,
            Self::CourtRecess,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::National => "National",
            Self::State => "State",
            Self::Municipal => "Municipal",
            Self::CourtRecess => "Court Recess",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHolidayCategory(pub String);

impl fmt::Display for UnknownHolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown holiday category '{}'", self.0)
    }
}

impl std::error::Error for UnknownHolidayCategory {}

impl FromStr for HolidayCategory {
    type Err = UnknownHolidayCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "national" | "nacional" => Ok(Self::National),
            "state" | "estadual" => Ok(Self::State),
            "municipal" => Ok(Self::Municipal),
            "court_recess" | "recesso" | "recesso_forense" => Ok(Self::CourtRecess),
            _ => Err(UnknownHolidayCategory(value.to_string())),
        }
    }
}

/// A single non-working day. Only the calendar date takes part in
/// business-day checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub description: String,
    pub category: HolidayCategory,
}

impl Holiday {
    pub fn new(date: NaiveDate, description: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            description: description.into(),
            category,
        }
    }
}
