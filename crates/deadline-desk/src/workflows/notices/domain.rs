use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl NoticeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

/// Structured reading of a legal notice (intimação).
///
/// `days_remaining`, `overdue` and `urgency` are relative to the evaluation
/// date passed to the parser. `urgency` is only ever set for open notices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNotice {
    pub is_notice: bool,
    pub period_days: Option<u32>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub status: NoticeStatus,
    pub status_detail: Option<String>,
    pub days_remaining: Option<i64>,
    pub overdue: bool,
    pub urgency: Option<Urgency>,
}

impl ParsedNotice {
    pub fn is_open(&self) -> bool {
        self.status == NoticeStatus::Open
    }

    /// Open notice whose deadline falls in the critical or high tier.
    pub fn is_urgent(&self) -> bool {
        self.is_notice && self.is_open() && self.urgency.is_some_and(Urgency::is_urgent)
    }
}
