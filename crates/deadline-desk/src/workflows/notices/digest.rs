use super::domain::{NoticeStatus, ParsedNotice, Urgency};
use super::parser::parse_notice_on;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything that may carry notice text, such as a case movement row.
pub trait NoticeText {
    fn notice_text(&self) -> Option<&str>;
}

impl NoticeText for str {
    fn notice_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl NoticeText for String {
    fn notice_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl NoticeText for Option<String> {
    fn notice_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<T: NoticeText + ?Sized> NoticeText for &T {
    fn notice_text(&self) -> Option<&str> {
        (**self).notice_text()
    }
}

/// Case movement carrying an optional notice description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl NoticeText for NoticeRecord {
    fn notice_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Number of open notices in the critical or high tier, for dashboard badges.
pub fn count_urgent_notices<I>(records: I, today: NaiveDate) -> usize
where
    I: IntoIterator,
    I::Item: NoticeText,
{
    records
        .into_iter()
        .filter(|record| parse_notice_on(record.notice_text(), today).is_urgent())
        .count()
}

/// Per-tier tally over a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDigest {
    pub total_records: usize,
    pub total_notices: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Notices that are not closed but carry no urgency tier.
    pub unscheduled: usize,
    pub closed: usize,
    pub overdue: usize,
}

impl NoticeDigest {
    pub fn from_records<I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator,
        I::Item: NoticeText,
    {
        let mut digest = Self::default();
        for record in records {
            digest.total_records += 1;
            let notice = parse_notice_on(record.notice_text(), today);
            digest.record(&notice);
        }
        digest
    }

    fn record(&mut self, notice: &ParsedNotice) {
        if !notice.is_notice {
            return;
        }

        self.total_notices += 1;
        if notice.status == NoticeStatus::Closed {
            self.closed += 1;
            return;
        }

        if notice.overdue {
            self.overdue += 1;
        }

        match notice.urgency {
            Some(Urgency::Critical) => self.critical += 1,
            Some(Urgency::High) => self.high += 1,
            Some(Urgency::Medium) => self.medium += 1,
            Some(Urgency::Low) => self.low += 1,
            None => self.unscheduled += 1,
        }
    }

    pub fn urgent(&self) -> usize {
        self.critical + self.high
    }

    pub fn count_for(&self, urgency: Urgency) -> usize {
        match urgency {
            Urgency::Critical => self.critical,
            Urgency::High => self.high,
            Urgency::Medium => self.medium,
            Urgency::Low => self.low,
        }
    }
}
