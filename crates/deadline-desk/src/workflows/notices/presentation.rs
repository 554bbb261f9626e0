use super::domain::{ParsedNotice, Urgency};
use serde::{Deserialize, Serialize};

/// Visual severity used by deadline badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTone {
    Danger,
    Warning,
    Caution,
    Info,
    Neutral,
}

impl UrgencyTone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "Danger",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
            Self::Info => "Info",
            Self::Neutral => "Neutral",
        }
    }
}

pub fn urgency_tone(urgency: Option<Urgency>) -> UrgencyTone {
    match urgency {
        Some(Urgency::Critical) => UrgencyTone::Danger,
        Some(Urgency::High) => UrgencyTone::Warning,
        Some(Urgency::Medium) => UrgencyTone::Caution,
        Some(Urgency::Low) => UrgencyTone::Info,
        None => UrgencyTone::Neutral,
    }
}

/// Short badge text for a notice deadline. Notices without an urgency tier
/// get no label.
pub fn deadline_label(
    urgency: Option<Urgency>,
    days_remaining: Option<i64>,
    overdue: bool,
) -> Option<String> {
    urgency?;

    if overdue {
        return Some("OVERDUE".to_string());
    }

    let label = match days_remaining? {
        0 => "due today".to_string(),
        1 => "due tomorrow".to_string(),
        days if days < 0 => format!("overdue by {} days", days.unsigned_abs()),
        days => format!("{days} days remaining"),
    };
    Some(label)
}

impl ParsedNotice {
    pub fn tone(&self) -> UrgencyTone {
        urgency_tone(self.urgency)
    }

    pub fn deadline_label(&self) -> Option<String> {
        deadline_label(self.urgency, self.days_remaining, self.overdue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_maps_each_tier() {
        assert_eq!(urgency_tone(Some(Urgency::Critical)), UrgencyTone::Danger);
        assert_eq!(urgency_tone(Some(Urgency::High)), UrgencyTone::Warning);
        assert_eq!(urgency_tone(Some(Urgency::Medium)), UrgencyTone::Caution);
        assert_eq!(urgency_tone(Some(Urgency::Low)), UrgencyTone::Info);
        assert_eq!(urgency_tone(None), UrgencyTone::Neutral);
    }

    #[test]
    fn labels_cover_each_branch() {
        let critical = Some(Urgency::Critical);
        assert_eq!(deadline_label(critical, Some(-2), true).as_deref(), Some("OVERDUE"));
        assert_eq!(deadline_label(critical, Some(0), false).as_deref(), Some("due today"));
        assert_eq!(deadline_label(critical, Some(1), false).as_deref(), Some("due tomorrow"));
        assert_eq!(
            deadline_label(critical, Some(-3), false).as_deref(),
            Some("overdue by 3 days")
        );
        assert_eq!(
            deadline_label(Some(Urgency::Low), Some(12), false).as_deref(),
            Some("12 days remaining")
        );
    }

    #[test]
    fn labels_need_an_urgency_and_a_day_count() {
        assert_eq!(deadline_label(None, Some(2), false), None);
        assert_eq!(deadline_label(None, Some(-2), true), None);
        assert_eq!(deadline_label(Some(Urgency::High), None, false), None);
    }
}
