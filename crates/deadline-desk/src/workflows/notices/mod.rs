//! Legal notice (intimação) parsing, urgency tiers and dashboard helpers.

mod digest;
pub mod domain;
mod parser;
mod presentation;
pub mod router;
mod urgency;

pub use digest::{count_urgent_notices, NoticeDigest, NoticeRecord, NoticeText};
pub use domain::{NoticeStatus, ParsedNotice, Urgency};
pub use parser::{is_notice, parse_notice, parse_notice_on};
pub use presentation::{deadline_label, urgency_tone, UrgencyTone};
pub use router::notice_router;
pub use urgency::{classify_urgency, CRITICAL_MAX_DAYS, HIGH_MAX_DAYS, MEDIUM_MAX_DAYS};
