//! Business-day arithmetic over weekends and holiday calendars.

mod calendar;
pub mod domain;
mod holidays;
mod import;
mod provider;
pub mod router;

pub use calendar::{
    add_business_days, count_business_days, is_business_day, next_business_day,
    BusinessCalendar,
};
pub use domain::{Holiday, HolidayCategory};
pub use holidays::{
    build_court_recess_holidays, build_fixed_national_holidays, build_movable_holidays,
    easter_sunday,
};
pub use import::{HolidayImportError, RegionalHolidayImporter};
pub use provider::{CalendarProvider, CalendarSettings};
pub use router::deadline_router;
