//! Business-day progress through the current calendar month.
//!
//! Weekends and a bundled list of holidays are skipped; everything else is a
//! business day. [`month_progress`] ties the pieces together for a given
//! reference instant.

pub mod calendar;
mod error;
pub mod holidays;
pub mod report;

use chrono::NaiveDateTime;

pub use calendar::{DateRange, HolidaySet, MonthBounds};
pub use error::{Error, Result};
pub use report::Report;

/// Count the business days of the month containing `reference`, both up to and
/// including the reference day and for the whole month.
pub fn month_progress(reference: NaiveDateTime, holidays: &HolidaySet) -> Result<Report> {
    let bounds = MonthBounds::containing(reference)?;
    let start = bounds.first_day();
    let passed = holidays.business_days_between(start, reference.date())?;
    let total = holidays.business_days_between(start, bounds.last_day())?;
    Ok(Report::new(passed, total))
}
