//! Business-day calendar built from weekends plus a flat list of holiday dates,
//! and the month arithmetic used to scope the counting window.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Holidays in the order they were listed. Duplicates are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    holidays: Vec<NaiveDate>,
}

impl HolidaySet {
    pub fn new(holidays: Vec<NaiveDate>) -> HolidaySet {
        HolidaySet { holidays }
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }

    /// Returns true if the date falls on a Saturday or Sunday
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if the date is listed as a holiday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns true if the specified day is a business day
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Number of business days in `range`, both ends included.
    pub fn count_business_days(&self, range: &DateRange) -> u32 {
        range.days().filter(|day| self.is_business_day(*day)).count() as u32
    }

    /// Validate `start..=end` and count its business days.
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> Result<u32> {
        let range = DateRange::new(start, end)?;
        Ok(self.count_business_days(&range))
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidaySet::new(iter.into_iter().collect())
    }
}

/// Inclusive span of calendar days. `end` never precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every calendar day from `start` to `end` inclusively, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.succ_opt().filter(|next| *next <= end)
        })
    }
}

/// First and last instant of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

impl MonthBounds {
    /// Bounds of the month containing `reference`. The first instant is midnight
    /// of day 1; the last is 23:59:59 of the day before the next month starts.
    pub fn containing(reference: NaiveDateTime) -> Result<MonthBounds> {
        let date = reference.date();
        let first_day = date.with_day(1).ok_or(Error::DateOutOfRange(date))?;
        let last_day = last_day_of_month(date.year(), date.month())
            .and_then(|day| date.with_day(day))
            .ok_or(Error::DateOutOfRange(date))?;
        Ok(MonthBounds {
            first: first_day.and_time(NaiveTime::MIN),
            last: last_day.and_time(end_of_day()),
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last.date()
    }
}

fn first_of_next_month(first_day: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(first_day.year(), first_day.month() + 1, 1)
        .or_else(|| NaiveDate::from_ymd_opt(first_day.year() + 1, 1, 1))
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// Calculate the last day of a given month in a given year
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_next_month(first_day)?.pred_opt().map(|d| d.day())
}
