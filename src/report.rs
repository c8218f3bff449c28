use std::fmt;

/// Working hours assumed for each business day.
pub const HOURS_PER_BUSINESS_DAY: u32 = 8;

/// Progress through the business days of one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Business days from the 1st up to and including today; also today's index.
    pub days_elapsed: u32,
    pub days_total: u32,
    pub days_remaining: u32,
    pub remaining_hours: u32,
    /// Share of the month's business days already elapsed. 0.0 for a month
    /// without business days.
    pub percent_elapsed: f64,
}

impl Report {
    pub fn new(days_elapsed: u32, days_total: u32) -> Report {
        let days_remaining = days_total.saturating_sub(days_elapsed);
        let percent_elapsed = if days_total == 0 {
            0.0
        } else {
            f64::from(days_elapsed) / f64::from(days_total) * 100.0
        };
        Report {
            days_elapsed,
            days_total,
            days_remaining,
            remaining_hours: days_remaining * HOURS_PER_BUSINESS_DAY,
            percent_elapsed,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Today is business day {} of this month", self.days_elapsed)?;
        writeln!(f, "Business days left this month: {}", self.days_remaining)?;
        writeln!(
            f,
            "Expected working hours left this month: {}",
            self.remaining_hours
        )?;
        writeln!(
            f,
            "{:.1} % of this month's business days have passed",
            self.percent_elapsed
        )
    }
}
