use chrono::NaiveDate;

/// Errors raised while loading holidays or counting business days.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The embedded holiday document is empty.
    #[error("holiday document is missing or empty")]
    ConfigMissing,
    /// The holiday document is not a `{"holidays": [...]}` object of strings.
    #[error("malformed holiday document: {0}")]
    MalformedDocument(String),
    /// A holiday entry is not a `YYYY-MM-DD` calendar date.
    #[error("holiday entry {0:?} is not a valid YYYY-MM-DD date")]
    InvalidHolidayDate(String),
    /// The end of a date range lies before its start.
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// Month arithmetic left the range chrono can represent.
    #[error("month containing {0} is outside the supported date range")]
    DateOutOfRange(NaiveDate),
}

impl Error {
    /// Returns true for failures caused by the content of the holiday document
    pub fn is_config_parse(&self) -> bool {
        matches!(
            self,
            Error::MalformedDocument(_) | Error::InvalidHolidayDate(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
