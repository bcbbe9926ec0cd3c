//! Conversion between the Gregorian and Persian (Jalali) calendars.
//!
//! ```
//! use persian_date::{GregorianDate, PersianDate, to_gregorian, to_persian};
//!
//! let nowruz = GregorianDate::from_ymd(2021, 3, 21).unwrap();
//! assert_eq!(to_persian(nowruz), PersianDate::new(1400, 1, 1));
//! assert_eq!(to_gregorian(1399, 12, 30).unwrap().to_string(), "2021-03-20");
//! ```
//!
//! Results are calibrated from 1600-03-20 (1 Farvardin 979) onward.

mod consts;
mod convert;
mod gregorian;
mod persian;
mod prelude;

pub use consts::*;
pub use convert::{ConvertError, to_gregorian, to_gregorian_checked, to_persian};
pub use gregorian::{Day, GregorianDate, Month, Year};
pub use persian::PersianDate;

/// Gregorian calendar rules.
pub mod gregorian_calendar {
    pub use crate::gregorian::{days_in_month, is_leap_year};
}

/// Persian calendar rules, as implied by the conversion arithmetic.
pub mod persian_calendar {
    pub use crate::persian::{days_in_month, is_leap_year};
}

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: i64, day: i64 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Splits `YYYY-MM-DD` into its numeric parts without range checks.
pub(crate) fn parse_ymd(s: &str) -> Result<(i64, i64, i64), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s): {trimmed}",
            parts.len()
        )));
    };

    let number = |p: &str| {
        p.parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(p.to_owned()))
    };
    Ok((number(*year)?, number(*month)?, number(*day)?))
}
