//! Day-number based conversion between the Gregorian and Persian calendars.
//!
//! Both directions go through a day-number counted from 1 Farvardin 979
//! (1600-03-20 Gregorian). Day-number 0 is the first calibrated day; earlier
//! dates still produce a value but it is not meaningful.

use crate::consts::{
    DAYS_IN_MONTH, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_CENTURY,
    DAYS_PER_PERSIAN_SUBCYCLE, DAYS_PER_YEAR, DECEMBER, EPOCH_OFFSET_DAYS, FEBRUARY,
    GREGORIAN_EPOCH_YEAR, JANUARY, PERSIAN_DAYS_IN_MONTH, PERSIAN_EPOCH_YEAR,
    PERSIAN_SUBCYCLE_YEARS,
};
use crate::persian::year_start_day_number;
use crate::{GregorianDate, ParseError, PersianDate};

/// Error type for calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The Persian date was rejected before conversion.
    #[error("Invalid Persian date: {0}")]
    InvalidPersianDate(#[source] ParseError),

    /// The arithmetic landed on a day the Gregorian date type cannot hold.
    #[error("Persian date {date} has no representable Gregorian date: {source}")]
    Unrepresentable { date: PersianDate, source: ParseError },
}

/// Converts a Gregorian date to the Persian calendar.
///
/// Never fails. Dates before 1600-03-20 come out with a non-positive or
/// otherwise meaningless day.
pub fn to_persian(date: GregorianDate) -> PersianDate {
    let year = i32::from(date.year());
    let gy = year - GREGORIAN_EPOCH_YEAR;
    let gm = usize::from(date.month());
    let gd = i32::from(date.day()) - 1;

    let mut day_no = DAYS_PER_YEAR * gy + (gy + 3) / 4 - (gy + 99) / 100 + (gy + 399) / 400;
    day_no += DAYS_IN_MONTH[usize::from(JANUARY)..gm]
        .iter()
        .map(|&d| i32::from(d))
        .sum::<i32>();
    if gm > usize::from(FEBRUARY) && date.year_typed().is_leap() {
        day_no += 1;
    }
    day_no += gd;

    let mut j_day_no = day_no - EPOCH_OFFSET_DAYS;

    let subcycles = j_day_no / DAYS_PER_PERSIAN_SUBCYCLE;
    j_day_no %= DAYS_PER_PERSIAN_SUBCYCLE;

    let mut jy = PERSIAN_EPOCH_YEAR
        + PERSIAN_SUBCYCLE_YEARS * subcycles
        + 4 * (j_day_no / DAYS_PER_4_YEARS);
    j_day_no %= DAYS_PER_4_YEARS;

    // first year of each four-year block is the 366-day one
    if j_day_no > DAYS_PER_YEAR {
        jy += (j_day_no - 1) / DAYS_PER_YEAR;
        j_day_no = (j_day_no - 1) % DAYS_PER_YEAR;
    }

    let mut month = 1;
    for &len in &PERSIAN_DAYS_IN_MONTH[..PERSIAN_DAYS_IN_MONTH.len() - 1] {
        if j_day_no < len {
            break;
        }
        j_day_no -= len;
        month += 1;
    }

    PersianDate::new(jy, month, j_day_no + 1)
}

/// Converts a Persian date to the Gregorian calendar.
///
/// No validation is done on the input: a month past 12 counts the whole year,
/// a day past the end of its month spills into the following ones.
///
/// # Errors
/// Returns `ConvertError::Unrepresentable` when the result falls outside
/// years 1..=9999 or before the start of a month, which only happens for
/// inputs far from the calibrated range.
pub fn to_gregorian(year: i32, month: i32, day: i32) -> Result<GregorianDate, ConvertError> {
    let jm = usize::try_from(i64::from(month) - 1).unwrap_or(0);
    let jd = i64::from(day) - 1;

    let mut j_day_no = year_start_day_number(year.into());
    j_day_no += PERSIAN_DAYS_IN_MONTH
        .iter()
        .take(jm)
        .map(|&d| i64::from(d))
        .sum::<i64>();
    j_day_no += jd;

    let mut day_no = j_day_no + i64::from(EPOCH_OFFSET_DAYS);

    let mut gy = i64::from(GREGORIAN_EPOCH_YEAR) + 400 * (day_no / i64::from(DAYS_PER_400_YEARS));
    day_no %= i64::from(DAYS_PER_400_YEARS);

    let century = i64::from(DAYS_PER_CENTURY);
    let mut leap = true;
    if day_no > century {
        day_no -= 1;
        gy += 100 * (day_no / century);
        day_no %= century;
        // first year of a non-400 century is common
        if day_no >= i64::from(DAYS_PER_YEAR) {
            day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (day_no / i64::from(DAYS_PER_4_YEARS));
    day_no %= i64::from(DAYS_PER_4_YEARS);

    if day_no > i64::from(DAYS_PER_YEAR) {
        leap = false;
        day_no -= 1;
        gy += day_no / i64::from(DAYS_PER_YEAR);
        day_no %= i64::from(DAYS_PER_YEAR);
    }

    let mut gm = i64::from(JANUARY);
    for m in JANUARY..=DECEMBER {
        let len = i64::from(DAYS_IN_MONTH[usize::from(m)]) + i64::from(m == FEBRUARY && leap);
        if day_no < len {
            break;
        }
        day_no -= len;
        gm += 1;
    }

    GregorianDate::from_wide(gy, gm, day_no + 1).map_err(|source| ConvertError::Unrepresentable {
        date: PersianDate::new(year, month, day),
        source,
    })
}

/// Converts a Persian date to the Gregorian calendar after checking that it
/// names a real day.
///
/// # Errors
/// `ConvertError::InvalidPersianDate` if the month or day is out of range,
/// otherwise the same as [`to_gregorian`].
pub fn to_gregorian_checked(date: PersianDate) -> Result<GregorianDate, ConvertError> {
    let date = PersianDate::try_new(date.year, date.month, date.day)
        .map_err(ConvertError::InvalidPersianDate)?;
    to_gregorian(date.year, date.month, date.day)
}

impl From<GregorianDate> for PersianDate {
    fn from(date: GregorianDate) -> Self {
        to_persian(date)
    }
}

impl TryFrom<PersianDate> for GregorianDate {
    type Error = ConvertError;

    fn try_from(date: PersianDate) -> Result<Self, Self::Error> {
        to_gregorian_checked(date)
    }
}
