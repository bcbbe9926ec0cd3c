use crate::consts::{
    DAYS_PER_YEAR, ESFAND, ESFAND_DAYS_LEAP, MAX_MONTH, PERSIAN_DAYS_IN_MONTH, PERSIAN_EPOCH_YEAR,
    PERSIAN_SUBCYCLE_LEAP_DAYS, PERSIAN_SUBCYCLE_YEARS,
};
use crate::convert::ConvertError;
use crate::prelude::*;
use crate::{GregorianDate, ParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date in the Persian (Jalali) solar calendar.
///
/// Plain value with no validation on construction: out-of-range fields are
/// carried as-is and simply convert to the wrong Gregorian day. Use
/// [`PersianDate::try_new`] when the input comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct PersianDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl PersianDate {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date only if it names a real day of the Persian calendar.
    ///
    /// # Errors
    /// `InvalidYear` for years below 1, `InvalidMonth` outside 1..=12 and
    /// `InvalidDay` for days past the end of the month (Esfand 30 only in leap years).
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        if year < 1 {
            return Err(ParseError::InvalidYear(year.into()));
        }
        if !(1..=i32::from(MAX_MONTH)).contains(&month) {
            return Err(ParseError::InvalidMonth(month.into()));
        }
        if !(1..=days_in_month(year, month)).contains(&day) {
            return Err(ParseError::InvalidDay {
                year: year.into(),
                month: month.into(),
                day: day.into(),
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn is_valid(&self) -> bool {
        Self::try_new(self.year, self.month, self.day).is_ok()
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month, or 0 if the month is not 1..=12.
    pub const fn days_in_month(&self) -> i32 {
        days_in_month(self.year, self.month)
    }

    /// Converts to the Gregorian calendar without validating this date first.
    ///
    /// # Errors
    /// Fails only if the computed day cannot be represented as a [`GregorianDate`].
    pub fn to_gregorian(self) -> Result<GregorianDate, ConvertError> {
        crate::convert::to_gregorian(self.year, self.month, self.day)
    }
}

impl From<(i32, i32, i32)> for PersianDate {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<PersianDate> for (i32, i32, i32) {
    fn from(date: PersianDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl FromStr for PersianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` and rejects days that do not exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = crate::parse_ymd(s)?;
        let narrow = |v: i64| i32::try_from(v).map_err(|_| ParseError::InvalidFormat(s.to_owned()));
        Self::try_new(narrow(year)?, narrow(month)?, narrow(day)?)
    }
}

impl Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day-number of 1 Farvardin of `year`, counted from 1 Farvardin 979.
///
/// Eight leap days per 33-year sub-cycle, falling on every fourth year of the
/// sub-cycle except the 33rd.
pub(crate) const fn year_start_day_number(year: i64) -> i64 {
    let jy = year - PERSIAN_EPOCH_YEAR as i64;
    let cycle = PERSIAN_SUBCYCLE_YEARS as i64;
    DAYS_PER_YEAR as i64 * jy
        + (jy / cycle) * PERSIAN_SUBCYCLE_LEAP_DAYS as i64
        + (jy % cycle + 3) / 4
}

/// Whether Esfand of `year` has 30 days.
pub const fn is_leap_year(year: i32) -> bool {
    let year = year as i64;
    year_start_day_number(year + 1) - year_start_day_number(year) == DAYS_PER_YEAR as i64 + 1
}

/// Number of days in a Persian month, or 0 if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        ESFAND if is_leap_year(year) => ESFAND_DAYS_LEAP,
        1..=ESFAND => PERSIAN_DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_anything() {
        let odd = PersianDate::new(1400, 14, 40);
        assert_eq!((odd.year, odd.month, odd.day), (1400, 14, 40));
        assert!(!odd.is_valid());
    }

    #[test]
    fn test_try_new() {
        assert!(PersianDate::try_new(1404, 7, 26).is_ok());
        assert!(PersianDate::try_new(1399, 12, 30).is_ok());
        assert!(matches!(
            PersianDate::try_new(1400, 12, 30),
            Err(ParseError::InvalidDay {
                year: 1400,
                month: 12,
                day: 30
            })
        ));
        assert!(matches!(
            PersianDate::try_new(1400, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            PersianDate::try_new(1400, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            PersianDate::try_new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(PersianDate::try_new(1400, 7, 31).is_err());
        assert!(PersianDate::try_new(1400, 6, 31).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(PersianDate::new(1404, 7, 26).to_string(), "1404-07-26");
        assert_eq!(PersianDate::new(979, 1, 1).to_string(), "0979-01-01");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "1399-12-30".parse::<PersianDate>().unwrap(),
            PersianDate::new(1399, 12, 30)
        );
        assert!(matches!(
            "1400-12-30".parse::<PersianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            "1400-01".parse::<PersianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "99999999999-01-01".parse::<PersianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let a = PersianDate::new(1399, 12, 30);
        let b = PersianDate::new(1400, 1, 1);
        let c = PersianDate::new(1400, 1, 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_tuple_conversions() {
        let date: PersianDate = (1377, 11, 22).into();
        assert_eq!(date, PersianDate::new(1377, 11, 22));
        let parts: (i32, i32, i32) = date.into();
        assert_eq!(parts, (1377, 11, 22));
    }

    #[test]
    fn test_serde() {
        let date = PersianDate::new(1404, 7, 26);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1404-07-26""#);
        let parsed: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<PersianDate, _> = serde_json::from_str(r#""1404-07-31""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_leap_years() {
        let leap: Vec<i32> = (1390..1410).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leap, vec![1391, 1395, 1399, 1403, 1408]);
        assert!(PersianDate::new(1399, 1, 1).is_leap_year());
        assert!(!PersianDate::new(1400, 1, 1).is_leap_year());
    }

    #[test]
    fn test_leap_years_per_subcycle() {
        for start in [979, 1375, 1408, 2002] {
            let count = (start..start + 33).filter(|&y| is_leap_year(y)).count();
            assert_eq!(count, 8, "33 years from {start}");
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in 1..=6 {
            assert_eq!(days_in_month(1400, month), 31);
        }
        for month in 7..=11 {
            assert_eq!(days_in_month(1400, month), 30);
        }
        assert_eq!(days_in_month(1400, 12), 29);
        assert_eq!(days_in_month(1399, 12), 30);
        assert_eq!(days_in_month(1400, 0), 0);
        assert_eq!(days_in_month(1400, 13), 0);
        assert_eq!(PersianDate::new(1403, 12, 1).days_in_month(), 30);
    }

    #[test]
    fn test_year_lengths_sum() {
        let total: i64 = (1375..1408)
            .map(|y| if is_leap_year(y) { 366 } else { 365 })
            .sum();
        assert_eq!(total, 12_053);
        assert_eq!(
            year_start_day_number(1408) - year_start_day_number(1375),
            12_053
        );
    }
}
