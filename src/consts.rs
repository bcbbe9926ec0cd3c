/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month number, in either calendar
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Month number for Esfand, the last Persian month
pub const ESFAND: i32 = 12;

/// Days in Esfand for Persian leap years
pub const ESFAND_DAYS_LEAP: i32 = 30;

/// Days in each Persian month, Farvardin through Esfand (0-indexed).
/// Esfand always shows 29 here; the leap day only ever comes out of the
/// day-number arithmetic.
pub const PERSIAN_DAYS_IN_MONTH: [i32; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Gregorian year at which day-number 0 is anchored
pub(crate) const GREGORIAN_EPOCH_YEAR: i32 = 1600;
/// Persian year containing the anchor
pub(crate) const PERSIAN_EPOCH_YEAR: i32 = 979;
/// Days from 1600-01-01 to 1 Farvardin 979 (1600-03-20)
pub(crate) const EPOCH_OFFSET_DAYS: i32 = 79;

pub(crate) const DAYS_PER_YEAR: i32 = 365;
/// Four years with one leap day
pub(crate) const DAYS_PER_4_YEARS: i32 = 1461;
/// Gregorian century whose first year is not leap
pub(crate) const DAYS_PER_CENTURY: i32 = 36_524;
/// Full Gregorian 400-year cycle
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;

/// Length of the Persian leap sub-cycle in years
pub(crate) const PERSIAN_SUBCYCLE_YEARS: i32 = 33;
/// Leap days in each 33-year sub-cycle
pub(crate) const PERSIAN_SUBCYCLE_LEAP_DAYS: i32 = 8;
/// 33 * 365 + 8
pub(crate) const DAYS_PER_PERSIAN_SUBCYCLE: i32 = 12_053;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
