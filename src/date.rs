//! Gregorian civil calendar dates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Reason a date value was rejected.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DateError {
    /// Month outside `1..=12`.
    #[error("month {0} not in 1..=12")]
    InvalidMonth(i32),
    /// Day outside the valid range of the resolved month and year.
    #[error("day {0} does not exist in the given month")]
    InvalidDay(i32),
    /// Year too far from the epoch for the conversion arithmetic to be
    /// trusted against the civil calendars.
    #[error("year {0} outside the supported range")]
    OutOfSupportedRange(i32),
    /// The string form could not be parsed as a date.
    #[error("unparsable date string {0:?}")]
    Parse(String),
}

/// A validated date in the proleptic Gregorian calendar.
///
/// Constructed through [`GregorianDate::new`], which rejects invalid
/// month/day combinations and years outside
/// [`MIN_YEAR`](Self::MIN_YEAR)`..=`[`MAX_YEAR`](Self::MAX_YEAR). The window
/// is chosen so that every constructible date converts to a Persian year the
/// 33-year leap cycle is verified for; see [`crate::persian`].
///
/// Ordering is chronological.
///
/// # Example
///
/// ```
/// use gahshomar::GregorianDate;
///
/// let date = GregorianDate::new(2000, 1, 1).unwrap();
/// assert_eq!("2000-01-01", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GregorianDate {
    year: i32,
    month: i32,
    day: i32,
}

impl GregorianDate {
    /// First year accepted by [`Self::new`].
    pub const MIN_YEAR: i32 = 623;
    /// Last year accepted by [`Self::new`].
    pub const MAX_YEAR: i32 = 3620;

    /// Creates a date from a year, month and day, validating eagerly.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::{DateError, GregorianDate};
    ///
    /// assert!(GregorianDate::new(2024, 2, 29).is_ok());
    /// assert_eq!(
    ///     Err(DateError::InvalidDay(29)),
    ///     GregorianDate::new(2023, 2, 29),
    /// );
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(DateError::OutOfSupportedRange(year));
        }
        let len = Self::days_in_month(year, month)?;
        if !(1..=len).contains(&day) {
            return Err(DateError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// Constructs directly from parts the conversion arithmetic already
    /// guarantees consistent. May sit one year outside the `new` window.
    pub(crate) fn from_ymd_unchecked(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns the number of days in a month, `28..=31`.
    ///
    /// February honours the 4/100/400 leap rule via
    /// [`YearType::from_gregorian`].
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::GregorianDate;
    ///
    /// assert_eq!(Ok(29), GregorianDate::days_in_month(2000, 2));
    /// assert_eq!(Ok(28), GregorianDate::days_in_month(1900, 2));
    /// ```
    pub fn days_in_month(year: i32, month: i32) -> Result<i32, DateError> {
        const LEN: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        match month {
            2 if YearType::from_gregorian(year).is_leap() => Ok(29),
            1..=12 => Ok(LEN[(month - 1) as usize]),
            _ => Err(DateError::InvalidMonth(month)),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Returns the month, `1..=12`.
    pub fn month(&self) -> i32 {
        self.month
    }
    /// Returns the day of month, `1..=31`.
    pub fn day(&self) -> i32 {
        self.day
    }

    /// Returns the [`YearType`] of the year of this date.
    pub fn year_type(&self) -> YearType {
        YearType::from_gregorian(self.year)
    }
}

/// Formats in ISO 8601 style, `YYYY-MM-DD`.
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses the `YYYY-MM-DD` form, with the same validation as
/// [`GregorianDate::new`].
///
/// # Example
///
/// ```
/// use gahshomar::GregorianDate;
///
/// let date: GregorianDate = "1979-02-11".parse().unwrap();
/// assert_eq!(GregorianDate::new(1979, 2, 11), Ok(date));
/// ```
impl FromStr for GregorianDate {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m, d) = split_ymd(s, '-').ok_or_else(|| DateError::Parse(s.to_owned()))?;
        Self::new(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: i32,
            day: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        GregorianDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

/// Splits `s` on `sep` into three integers, `None` unless there are exactly
/// three numeric fields.
pub(crate) fn split_ymd(s: &str, sep: char) -> Option<(i32, i32, i32)> {
    let mut parts = s.split(sep).map(|part| part.parse::<i32>().ok());
    let ymd = (parts.next()??, parts.next()??, parts.next()??);
    match parts.next() {
        None => Some(ymd),
        Some(_) => None,
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in the Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}
