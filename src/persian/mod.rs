//! Persian (Jalali / Solar Hijri) calendar.
//!
//! The year starts near the March equinox; months 1–6 have 31 days, months
//! 7–11 have 30, and month 12 (Esfand) has 29, or 30 in a leap year.
//!
//! Leap years follow the 33-year cycle approximation with eight leap years
//! per cycle. This agrees with the astronomical calendar throughout the
//! supported range ([`PersianDate::MIN_YEAR`]`..=`[`PersianDate::MAX_YEAR`])
//! but is known to diverge from it eventually; results near the edges of the
//! range should be treated as unverified.
//!
//! # Examples
//!
//! ```
//! use gahshomar::{GregorianDate, PersianDate};
//!
//! let date = GregorianDate::new(1979, 2, 11).unwrap();
//! let persian = PersianDate::from_gregorian(date);
//!
//! assert_eq!(PersianDate::new(1357, 11, 22), Ok(persian));
//! assert_eq!(date, persian.to_gregorian());
//! ```

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::{DateError, GregorianDate, YearType, split_ymd};

pub mod fmt;

/// Leap-year break-points within the 33-year cycle.
const LEAP_BREAKS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Cumulative days before the start of each Gregorian month, non-leap basis.
const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

impl YearType {
    /// Determines if `year` is a leap year in the Persian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::YearType;
    ///
    /// assert!(YearType::from_persian(1403).is_leap());
    /// assert!(!YearType::from_persian(1404).is_leap());
    /// ```
    pub fn from_persian(year: i32) -> Self {
        if LEAP_BREAKS.contains(&year.rem_euclid(33)) {
            Self::Leap
        } else {
            Self::Common
        }
    }
}

/// A validated date in the Persian calendar.
///
/// Constructed through [`PersianDate::new`] or by converting a
/// [`GregorianDate`]. Ordering is chronological.
///
/// # Example
///
/// ```
/// use gahshomar::PersianDate;
///
/// let nowruz = PersianDate::new(1403, 1, 1).unwrap();
/// assert_eq!("2024-03-20", nowruz.to_gregorian().to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PersianDate {
    year: i32,
    month: i32,
    day: i32,
}

impl PersianDate {
    /// First year accepted by [`Self::new`].
    pub const MIN_YEAR: i32 = 1;
    /// Last year accepted by [`Self::new`].
    pub const MAX_YEAR: i32 = 3000;

    /// Creates a date from a year, month and day, validating eagerly.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::{DateError, PersianDate};
    ///
    /// assert!(PersianDate::new(1403, 12, 30).is_ok()); // leap year
    /// assert_eq!(
    ///     Err(DateError::InvalidDay(30)),
    ///     PersianDate::new(1404, 12, 30),
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

    /// Returns the number of days in a month, `29..=31`.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::PersianDate;
    ///
    /// assert_eq!(Ok(31), PersianDate::days_in_month(1403, 1));
    /// assert_eq!(Ok(30), PersianDate::days_in_month(1403, 12));
    /// assert_eq!(Ok(29), PersianDate::days_in_month(1404, 12));
    /// ```
    pub fn days_in_month(year: i32, month: i32) -> Result<i32, DateError> {
        match month {
            1..=6 => Ok(31),
            7..=11 => Ok(30),
            12 if YearType::from_persian(year).is_leap() => Ok(30),
            12 => Ok(29),
            _ => Err(DateError::InvalidMonth(month)),
        }
    }

    /// Converts a Gregorian date to the Persian calendar.
    ///
    /// Counts days elapsed since the Persian epoch, then decomposes the
    /// count into 33-year cycles (12053 days), 4-year sub-cycles (1461
    /// days) and single years. True floor division throughout; the year
    /// arithmetic goes through negative intermediates near the epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::{GregorianDate, PersianDate};
    ///
    /// let date = GregorianDate::new(2024, 3, 20).unwrap();
    /// let nowruz = PersianDate::from_gregorian(date);
    /// assert_eq!(PersianDate::new(1403, 1, 1), Ok(nowruz));
    /// ```
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let (gy, gm, gd) = (date.year(), date.month(), date.day());
        // February's leap day only enters the count once February has passed.
        let ly = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666
            + 365 * gy
            + (ly + 3).div_euclid(4)
            - (ly + 99).div_euclid(100)
            + (ly + 399).div_euclid(400)
            + gd
            + GREGORIAN_DAYS_BEFORE_MONTH[(gm - 1) as usize];
        let mut year = -1595 + 33 * days.div_euclid(12_053);
        days = days.rem_euclid(12_053);
        year += 4 * days.div_euclid(1461);
        days = days.rem_euclid(1461);
        if days > 365 {
            year += (days - 1).div_euclid(365);
            days = (days - 1).rem_euclid(365);
        }
        // `days` is now the 0-based day of the Persian year.
        let (month, day) = if days < 186 {
            (1 + days.div_euclid(31), 1 + days.rem_euclid(31))
        } else {
            (7 + (days - 186).div_euclid(30), 1 + (days - 186).rem_euclid(30))
        };
        Self { year, month, day }
    }

    /// Converts this date to the Gregorian calendar, inverting
    /// [`Self::from_gregorian`].
    ///
    /// Runs the same epoch day count forward and decomposes it into the
    /// 400-year (146097 days), 100-year (36524 days) and 4-year (1461 days)
    /// Gregorian cycles.
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::PersianDate;
    ///
    /// let date = PersianDate::new(1357, 11, 22).unwrap();
    /// assert_eq!("1979-02-11", date.to_gregorian().to_string());
    /// ```
    pub fn to_gregorian(&self) -> GregorianDate {
        let jy = self.year + 1595;
        let mut days = -355_668
            + 365 * jy
            + jy.div_euclid(33) * 8
            + (jy.rem_euclid(33) + 3).div_euclid(4)
            + self.day
            + if self.month < 7 {
                (self.month - 1) * 31
            } else {
                (self.month - 7) * 30 + 186
            };
        let mut gy = 400 * days.div_euclid(146_097);
        days = days.rem_euclid(146_097);
        if days > 36_524 {
            days -= 1;
            gy += 100 * days.div_euclid(36_524);
            days = days.rem_euclid(36_524);
            // Centuries not divisible by 400 are not leap; restore the
            // skipped leap day.
            if days >= 365 {
                days += 1;
            }
        }
        gy += 4 * days.div_euclid(1461);
        days = days.rem_euclid(1461);
        if days > 365 {
            gy += (days - 1).div_euclid(365);
            days = (days - 1).rem_euclid(365);
        }
        let mut day = days + 1;
        let feb = if YearType::from_gregorian(gy).is_leap() {
            29
        } else {
            28
        };
        let lengths = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut month = 0;
        while month < 11 && day > lengths[month] {
            day -= lengths[month];
            month += 1;
        }
        GregorianDate::from_ymd_unchecked(gy, month as i32 + 1, day)
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
    ///
    /// # Example
    ///
    /// ```
    /// use gahshomar::PersianDate;
    ///
    /// assert!(PersianDate::new(1403, 1, 1).unwrap().year_type().is_leap());
    /// ```
    pub fn year_type(&self) -> YearType {
        YearType::from_persian(self.year)
    }
}

/// Formats as `YYYY/MM/DD`, the customary slash-separated Persian form.
impl std::fmt::Display for PersianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Parses the `YYYY/MM/DD` form, with the same validation as
/// [`PersianDate::new`].
///
/// # Example
///
/// ```
/// use gahshomar::PersianDate;
///
/// let date: PersianDate = "1403/01/01".parse().unwrap();
/// assert_eq!(PersianDate::new(1403, 1, 1), Ok(date));
/// ```
impl FromStr for PersianDate {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m, d) = split_ymd(s, '/').ok_or_else(|| DateError::Parse(s.to_owned()))?;
        Self::new(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PersianDate {
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
        PersianDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Julian day number, used as an independent oracle for continuity
    /// checks.
    fn jdn(date: GregorianDate) -> i32 {
        let (y, m, d) = (date.year(), date.month(), date.day());
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    #[test]
    fn leap_years() {
        for (year, leap) in [
            (1399, true),
            (1402, false),
            (1403, true),
            (1404, false),
            (1407, false),
            (1408, true),
        ] {
            assert_eq!(leap, YearType::from_persian(year).is_leap(), "{year}");
        }
        // 8 leap years per 33-year cycle
        let leaps = (1398..1398 + 33)
            .filter(|&y| YearType::from_persian(y).is_leap())
            .count();
        assert_eq!(8, leaps);
    }

    #[test]
    fn month_lengths() {
        for year in [1, 1357, 1403, 1404, 3000] {
            for month in 1..=6 {
                assert_eq!(Ok(31), PersianDate::days_in_month(year, month));
            }
            for month in 7..=11 {
                assert_eq!(Ok(30), PersianDate::days_in_month(year, month));
            }
        }
        assert_eq!(Ok(30), PersianDate::days_in_month(1403, 12));
        assert_eq!(Ok(29), PersianDate::days_in_month(1404, 12));
        for month in [0, 13, -5] {
            assert_eq!(
                Err(DateError::InvalidMonth(month)),
                PersianDate::days_in_month(1403, month),
            );
        }
    }

    #[test]
    fn validation() {
        assert!(PersianDate::new(1403, 12, 30).is_ok());
        assert_eq!(
            Err(DateError::InvalidDay(30)),
            PersianDate::new(1404, 12, 30),
        );
        assert_eq!(Err(DateError::InvalidDay(32)), PersianDate::new(1403, 1, 32));
        assert_eq!(Err(DateError::InvalidDay(31)), PersianDate::new(1403, 7, 31));
        assert_eq!(
            Err(DateError::InvalidMonth(0)),
            PersianDate::new(1403, 0, 1),
        );
        assert_eq!(
            Err(DateError::OutOfSupportedRange(0)),
            PersianDate::new(0, 1, 1),
        );
        assert_eq!(
            Err(DateError::OutOfSupportedRange(3001)),
            PersianDate::new(3001, 1, 1),
        );
    }

    #[test]
    fn known_dates() {
        let dataset = [
            ((1970, 1, 1), (1348, 10, 11)),
            ((1979, 2, 11), (1357, 11, 22)),
            ((2021, 3, 21), (1400, 1, 1)),
            ((2024, 3, 20), (1403, 1, 1)),
            ((2025, 3, 20), (1403, 12, 30)),
            ((2025, 3, 21), (1404, 1, 1)),
            ((2024, 9, 22), (1403, 7, 1)),
            ((2024, 12, 31), (1403, 10, 11)),
        ];
        for ((gy, gm, gd), (jy, jm, jd)) in dataset {
            let gregorian = GregorianDate::new(gy, gm, gd).unwrap();
            let persian = PersianDate::new(jy, jm, jd).unwrap();
            assert_eq!(persian, PersianDate::from_gregorian(gregorian), "{gregorian}");
            assert_eq!(gregorian, persian.to_gregorian(), "{persian}");
        }
    }

    #[test]
    fn gregorian_century_boundaries() {
        // 1900 (not leap), 2000 (leap) and 2024 (leap) around the end of
        // February: conversion must stay one day per day.
        for year in [1900, 2000, 2024] {
            let feb_len = GregorianDate::days_in_month(year, 2).unwrap();
            let mut dates = vec![
                GregorianDate::new(year, 2, 27).unwrap(),
                GregorianDate::new(year, 2, 28).unwrap(),
            ];
            if feb_len == 29 {
                dates.push(GregorianDate::new(year, 2, 29).unwrap());
            }
            dates.push(GregorianDate::new(year, 3, 1).unwrap());
            for pair in dates.windows(2) {
                let a = PersianDate::from_gregorian(pair[0]);
                let b = PersianDate::from_gregorian(pair[1]);
                assert_eq!(
                    jdn(a.to_gregorian()) + 1,
                    jdn(b.to_gregorian()),
                    "{} -> {}",
                    pair[0],
                    pair[1],
                );
                assert_eq!(pair[0], a.to_gregorian());
                assert_eq!(pair[1], b.to_gregorian());
            }
        }
    }

    #[test]
    fn round_trip_persian() {
        for year in 1300..=1500 {
            for month in 1..=12 {
                for day in 1..=PersianDate::days_in_month(year, month).unwrap() {
                    let date = PersianDate::new(year, month, day).unwrap();
                    let back = PersianDate::from_gregorian(date.to_gregorian());
                    assert_eq!(date, back);
                }
            }
        }
    }

    #[test]
    fn round_trip_gregorian() {
        for year in 1921..=2121 {
            for month in 1..=12 {
                for day in 1..=GregorianDate::days_in_month(year, month).unwrap() {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    let persian = PersianDate::from_gregorian(date);
                    // the conversion output must itself be a valid date
                    assert_eq!(
                        Ok(persian),
                        PersianDate::new(persian.year(), persian.month(), persian.day()),
                    );
                    assert_eq!(date, persian.to_gregorian());
                }
            }
        }
    }

    #[test]
    fn monotonic_over_year_boundary() {
        // walking the Persian calendar day by day advances the Gregorian
        // date by exactly one day, including across Esfand 29/30 endings
        let mut prev: Option<i32> = None;
        for year in 1402..=1405 {
            for month in 1..=12 {
                for day in 1..=PersianDate::days_in_month(year, month).unwrap() {
                    let date = PersianDate::new(year, month, day).unwrap();
                    let num = jdn(date.to_gregorian());
                    if let Some(prev) = prev {
                        assert_eq!(prev + 1, num, "{date}");
                    }
                    prev = Some(num);
                }
            }
        }
    }

    #[test]
    fn epoch_edges() {
        // first supported Persian day
        let first = PersianDate::new(1, 1, 1).unwrap();
        assert_eq!("0622-03-21", first.to_gregorian().to_string());
        assert_eq!(first, PersianDate::from_gregorian(first.to_gregorian()));

        // last supported Persian day (year 3000 is a leap year)
        let last = PersianDate::new(3000, 12, 30).unwrap();
        assert_eq!(last, PersianDate::from_gregorian(last.to_gregorian()));

        // extremes of the Gregorian constructor window stay in range
        for (y, m, d) in [(623, 1, 1), (3620, 12, 31)] {
            let persian = PersianDate::from_gregorian(GregorianDate::new(y, m, d).unwrap());
            assert!(
                (PersianDate::MIN_YEAR..=PersianDate::MAX_YEAR).contains(&persian.year()),
                "{persian}"
            );
        }
    }

    #[test]
    fn slash_format() {
        let date = PersianDate::new(1403, 1, 1).unwrap();
        assert_eq!("1403/01/01", date.to_string());
        assert_eq!(Ok(date), "1403/01/01".parse());
        assert_eq!(
            Err(DateError::InvalidDay(30)),
            "1404/12/30".parse::<PersianDate>(),
        );
        for s in ["1403-01-01", "1403/01", "nowruz"] {
            assert_eq!(
                Err(DateError::Parse(s.to_owned())),
                s.parse::<PersianDate>(),
                "{s:?}"
            );
        }
    }
}
