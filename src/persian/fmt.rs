//! Formatting of Persian dates.

use super::PersianDate;

/// Persian month names in Farsi script, Farvardin through Esfand.
pub const MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Latin transliterations of the Persian month names, in the commonly
/// accepted spelling.
pub const MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Returns the name of month `m` in Farsi script.
///
/// # Example
///
/// ```
/// use gahshomar::persian::fmt;
///
/// assert_eq!("فروردین", fmt::month_fa(1));
/// ```
///
/// # Panics
///
/// Panics if `m` is not in `1..=12`.
pub fn month_fa(m: i32) -> &'static str {
    match m {
        1..=12 => MONTHS_FA[(m - 1) as usize],
        _ => panic!("month {} not in 1..=12", m),
    }
}

/// Returns the transliterated name of month `m`.
///
/// # Example
///
/// ```
/// use gahshomar::persian::fmt;
///
/// assert_eq!("Esfand", fmt::month(12));
/// ```
///
/// # Panics
///
/// Panics if `m` is not in `1..=12`.
pub fn month(m: i32) -> &'static str {
    match m {
        1..=12 => MONTHS[(m - 1) as usize],
        _ => panic!("month {} not in 1..=12", m),
    }
}

/// Formats a date in the long `day month-name year` form with the Farsi
/// month name.
///
/// # Example
///
/// ```
/// use gahshomar::PersianDate;
/// use gahshomar::persian::fmt;
///
/// let date = PersianDate::new(1403, 1, 1).unwrap();
/// assert_eq!("1 فروردین 1403", fmt::long_date(date));
/// ```
pub fn long_date(date: PersianDate) -> String {
    format!("{} {} {}", date.day(), month_fa(date.month()), date.year())
}
