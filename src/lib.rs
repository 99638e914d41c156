//! Utilities for converting between Gregorian and Persian (Jalali / Solar
//! Hijri) calendar dates.
//!
//! Both directions of the conversion are exact integer arithmetic over a
//! shared epoch day count; Persian leap years use the 33-year cycle
//! approximation with eight leap years per cycle, which holds throughout the
//! supported range (Persian years 1 to 3000).
//!
//! # Examples
//!
//! Gregorian to Persian:
//!
//! ```
//! use gahshomar::{GregorianDate, PersianDate};
//!
//! let date = GregorianDate::new(2024, 3, 20).unwrap();
//! let nowruz = PersianDate::from_gregorian(date);
//!
//! assert_eq!(PersianDate::new(1403, 1, 1), Ok(nowruz));
//! ```
//!
//! And back, with the ISO string form:
//!
//! ```
//! use gahshomar::PersianDate;
//!
//! let date = PersianDate::new(1357, 11, 22).unwrap();
//! assert_eq!("1979-02-11", date.to_gregorian().to_string());
//! ```
//!
//! Leap years and month lengths:
//!
//! ```
//! use gahshomar::{PersianDate, YearType};
//!
//! assert!(YearType::from_persian(1403).is_leap());
//! assert_eq!(Ok(30), PersianDate::days_in_month(1403, 12));
//! assert_eq!(Ok(29), PersianDate::days_in_month(1404, 12));
//! ```
//!
//! # Planned features
//!
//! - Day-of-week support
//! - The astronomically exact Persian leap rule, lifting the year-range
//!   limit of the 33-year approximation

pub mod date;
pub mod persian;

pub use date::{DateError, GregorianDate, YearType};
pub use persian::PersianDate;
