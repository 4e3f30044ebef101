//! # ft-time
//!
//! Civil date arithmetic and the Easter anchor computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Date` type.
pub mod date;

/// Gauss Easter computation.
pub mod easter;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day-of-week enum.
pub mod weekday;

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
