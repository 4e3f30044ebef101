//! # ft-calendars
//!
//! Holiday rules, per-country holiday tables, and the `Country` entry
//! point. Each country module declares a static table of holiday
//! definitions; a definition binds a name and observance metadata to a
//! [`rule::HolidayRule`] that derives the date for any requested year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Austria — regions and holiday table.
pub mod austria;

/// `HolidayCalendar` — a country's holiday and region tables.
pub mod calendar;

/// `Country` — the supported countries.
pub mod country;

/// Germany — regions and holiday table.
pub mod germany;

/// Holiday definitions and the `Holiday` handle.
pub mod holiday;

/// Regions and region sets.
pub mod region;

/// Holiday date rules.
pub mod rule;

pub use calendar::{HolidayCalendar, Holidays};
pub use country::Country;
pub use holiday::{Holiday, HolidayDef};
pub use region::{Region, RegionSet};
pub use rule::HolidayRule;
