//! # feiertage
//!
//! Public-holiday date computation for Germany and Austria.
//!
//! Every holiday is derived on demand from a static per-country table:
//! either a fixed calendar date, an offset from the Gauss-computed Easter
//! Sunday, or an offset from another holiday of the same table. Holidays
//! carry their observance scope, so a date can be checked against a
//! specific federal state.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `ft-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use feiertage::calendars::Country;
//!
//! let germany = Country::Germany.calendar();
//! let easter_monday = germany.get("Ostermontag").unwrap();
//! assert_eq!(easter_monday.date(2024).to_string(), "1 April 2024");
//! assert!(easter_monday.is_national());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and primitive aliases.
pub use ft_core as core;

/// Civil date arithmetic and the Easter computation.
pub use ft_time as time;

/// Holiday rules, per-country tables, and the `Country` entry point.
pub use ft_calendars as calendars;
