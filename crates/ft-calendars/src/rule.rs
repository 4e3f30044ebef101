//! Holiday date rules.
//!
//! Every holiday derives its date for a year from one of four rule kinds,
//! resolved by a single dispatcher. Evaluation is total: any `i32` year
//! yields a date, with no validation of historical plausibility.

use crate::holiday::HolidayDef;
use ft_core::Year;
use ft_time::{easter, Date, Month};

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// A fixed number of days away from Easter Sunday. Negative offsets
    /// fall before Easter (Good Friday is `EasterOffset(-2)`).
    EasterOffset(i64),
    /// A fixed number of days away from an earlier entry in the same
    /// table. `base` is the entry's index and must be strictly smaller
    /// than the index of the entry carrying this rule.
    Chained {
        /// Index of the entry this rule depends on.
        base: usize,
        /// Day offset applied to the base entry's date.
        offset: i64,
    },
    /// An arbitrary year-to-date function, for the rare rule the
    /// declarative kinds cannot express.
    Computed(fn(Year) -> Date),
}

impl HolidayRule {
    /// Resolve the rule against its owning table for the given year.
    ///
    /// Chained rules recurse into earlier entries; table validation
    /// guarantees the recursion points strictly backwards and therefore
    /// terminates.
    pub(crate) fn evaluate(&self, table: &[HolidayDef], year: Year) -> Date {
        match *self {
            HolidayRule::Fixed { month, day } => Date::from_ymd(year, month, day),
            HolidayRule::EasterOffset(days) => easter::easter_sunday(year).add_days(days),
            HolidayRule::Chained { base, offset } => {
                table[base].rule().evaluate(table, year).add_days(offset)
            }
            HolidayRule::Computed(derive) => derive(year),
        }
    }
}
