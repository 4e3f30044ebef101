//! Holiday definitions and the `Holiday` handle.

use crate::calendar::HolidayCalendar;
use crate::region::{Region, RegionSet};
use crate::rule::HolidayRule;
use ft_core::Year;
use ft_time::{Date, Month};

/// One row of a country's holiday table: a named date rule plus
/// observance metadata.
///
/// For a national holiday the `national` flag alone is authoritative; the
/// declared region set is descriptive and may list all, some, or none of
/// the country's regions without changing where the holiday applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDef {
    name: &'static str,
    rule: HolidayRule,
    national: bool,
    regions: RegionSet,
}

impl HolidayDef {
    /// A holiday on the same month and day every year.
    pub const fn fixed(
        name: &'static str,
        month: Month,
        day: u8,
        national: bool,
        regions: RegionSet,
    ) -> Self {
        HolidayDef {
            name,
            rule: HolidayRule::Fixed { month, day },
            national,
            regions,
        }
    }

    /// A holiday a fixed number of days away from Easter Sunday.
    pub const fn easter_offset(
        name: &'static str,
        days: i64,
        national: bool,
        regions: RegionSet,
    ) -> Self {
        HolidayDef {
            name,
            rule: HolidayRule::EasterOffset(days),
            national,
            regions,
        }
    }

    /// A holiday a fixed number of days away from an earlier entry in the
    /// same table.
    pub const fn chained(
        name: &'static str,
        base: usize,
        offset: i64,
        national: bool,
        regions: RegionSet,
    ) -> Self {
        HolidayDef {
            name,
            rule: HolidayRule::Chained { base, offset },
            national,
            regions,
        }
    }

    /// A holiday derived by an arbitrary year-to-date function.
    pub const fn computed(
        name: &'static str,
        derive: fn(Year) -> Date,
        national: bool,
        regions: RegionSet,
    ) -> Self {
        HolidayDef {
            name,
            rule: HolidayRule::Computed(derive),
            national,
            regions,
        }
    }

    /// The holiday's name, unique within its table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The date rule.
    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    /// Whether the holiday is observed in every region of its country.
    pub fn is_national(&self) -> bool {
        self.national
    }

    /// The declared region set.
    pub fn regions(&self) -> RegionSet {
        self.regions
    }
}

/// A holiday of one country's calendar.
///
/// A cheap copyable handle: the table row plus the calendar it belongs
/// to, so chained rules can resolve their base entries.
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    pub(crate) calendar: &'static HolidayCalendar,
    pub(crate) index: usize,
}

impl Holiday {
    fn def(&self) -> &'static HolidayDef {
        &self.calendar.entries()[self.index]
    }

    /// The holiday's name, unique within its country.
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// Compute the holiday's date for the given year.
    pub fn date(&self, year: Year) -> Date {
        self.def().rule().evaluate(self.calendar.entries(), year)
    }

    /// Return `true` if the holiday is observed in every region of its
    /// country.
    pub fn is_national(&self) -> bool {
        self.def().is_national()
    }

    /// Iterate over the holiday's declared regions, in the country's
    /// region order.
    pub fn regions(&self) -> impl Iterator<Item = &'static Region> {
        let set = self.def().regions();
        self.calendar
            .regions()
            .iter()
            .filter(move |region| set.contains(region))
    }

    /// Return `true` if the holiday is observed in the given region.
    ///
    /// A national holiday is observed everywhere, whatever its declared
    /// region set contains.
    pub fn observed_in(&self, region: &Region) -> bool {
        self.def().is_national() || self.def().regions().contains(region)
    }
}

impl PartialEq for Holiday {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.calendar, other.calendar) && self.index == other.index
    }
}

impl Eq for Holiday {}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
