//! `HolidayCalendar` — a country's holiday and region tables.

use crate::holiday::{Holiday, HolidayDef};
use crate::region::{Region, RegionSet};
use crate::rule::HolidayRule;
use ft_core::errors::{Error, Result};
use ft_core::{ensure, fail};
use ft_time::date::days_in_month;

/// The holiday and region tables of one country.
///
/// Calendars are static data: built once, never mutated, and shared
/// freely across threads. Holidays are yielded in declaration order,
/// which is stable and not sorted by date.
#[derive(Debug)]
pub struct HolidayCalendar {
    name: &'static str,
    code: &'static str,
    regions: &'static [Region],
    entries: &'static [HolidayDef],
}

impl HolidayCalendar {
    /// Bind a region enumeration and a holiday table to a country name
    /// and ISO 3166-1 code.
    ///
    /// The tables are not checked here; call [`validate`](Self::validate)
    /// once before use (the built-in calendars are validated on first
    /// access through [`Country::calendar`](crate::Country::calendar)).
    pub const fn new(
        name: &'static str,
        code: &'static str,
        regions: &'static [Region],
        entries: &'static [HolidayDef],
    ) -> Self {
        HolidayCalendar {
            name,
            code,
            regions,
            entries,
        }
    }

    /// Country name (e.g. `"Germany"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 3166-1 alpha-2 country code (e.g. `"DE"`).
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The country's regions, in bit order.
    pub fn regions(&self) -> &'static [Region] {
        self.regions
    }

    /// Look up a region by its ISO 3166-2 code.
    pub fn region(&self, code: &str) -> Result<&'static Region> {
        self.regions
            .iter()
            .find(|region| region.code == code)
            .ok_or_else(|| Error::UnknownRegion(code.to_string()))
    }

    /// Iterate over the country's holidays in declaration order.
    pub fn holidays(&'static self) -> Holidays {
        Holidays {
            calendar: self,
            range: 0..self.entries.len(),
        }
    }

    /// Look up a holiday by name.
    pub fn get(&'static self, name: &str) -> Option<Holiday> {
        self.entries
            .iter()
            .position(|def| def.name() == name)
            .map(|index| Holiday {
                calendar: self,
                index,
            })
    }

    pub(crate) fn entries(&self) -> &'static [HolidayDef] {
        self.entries
    }

    /// Check the static tables for declaration errors: regions off their
    /// bit positions, fixed dates that cannot exist, chained rules that
    /// do not point strictly backwards, duplicate names, and region sets
    /// reaching outside the country's enumeration.
    ///
    /// A failure here is a programming error in the table, not a runtime
    /// condition; the built-in calendars are validated once per process
    /// and panic on the first access if malformed.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.regions.len() <= 32,
            "{}: at most 32 regions per country, got {}",
            self.code,
            self.regions.len()
        );
        for (bit, region) in self.regions.iter().enumerate() {
            ensure!(
                region.index as usize == bit,
                "{}: region {} sits at position {} but declares bit {}",
                self.code,
                region.code,
                bit,
                region.index
            );
        }

        let valid = RegionSet::all(self.regions.len() as u32);
        for (index, def) in self.entries.iter().enumerate() {
            for earlier in &self.entries[..index] {
                ensure!(
                    earlier.name() != def.name(),
                    "{}: duplicate holiday name \"{}\"",
                    self.code,
                    def.name()
                );
            }
            match *def.rule() {
                HolidayRule::Fixed { month, day } => {
                    // 2000 is a leap year, so a February 29 entry passes.
                    ensure!(
                        day >= 1 && day <= days_in_month(2000, month),
                        "\"{}\": {} {} is not a calendar date",
                        def.name(),
                        month,
                        day
                    );
                }
                HolidayRule::Chained { base, .. } => {
                    if base >= self.entries.len() {
                        fail!("\"{}\" chains to missing entry {}", def.name(), base);
                    }
                    if base == index {
                        fail!("\"{}\" chains to itself", def.name());
                    }
                    if base > index {
                        fail!(
                            "\"{}\" chains forward to \"{}\"; a rule may only depend on entries declared before it",
                            def.name(),
                            self.entries[base].name()
                        );
                    }
                }
                HolidayRule::EasterOffset(_) | HolidayRule::Computed(_) => {}
            }
            ensure!(
                def.regions().bits() & !valid.bits() == 0,
                "\"{}\" is scoped to regions outside {}",
                def.name(),
                self.code
            );
        }
        Ok(())
    }
}

/// Iterator over a calendar's holidays, in declaration order.
pub struct Holidays {
    calendar: &'static HolidayCalendar,
    range: std::ops::Range<usize>,
}

impl Iterator for Holidays {
    type Item = Holiday;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(Holiday {
            calendar: self.calendar,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Holidays {}
