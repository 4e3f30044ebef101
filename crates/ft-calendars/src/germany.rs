//! Germany — regions and holiday table.

use crate::calendar::HolidayCalendar;
use crate::holiday::HolidayDef;
use crate::region::{Region, RegionSet};
use ft_core::Year;
use ft_time::{easter, Date, Month};

/// Baden-Württemberg.
pub const BADEN_WUERTTEMBERG: Region = Region {
    name: "Baden-Württemberg",
    code: "DE-BW",
    index: 0,
};
/// Bayern.
pub const BAVARIA: Region = Region {
    name: "Bayern",
    code: "DE-BY",
    index: 1,
};
/// Berlin.
pub const BERLIN: Region = Region {
    name: "Berlin",
    code: "DE-BE",
    index: 2,
};
/// Brandenburg.
pub const BRANDENBURG: Region = Region {
    name: "Brandenburg",
    code: "DE-BB",
    index: 3,
};
/// Bremen.
pub const BREMEN: Region = Region {
    name: "Bremen",
    code: "DE-HB",
    index: 4,
};
/// Hamburg.
pub const HAMBURG: Region = Region {
    name: "Hamburg",
    code: "DE-HH",
    index: 5,
};
/// Hessen.
pub const HESSE: Region = Region {
    name: "Hessen",
    code: "DE-HE",
    index: 6,
};
/// Mecklenburg-Vorpommern.
pub const MECKLENBURG_VORPOMMERN: Region = Region {
    name: "Mecklenburg-Vorpommern",
    code: "DE-MV",
    index: 7,
};
/// Niedersachsen.
pub const LOWER_SAXONY: Region = Region {
    name: "Niedersachsen",
    code: "DE-NI",
    index: 8,
};
/// Nordrhein-Westfalen.
pub const NORTH_RHINE_WESTPHALIA: Region = Region {
    name: "Nordrhein-Westfalen",
    code: "DE-NW",
    index: 9,
};
/// Rheinland-Pfalz.
pub const RHINELAND_PALATINATE: Region = Region {
    name: "Rheinland-Pfalz",
    code: "DE-RP",
    index: 10,
};
/// Saarland.
pub const SAARLAND: Region = Region {
    name: "Saarland",
    code: "DE-SL",
    index: 11,
};
/// Sachsen.
pub const SAXONY: Region = Region {
    name: "Sachsen",
    code: "DE-SN",
    index: 12,
};
/// Sachsen-Anhalt.
pub const SAXONY_ANHALT: Region = Region {
    name: "Sachsen-Anhalt",
    code: "DE-ST",
    index: 13,
};
/// Schleswig-Holstein.
pub const SCHLESWIG_HOLSTEIN: Region = Region {
    name: "Schleswig-Holstein",
    code: "DE-SH",
    index: 14,
};
/// Thüringen.
pub const THURINGIA: Region = Region {
    name: "Thüringen",
    code: "DE-TH",
    index: 15,
};

/// The sixteen German federal states, in bit order.
pub static REGIONS: [Region; 16] = [
    BADEN_WUERTTEMBERG,
    BAVARIA,
    BERLIN,
    BRANDENBURG,
    BREMEN,
    HAMBURG,
    HESSE,
    MECKLENBURG_VORPOMMERN,
    LOWER_SAXONY,
    NORTH_RHINE_WESTPHALIA,
    RHINELAND_PALATINATE,
    SAARLAND,
    SAXONY,
    SAXONY_ANHALT,
    SCHLESWIG_HOLSTEIN,
    THURINGIA,
];

const ALL: RegionSet = RegionSet::all(16);

// Entry indices referenced by chained rules.
const BUSS_UND_BETTAG: usize = 17;
const ADVENT_1: usize = 18;
const ADVENT_2: usize = 19;
const ADVENT_3: usize = 20;

/// Buß- und Bettag: the Wednesday before November 23, positioned off
/// Easter's weekday.
fn buss_und_bettag(year: Year) -> Date {
    Date::from_ymd(year, Month::December, 24) - (32 + easter::easter_day_count(year))
}

/// The German holiday table.
///
/// Fixed dates:
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * Valentinstag (Feb 14)
/// * Tag der Arbeit (May 1)
/// * Mariä Himmelfahrt (Aug 15)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Reformationstag (Oct 31)
/// * Allerheiligen (Nov 1)
/// * Nikolaus (Dec 6)
/// * Heiligabend (Dec 24)
/// * 1\. and 2. Weihnachtstag (Dec 25, Dec 26)
/// * Silvester (Dec 27)
///
/// Movable dates, `e` being Easter Sunday:
/// * Ostersonntag (e), Ostermontag (e+1)
/// * Karfreitag (e-2), Gründonnerstag (e-3)
/// * Rosenmontag (e-48)
/// * Christi Himmelfahrt (e+39)
/// * Pfingstsonntag (e+49), Pfingstmontag (e+50)
/// * Fronleichnam (e+60)
/// * Buß- und Bettag (Wednesday before Nov 23)
/// * 1\. Advent (Buß- und Bettag + 11), then 2.–4. Advent each a week
///   after the previous one
pub static CALENDAR: HolidayCalendar = HolidayCalendar::new(
    "Germany",
    "DE",
    &REGIONS,
    &[
        HolidayDef::fixed("Neujahr", Month::January, 1, true, ALL),
        HolidayDef::fixed(
            "Heilige Drei Könige",
            Month::January,
            6,
            true,
            RegionSet::of(&[BADEN_WUERTTEMBERG, BAVARIA, SCHLESWIG_HOLSTEIN]),
        ),
        HolidayDef::fixed("Valentinstag", Month::February, 14, false, ALL),
        HolidayDef::fixed("Tag der Arbeit", Month::May, 1, true, ALL),
        HolidayDef::fixed(
            "Mariä Himmelfahrt",
            Month::August,
            15,
            true,
            RegionSet::of(&[BAVARIA, SAARLAND]),
        ),
        HolidayDef::fixed("Tag der Deutschen Einheit", Month::October, 3, true, ALL),
        HolidayDef::fixed(
            "Reformationstag",
            Month::October,
            31,
            true,
            RegionSet::of(&[
                BRANDENBURG,
                MECKLENBURG_VORPOMMERN,
                SAXONY,
                SAXONY_ANHALT,
                THURINGIA,
            ]),
        ),
        HolidayDef::fixed(
            "Allerheiligen",
            Month::November,
            1,
            true,
            RegionSet::of(&[
                BADEN_WUERTTEMBERG,
                BAVARIA,
                NORTH_RHINE_WESTPHALIA,
                RHINELAND_PALATINATE,
                SAARLAND,
            ]),
        ),
        HolidayDef::fixed("Nikolaus", Month::December, 6, false, ALL),
        HolidayDef::fixed("Heiligabend", Month::December, 24, false, ALL),
        HolidayDef::fixed("1. Weihnachtstag", Month::December, 25, true, ALL),
        HolidayDef::fixed("2. Weihnachtstag", Month::December, 26, true, ALL),
        HolidayDef::fixed("Silvester", Month::December, 27, true, ALL),
        HolidayDef::easter_offset("Ostersonntag", 0, true, RegionSet::of(&[BRANDENBURG])),
        HolidayDef::easter_offset("Ostermontag", 1, true, ALL),
        HolidayDef::easter_offset("Karfreitag", -2, true, ALL),
        HolidayDef::easter_offset("Gründonnerstag", -3, false, ALL),
        HolidayDef::computed(
            "Buß- und Bettag",
            buss_und_bettag,
            true,
            RegionSet::of(&[SAXONY]),
        ),
        HolidayDef::chained("1. Advent", BUSS_UND_BETTAG, 11, false, ALL),
        HolidayDef::chained("2. Advent", ADVENT_1, 7, false, ALL),
        HolidayDef::chained("3. Advent", ADVENT_2, 7, false, ALL),
        HolidayDef::chained("4. Advent", ADVENT_3, 7, false, ALL),
        HolidayDef::easter_offset("Rosenmontag", -48, false, ALL),
        HolidayDef::easter_offset("Pfingstsonntag", 49, true, RegionSet::of(&[BRANDENBURG])),
        HolidayDef::easter_offset("Pfingstmontag", 50, true, ALL),
        HolidayDef::easter_offset("Christi Himmelfahrt", 39, true, ALL),
        HolidayDef::easter_offset(
            "Fronleichnam",
            60,
            true,
            RegionSet::of(&[
                BADEN_WUERTTEMBERG,
                HESSE,
                BAVARIA,
                NORTH_RHINE_WESTPHALIA,
                RHINELAND_PALATINATE,
                SAARLAND,
            ]),
        ),
    ],
);
