//! Austria — regions and holiday table.

use crate::calendar::HolidayCalendar;
use crate::holiday::HolidayDef;
use crate::region::{Region, RegionSet};
use ft_time::Month;

/// Vorarlberg.
pub const VORARLBERG: Region = Region {
    name: "Vorarlberg",
    code: "AT-8",
    index: 0,
};
/// Tirol.
pub const TYROL: Region = Region {
    name: "Tirol",
    code: "AT-7",
    index: 1,
};
/// Salzburg.
pub const SALZBURG: Region = Region {
    name: "Salzburg",
    code: "AT-5",
    index: 2,
};
/// Oberösterreich.
pub const UPPER_AUSTRIA: Region = Region {
    name: "Oberösterreich",
    code: "AT-4",
    index: 3,
};
/// Niederösterreich.
pub const LOWER_AUSTRIA: Region = Region {
    name: "Niederösterreich",
    code: "AT-3",
    index: 4,
};
/// Wien.
pub const VIENNA: Region = Region {
    name: "Wien",
    code: "AT-9",
    index: 5,
};
/// Burgenland.
pub const BURGENLAND: Region = Region {
    name: "Burgenland",
    code: "AT-1",
    index: 6,
};
/// Steiermark.
pub const STYRIA: Region = Region {
    name: "Steiermark",
    code: "AT-6",
    index: 7,
};
/// Kärnten.
pub const CARINTHIA: Region = Region {
    name: "Kärnten",
    code: "AT-2",
    index: 8,
};

/// The nine Austrian federal states, in bit order.
pub static REGIONS: [Region; 9] = [
    VORARLBERG,
    TYROL,
    SALZBURG,
    UPPER_AUSTRIA,
    LOWER_AUSTRIA,
    VIENNA,
    BURGENLAND,
    STYRIA,
    CARINTHIA,
];

const ALL: RegionSet = RegionSet::all(9);

/// The Austrian holiday table.
///
/// Fixed dates:
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * St. Josef (Mar 19)
/// * Staatsfeiertag (May 1)
/// * St. Florian (May 4)
/// * Mariä Himmelfahrt (Aug 15)
/// * St. Rupert (Sep 24)
/// * Tag der Volksabstimmung (Oct 10)
/// * Nationalfeiertag (Oct 26)
/// * Allerheiligen (Nov 1)
/// * St. Martin (Nov 11)
/// * St. Leopold (Nov 15)
/// * Mariä Empfängnis (Dec 8)
/// * Heiliger Abend (Dec 24)
/// * Weihnachten (Dec 25), Stefanitag (Dec 26)
/// * Silvester (Dec 27)
///
/// Movable dates, `e` being Easter Sunday:
/// * Ostermontag (e+1), Karfreitag (e-2)
/// * Christi Himmelfahrt (e+39)
/// * Pfingstmontag (e+50)
/// * Fronleichnam (e+60)
pub static CALENDAR: HolidayCalendar = HolidayCalendar::new(
    "Austria",
    "AT",
    &REGIONS,
    &[
        HolidayDef::fixed("Neujahr", Month::January, 1, true, ALL),
        HolidayDef::fixed("Heilige Drei Könige", Month::January, 6, true, ALL),
        HolidayDef::fixed(
            "St. Josef",
            Month::March,
            19,
            false,
            RegionSet::of(&[VIENNA, STYRIA, TYROL, VORARLBERG]),
        ),
        HolidayDef::fixed("Staatsfeiertag", Month::May, 1, true, ALL),
        HolidayDef::fixed(
            "St. Florian",
            Month::May,
            4,
            false,
            RegionSet::of(&[UPPER_AUSTRIA]),
        ),
        HolidayDef::fixed("Mariä Himmelfahrt", Month::August, 15, true, ALL),
        HolidayDef::fixed(
            "St. Rupert",
            Month::September,
            24,
            false,
            RegionSet::of(&[SALZBURG]),
        ),
        HolidayDef::fixed(
            "Tag der Volksabstimmung",
            Month::October,
            10,
            false,
            RegionSet::of(&[SALZBURG]),
        ),
        HolidayDef::fixed("Nationalfeiertag", Month::October, 26, true, ALL),
        HolidayDef::fixed("Allerheiligen", Month::November, 1, true, ALL),
        HolidayDef::fixed(
            "St. Martin",
            Month::November,
            11,
            false,
            RegionSet::of(&[BURGENLAND]),
        ),
        HolidayDef::fixed(
            "St. Leopold",
            Month::November,
            15,
            false,
            RegionSet::of(&[LOWER_AUSTRIA, VIENNA]),
        ),
        HolidayDef::fixed("Mariä Empfängnis", Month::December, 8, true, ALL),
        HolidayDef::fixed("Heiliger Abend", Month::December, 24, false, ALL),
        HolidayDef::fixed("Weihnachten", Month::December, 25, true, ALL),
        HolidayDef::fixed("Stefanitag", Month::December, 26, true, ALL),
        HolidayDef::fixed("Silvester", Month::December, 27, false, ALL),
        HolidayDef::easter_offset("Ostermontag", 1, true, ALL),
        HolidayDef::easter_offset("Karfreitag", -2, false, ALL),
        HolidayDef::easter_offset("Pfingstmontag", 50, true, ALL),
        HolidayDef::easter_offset("Christi Himmelfahrt", 39, true, ALL),
        HolidayDef::easter_offset("Fronleichnam", 60, true, ALL),
    ],
);
