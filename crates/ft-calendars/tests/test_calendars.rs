//! Integration tests exercising the public calendar surface: country
//! listing, region enumeration, holiday iteration, and date derivation
//! against known calendar years.

use ft_calendars::{austria, germany, Country};
use ft_time::{Date, Month, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, Month::from_number(m).unwrap(), d)
}

fn holiday(country: Country, name: &str) -> ft_calendars::Holiday {
    country
        .calendar()
        .get(name)
        .unwrap_or_else(|| panic!("{country} has no holiday named {name}"))
}

// ─── Germany ──────────────────────────────────────────────────────────────────

#[test]
fn german_holidays_2024() {
    let cases = [
        ("Neujahr", date(2024, 1, 1)),
        ("Heilige Drei Könige", date(2024, 1, 6)),
        ("Rosenmontag", date(2024, 2, 12)),
        ("Gründonnerstag", date(2024, 3, 28)),
        ("Karfreitag", date(2024, 3, 29)),
        ("Ostersonntag", date(2024, 3, 31)),
        ("Ostermontag", date(2024, 4, 1)),
        ("Tag der Arbeit", date(2024, 5, 1)),
        ("Christi Himmelfahrt", date(2024, 5, 9)),
        ("Pfingstsonntag", date(2024, 5, 19)),
        ("Pfingstmontag", date(2024, 5, 20)),
        ("Fronleichnam", date(2024, 5, 30)),
        ("Tag der Deutschen Einheit", date(2024, 10, 3)),
        ("Buß- und Bettag", date(2024, 11, 20)),
        ("1. Advent", date(2024, 12, 1)),
        ("2. Advent", date(2024, 12, 8)),
        ("3. Advent", date(2024, 12, 15)),
        ("4. Advent", date(2024, 12, 22)),
        ("1. Weihnachtstag", date(2024, 12, 25)),
    ];
    for (name, expected) in cases {
        assert_eq!(holiday(Country::Germany, name).date(2024), expected, "{name}");
    }
}

#[test]
fn german_holidays_2025() {
    let cases = [
        ("Karfreitag", date(2025, 4, 18)),
        ("Ostersonntag", date(2025, 4, 20)),
        ("Ostermontag", date(2025, 4, 21)),
        ("Christi Himmelfahrt", date(2025, 5, 29)),
        ("Pfingstmontag", date(2025, 6, 9)),
        ("Fronleichnam", date(2025, 6, 19)),
        ("Buß- und Bettag", date(2025, 11, 19)),
        ("1. Advent", date(2025, 11, 30)),
        ("4. Advent", date(2025, 12, 21)),
    ];
    for (name, expected) in cases {
        assert_eq!(holiday(Country::Germany, name).date(2025), expected, "{name}");
    }
}

#[test]
fn movable_weekdays_hold_over_a_century() {
    let good_friday = holiday(Country::Germany, "Karfreitag");
    let easter_monday = holiday(Country::Germany, "Ostermontag");
    let whit_monday = holiday(Country::Germany, "Pfingstmontag");
    let ascension = holiday(Country::Germany, "Christi Himmelfahrt");
    for year in 2000..2100 {
        assert_eq!(good_friday.date(year).weekday(), Weekday::Friday, "{year}");
        assert_eq!(easter_monday.date(year).weekday(), Weekday::Monday, "{year}");
        assert_eq!(whit_monday.date(year).weekday(), Weekday::Monday, "{year}");
        assert_eq!(ascension.date(year).weekday(), Weekday::Thursday, "{year}");
    }
}

#[test]
fn advent_sundays_are_consecutive() {
    for year in [2020, 2024, 2025, 2030] {
        let first = holiday(Country::Germany, "1. Advent").date(year);
        assert_eq!(first.weekday(), Weekday::Sunday, "{year}");
        for (nth, name) in ["2. Advent", "3. Advent", "4. Advent"].iter().enumerate() {
            let sunday = holiday(Country::Germany, name).date(year);
            assert_eq!(first.days_until(sunday), 7 * (nth as i64 + 1), "{name} {year}");
        }
        // The fourth Advent is the last Sunday before Christmas Day.
        let fourth = holiday(Country::Germany, "4. Advent").date(year);
        let christmas = holiday(Country::Germany, "1. Weihnachtstag").date(year);
        let gap = fourth.days_until(christmas);
        assert!((1..=7).contains(&gap), "{year}: gap {gap}");
    }
}

#[test]
fn national_holidays_apply_to_every_region() {
    for country in Country::all() {
        let calendar = country.calendar();
        for holiday in calendar.holidays() {
            if holiday.is_national() {
                for region in calendar.regions() {
                    assert!(
                        holiday.observed_in(region),
                        "{country}: {holiday} missing in {region}"
                    );
                }
            }
        }
    }
}

#[test]
fn regional_scoping_follows_the_declared_set() {
    let reformation = holiday(Country::Germany, "Reformationstag");
    assert!(reformation.observed_in(&germany::SAXONY));
    let all_saints = holiday(Country::Germany, "Allerheiligen");
    assert!(all_saints.observed_in(&germany::SAARLAND));

    let plebiscite = holiday(Country::Austria, "Tag der Volksabstimmung");
    assert!(!plebiscite.is_national());
    assert!(plebiscite.observed_in(&austria::SALZBURG));
    assert!(!plebiscite.observed_in(&austria::STYRIA));
}

#[test]
fn holiday_order_is_declaration_order() {
    let names: Vec<&str> = Country::Germany
        .calendar()
        .holidays()
        .map(|h| h.name())
        .collect();
    assert_eq!(names[0], "Neujahr");
    assert_eq!(names[13], "Ostersonntag");
    assert_eq!(names[17], "Buß- und Bettag");
    assert_eq!(names.len(), 27);
    // Not sorted by date: Rosenmontag (February/March) comes after the
    // December entries.
    let rosenmontag = names.iter().position(|n| *n == "Rosenmontag").unwrap();
    let silvester = names.iter().position(|n| *n == "Silvester").unwrap();
    assert!(rosenmontag > silvester);
}

#[test]
fn dates_are_idempotent() {
    for country in Country::all() {
        for holiday in country.calendar().holidays() {
            assert_eq!(holiday.date(2024), holiday.date(2024), "{holiday}");
        }
    }
}

#[test]
fn countries_round_trip() {
    assert_eq!(Country::all().len(), 2);
    for country in Country::all() {
        let parsed: Country = country.code().parse().unwrap();
        assert_eq!(parsed, *country);
    }
    assert!("XX".parse::<Country>().is_err());
}

#[test]
fn region_lookup_by_code() {
    let bavaria = Country::Germany.calendar().region("DE-BY").unwrap();
    assert_eq!(bavaria.name, "Bayern");
    assert!(Country::Austria.calendar().region("DE-BY").is_err());
}

// ─── Austria ──────────────────────────────────────────────────────────────────

#[test]
fn austrian_holidays_2024() {
    let cases = [
        ("Neujahr", date(2024, 1, 1)),
        ("Karfreitag", date(2024, 3, 29)),
        ("Ostermontag", date(2024, 4, 1)),
        ("Staatsfeiertag", date(2024, 5, 1)),
        ("Christi Himmelfahrt", date(2024, 5, 9)),
        ("Pfingstmontag", date(2024, 5, 20)),
        ("Fronleichnam", date(2024, 5, 30)),
        ("Nationalfeiertag", date(2024, 10, 26)),
        ("Mariä Empfängnis", date(2024, 12, 8)),
        ("Stefanitag", date(2024, 12, 26)),
    ];
    for (name, expected) in cases {
        assert_eq!(holiday(Country::Austria, name).date(2024), expected, "{name}");
    }
}

#[test]
fn austrian_table_has_no_chained_rules() {
    // Every Austrian movable holiday hangs directly off the Easter
    // anchor, so the table evaluates without any cross-entry lookups.
    let calendar = Country::Austria.calendar();
    assert_eq!(calendar.holidays().len(), 22);
    for h in calendar.holidays() {
        let d = h.date(1583);
        assert_eq!(d.year(), 1583, "{h}");
    }
}
