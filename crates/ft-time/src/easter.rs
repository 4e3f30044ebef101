//! Gauss Easter computation — the anchor for every movable holiday.
//!
//! The anonymous Gregorian (Gauss) algorithm yields Easter Sunday in the
//! proleptic Gregorian calendar. It is total over any `i32` year; results
//! are historically meaningful from 1583 on.

use crate::date::Date;
use crate::month::Month;
use ft_core::Year;

/// Compute Easter Sunday for the given year.
///
/// The result always falls between March 22 and April 25 for Gregorian
/// years; all divisions are truncating integer divisions.
pub fn easter_sunday(year: Year) -> Date {
    let i = year % 19;
    let j = year / 100;
    let k = year % 100;

    let l = (19 * i + j - j / 4 - (j - (j + 8) / 25 + 1) / 3 + 15) % 30;
    let m = (32 + 2 * (j % 4) + 2 * (k / 4) - l - k % 4) % 7;
    let n = l + m - 7 * ((i + 11 * l + 22 * m) / 451) + 114;

    let month = Month::from_number((n / 31) as u8).expect("gauss month term is always a month");
    let day = (n % 31 + 1) as u8;

    Date::from_ymd(year, month, day)
}

/// Distance, in days, from the Easter-determined anchor weekday used by
/// the German Day of Repentance and Prayer rule: `(30 - d) mod 7`, where
/// `d` is Easter's day-of-month counted within April.
///
/// March 31 counts as April 0, so a March Easter still lands the rule on
/// the Wednesday before November 23.
pub fn easter_day_count(year: Year) -> i64 {
    let easter = easter_sunday(year);
    let day = match easter.month() {
        Month::March => easter.day_of_month() as i64 - 31,
        _ => easter.day_of_month() as i64,
    };
    (30 - day).rem_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use proptest::prelude::*;

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter_sunday(2000), Date::from_ymd(2000, Month::April, 23));
        assert_eq!(easter_sunday(2023), Date::from_ymd(2023, Month::April, 9));
        assert_eq!(easter_sunday(2024), Date::from_ymd(2024, Month::March, 31));
        assert_eq!(easter_sunday(2025), Date::from_ymd(2025, Month::April, 20));
        assert_eq!(easter_sunday(2026), Date::from_ymd(2026, Month::April, 5));
        // Earliest and latest possible dates in the Gregorian cycle.
        assert_eq!(easter_sunday(1818), Date::from_ymd(1818, Month::March, 22));
        assert_eq!(easter_sunday(1943), Date::from_ymd(1943, Month::April, 25));
    }

    #[test]
    fn known_day_counts() {
        assert_eq!(easter_day_count(2023), 0); // Easter April 9
        assert_eq!(easter_day_count(2024), 2); // Easter March 31
        assert_eq!(easter_day_count(2025), 3); // Easter April 20
    }

    proptest! {
        #[test]
        fn easter_falls_on_a_sunday(year in 1583..=4099) {
            prop_assert_eq!(easter_sunday(year).weekday(), Weekday::Sunday);
        }

        #[test]
        fn easter_stays_within_canonical_bounds(year in 1583..=4099) {
            let easter = easter_sunday(year);
            let day = easter.day_of_month();
            match easter.month() {
                Month::March => prop_assert!(day >= 22),
                Month::April => prop_assert!(day <= 25),
                other => prop_assert!(false, "easter in {}", other),
            }
        }

        #[test]
        fn day_count_is_a_weekday_offset(year in 1583..=4099) {
            prop_assert!((0..7).contains(&easter_day_count(year)));
        }
    }
}
