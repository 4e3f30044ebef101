//! `Country` — the supported countries.

use std::sync::OnceLock;

use crate::austria;
use crate::calendar::HolidayCalendar;
use crate::germany;
use ft_core::errors::Error;

/// A country with a built-in holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Germany.
    Germany,
    /// Austria.
    Austria,
}

impl Country {
    /// Every supported country.
    pub const ALL: [Country; 2] = [Country::Germany, Country::Austria];

    /// The supported countries, in declaration order.
    pub fn all() -> &'static [Country] {
        &Self::ALL
    }

    /// The country's holiday calendar.
    ///
    /// All built-in tables are validated once per process on the first
    /// call; a malformed table is a programming error and panics here.
    pub fn calendar(self) -> &'static HolidayCalendar {
        static VALIDATED: OnceLock<()> = OnceLock::new();
        VALIDATED.get_or_init(|| {
            for country in Self::ALL {
                if let Err(err) = country.table().validate() {
                    panic!("{}: {}", country.table().name(), err);
                }
            }
        });
        self.table()
    }

    fn table(self) -> &'static HolidayCalendar {
        match self {
            Country::Germany => &germany::CALENDAR,
            Country::Austria => &austria::CALENDAR,
        }
    }

    /// Country name (e.g. `"Germany"`).
    pub fn name(self) -> &'static str {
        self.calendar().name()
    }

    /// ISO 3166-1 alpha-2 code (e.g. `"DE"`).
    pub fn code(self) -> &'static str {
        self.calendar().code()
    }
}

impl std::str::FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.code() == s)
            .ok_or_else(|| Error::UnknownCountry(s.to_string()))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
