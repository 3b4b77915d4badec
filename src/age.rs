//! Age in whole years from a birth year.

use std::fmt;

use chrono::Datelike;

/// Birth years at or before this one are rejected.
const MIN_YEAR_EXCLUSIVE: i32 = 1900;

/// Result of an age computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    Years(i32),
    /// The birth year was not after 1900 or not before the current year.
    Invalid,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years}"),
            Self::Invalid => f.write_str("Ano invalido!"),
        }
    }
}

/// Age in years of someone born in `birth_year`, as of `current_year`.
#[must_use]
pub fn age_in_years(birth_year: i32, current_year: i32) -> Age {
    if birth_year >= current_year || birth_year <= MIN_YEAR_EXCLUSIVE {
        return Age::Invalid;
    }
    Age::Years(current_year - birth_year)
}

/// Same as [`age_in_years`] using the local clock for the current year.
#[must_use]
pub fn age_from_today(birth_year: i32) -> Age {
    age_in_years(birth_year, chrono::Local::now().year())
}
