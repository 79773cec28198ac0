use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::profile::errors::BirthDateError;

// ============================================================================
// Birth Date
// ============================================================================

/// Date of birth, stored as the UTC calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const MAX_AGE_YEARS: u32 = 120;

    pub fn create<Tz: TimeZone>(raw: DateTime<Tz>) -> Result<Self, BirthDateError> {
        Self::create_as_of(raw, Utc::now().date_naive())
    }

    /// Validate against an explicit "today" instead of the system clock
    pub fn create_as_of<Tz: TimeZone>(
        raw: DateTime<Tz>,
        today: NaiveDate,
    ) -> Result<Self, BirthDateError> {
        Self::from_date_as_of(raw.with_timezone(&Utc).date_naive(), today)
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, BirthDateError> {
        Self::from_date_as_of(date, Utc::now().date_naive())
    }

    pub fn from_date_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self, BirthDateError> {
        if date > today {
            return Err(BirthDateError::FutureDate);
        }
        if full_years_between(date, today) > Self::MAX_AGE_YEARS {
            return Err(BirthDateError::TooOld { max_years: Self::MAX_AGE_YEARS });
        }
        Ok(Self(date))
    }

    /// Rehydrate a previously validated date without checking it against today
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn age(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        full_years_between(self.0, today)
    }

    /// `dd/mm/yyyy`
    pub fn to_display_string(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

/// Whole years elapsed, subtracting one when this year's birthday is still
/// ahead. A 29 February birthday counts as reached on 1 March in common years.
fn full_years_between(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = BirthDateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(value)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
