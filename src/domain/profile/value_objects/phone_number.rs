use std::fmt;
use std::hash::{Hash, Hasher};

use phonenumber::{country, Mode};
use serde::{Deserialize, Serialize};

use crate::domain::profile::errors::PhoneNumberError;

// ============================================================================
// Phone Number
// ============================================================================
//
// Parsing and validity are delegated to the `phonenumber` crate (libphonenumber
// metadata). The canonical value is the E.164 rendering.
//
// ============================================================================

/// Display style for `PhoneNumber::format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneFormat {
    E164,
    International,
    National,
}

impl From<PhoneFormat> for Mode {
    fn from(value: PhoneFormat) -> Self {
        match value {
            PhoneFormat::E164 => Mode::E164,
            PhoneFormat::International => Mode::International,
            PhoneFormat::National => Mode::National,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    e164: String,
    country_code: u16,
    national_number: u64,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse a number written in international form (`+33 6 12 34 56 78`)
    pub fn parse(raw: &str) -> Result<Self, PhoneNumberError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PhoneNumberError::Empty);
        }
        Self::from_library(None, raw)
    }

    /// Parse a number in local form for the given ISO 3166 region (`"FR"`)
    pub fn parse_with_region(raw: &str, region_code: &str) -> Result<Self, PhoneNumberError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PhoneNumberError::Empty);
        }
        let region_code = region_code.trim();
        if region_code.is_empty() {
            return Err(PhoneNumberError::EmptyRegionCode);
        }
        let region: country::Id = region_code
            .to_ascii_uppercase()
            .parse()
            .map_err(|_| PhoneNumberError::UnknownRegionCode(region_code.to_string()))?;
        Self::from_library(Some(region), raw)
    }

    fn from_library(region: Option<country::Id>, raw: &str) -> Result<Self, PhoneNumberError> {
        let parsed = phonenumber::parse(region, raw)
            .map_err(|e| PhoneNumberError::Invalid(e.to_string()))?;
        if !phonenumber::is_valid(&parsed) {
            return Err(PhoneNumberError::Invalid(raw.to_string()));
        }

        Ok(Self {
            e164: parsed.format().mode(Mode::E164).to_string(),
            country_code: parsed.code().value(),
            national_number: parsed.national().value(),
            parsed,
        })
    }

    /// Canonical E.164 form, e.g. `+33612345678`
    pub fn as_str(&self) -> &str {
        &self.e164
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// National significant number (without leading zeros)
    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn format(&self, style: PhoneFormat) -> String {
        self.parsed.format().mode(style.into()).to_string()
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.e164
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
