use std::fmt;

use serde::{Deserialize, Serialize};

use super::geo_coordinates::GeoCoordinates;
use crate::domain::profile::errors::AddressError;

// ============================================================================
// Postal Address
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AddressRaw")]
pub struct Address {
    street: Option<String>,
    zip_code: Option<String>,
    city: String,
    country: String,
    details: Option<String>,
    coordinates: Option<GeoCoordinates>,
}

#[derive(Deserialize)]
struct AddressRaw {
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    zip_code: Option<String>,
    city: String,
    country: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    coordinates: Option<GeoCoordinates>,
}

impl Address {
    pub const MAX_STREET_LENGTH: usize = 100;
    pub const MAX_ZIP_CODE_LENGTH: usize = 20;
    pub const MAX_CITY_LENGTH: usize = 100;
    pub const MAX_COUNTRY_LENGTH: usize = 100;
    pub const MAX_DETAILS_LENGTH: usize = 500;

    pub fn create(
        street: Option<&str>,
        zip_code: Option<&str>,
        city: &str,
        country: &str,
        details: Option<&str>,
        coordinates: Option<GeoCoordinates>,
    ) -> Result<Self, AddressError> {
        let street = optional(street, Self::MAX_STREET_LENGTH, |max| {
            AddressError::StreetTooLong { max }
        })?;
        let zip_code = optional(zip_code, Self::MAX_ZIP_CODE_LENGTH, |max| {
            AddressError::ZipCodeTooLong { max }
        })?;
        let city = required(
            city,
            Self::MAX_CITY_LENGTH,
            AddressError::CityEmpty,
            |max| AddressError::CityTooLong { max },
        )?;
        let country = required(
            country,
            Self::MAX_COUNTRY_LENGTH,
            AddressError::CountryEmpty,
            |max| AddressError::CountryTooLong { max },
        )?;
        let details = optional(details, Self::MAX_DETAILS_LENGTH, |max| {
            AddressError::DetailsTooLong { max }
        })?;

        Ok(Self { street, zip_code, city, country, details, coordinates })
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn coordinates(&self) -> Option<GeoCoordinates> {
        self.coordinates
    }

    /// Single-line rendering: details, street, "zip city", country, then
    /// the coordinates in parentheses when known
    pub fn to_display_string(&self) -> String {
        let locality = match &self.zip_code {
            Some(zip) => format!("{zip} {}", self.city),
            None => self.city.clone(),
        };

        let parts: Vec<&str> = [
            self.details.as_deref(),
            self.street.as_deref(),
            Some(locality.as_str()),
            Some(self.country.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut line = parts.join(", ");
        if let Some(coordinates) = &self.coordinates {
            line.push_str(&format!(" ({coordinates})"));
        }
        line
    }
}

fn optional(
    value: Option<&str>,
    max: usize,
    too_long: impl FnOnce(usize) -> AddressError,
) -> Result<Option<String>, AddressError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if v.chars().count() > max => Err(too_long(max)),
        Some(v) => Ok(Some(v.to_string())),
    }
}

fn required(
    value: &str,
    max: usize,
    empty: AddressError,
    too_long: impl FnOnce(usize) -> AddressError,
) -> Result<String, AddressError> {
    optional(Some(value), max, too_long)?.ok_or(empty)
}

impl TryFrom<AddressRaw> for Address {
    type Error = AddressError;

    fn try_from(raw: AddressRaw) -> Result<Self, Self::Error> {
        Self::create(
            raw.street.as_deref(),
            raw.zip_code.as_deref(),
            &raw.city,
            &raw.country,
            raw.details.as_deref(),
            raw.coordinates,
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
