use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::value_objects::{
    Address, BirthDate, FirstName, Gender, GeoCoordinates, LastName, PhoneNumber,
};

// ============================================================================
// Personal Info Entity
// ============================================================================
//
// Bundle of optional personal details. No field is required; every present
// field is valid because it can only be supplied as a validated value object.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    first_name: Option<FirstName>,
    last_name: Option<LastName>,
    date_of_birth: Option<BirthDate>,
    gender: Option<Gender>,
    phone_number: Option<PhoneNumber>,
    address: Option<Address>,
}

impl PersonalInfo {
    pub fn builder() -> PersonalInfoBuilder {
        PersonalInfoBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn first_name(&self) -> Option<&FirstName> {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> Option<&LastName> {
        self.last_name.as_ref()
    }

    pub fn date_of_birth(&self) -> Option<BirthDate> {
        self.date_of_birth
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// First and last name joined by a space, if either is known
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.first_name.as_ref().map(FirstName::as_str),
            self.last_name.as_ref().map(LastName::as_str),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Present fields only: name, birth date, gender, phone, address
    pub fn to_display_string(&self) -> String {
        let parts: Vec<String> = [
            self.full_name(),
            self.date_of_birth.map(|d| d.to_display_string()),
            self.gender.map(|g| g.to_string()),
            self.phone_number.as_ref().map(ToString::to_string),
            self.address.as_ref().map(Address::to_display_string),
        ]
        .into_iter()
        .flatten()
        .collect();

        parts.join(", ")
    }
}

impl fmt::Display for PersonalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

// ============================================================================
// Builder
// ============================================================================
//
// Raw `with_*` steps validate immediately and return the first failure, so a
// chain written with `?` stops at the first invalid field. The plain setters
// take already-validated value objects and cannot fail.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PersonalInfoBuilder {
    info: PersonalInfo,
}

impl PersonalInfoBuilder {
    pub fn with_first_name(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.info.first_name = Some(FirstName::create(raw)?);
        Ok(self)
    }

    pub fn with_last_name(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.info.last_name = Some(LastName::create(raw)?);
        Ok(self)
    }

    pub fn with_date_of_birth<Tz: TimeZone>(
        mut self,
        raw: DateTime<Tz>,
    ) -> Result<Self, ValidationError> {
        self.info.date_of_birth = Some(BirthDate::create(raw)?);
        Ok(self)
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.info.gender = Some(gender);
        self
    }

    pub fn with_phone_number(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.info.phone_number = Some(PhoneNumber::parse(raw)?);
        Ok(self)
    }

    pub fn with_phone_number_in_region(
        mut self,
        raw: &str,
        region_code: &str,
    ) -> Result<Self, ValidationError> {
        self.info.phone_number = Some(PhoneNumber::parse_with_region(raw, region_code)?);
        Ok(self)
    }

    pub fn with_address(
        mut self,
        street: Option<&str>,
        zip_code: Option<&str>,
        city: &str,
        country: &str,
        details: Option<&str>,
        coordinates: Option<GeoCoordinates>,
    ) -> Result<Self, ValidationError> {
        self.info.address = Some(Address::create(
            street,
            zip_code,
            city,
            country,
            details,
            coordinates,
        )?);
        Ok(self)
    }

    pub fn first_name(mut self, first_name: FirstName) -> Self {
        self.info.first_name = Some(first_name);
        self
    }

    pub fn last_name(mut self, last_name: LastName) -> Self {
        self.info.last_name = Some(last_name);
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: BirthDate) -> Self {
        self.info.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn phone_number(mut self, phone_number: PhoneNumber) -> Self {
        self.info.phone_number = Some(phone_number);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.info.address = Some(address);
        self
    }

    pub fn build(self) -> PersonalInfo {
        self.info
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
