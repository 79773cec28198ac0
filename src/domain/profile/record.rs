use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::{AuditStamp, Profile, StoredProfile};
use super::errors::{ProfileError, ValidationError};
use super::identity::{ProfileId, UserId};
use super::personal_info::PersonalInfo;
use super::value_objects::{
    Address, BirthDate, Email, FirstName, Gender, GeoCoordinates, LastName, PhoneNumber,
};

// ============================================================================
// Profile Record - Flat Storage / Read Model Shape
// ============================================================================
//
// Primitive columns as a storage or query collaborator sees them. Converting
// a record into a `Profile` re-validates every field and stops at the first
// failure; converting a `Profile` into a record never fails.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: String,
    pub email: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,

    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address_details: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,

    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
}

impl ProfileRecord {
    fn personal_info(&self) -> Result<PersonalInfo, ValidationError> {
        let mut builder = PersonalInfo::builder();
        if let Some(first_name) = &self.first_name {
            builder = builder.first_name(FirstName::create(first_name)?);
        }
        if let Some(last_name) = &self.last_name {
            builder = builder.last_name(LastName::create(last_name)?);
        }
        if let Some(date) = self.date_of_birth {
            builder = builder.date_of_birth(BirthDate::from_stored(date));
        }
        if let Some(gender) = &self.gender {
            builder = builder.with_gender(gender.parse::<Gender>()?);
        }
        if let Some(phone) = &self.phone_number {
            builder = builder.phone_number(PhoneNumber::parse(phone)?);
        }
        if let Some(address) = self.address()? {
            builder = builder.address(address);
        }
        Ok(builder.build())
    }

    fn address(&self) -> Result<Option<Address>, ValidationError> {
        let has_address = self.street.is_some()
            || self.zip_code.is_some()
            || self.city.is_some()
            || self.country.is_some()
            || self.address_details.is_some()
            || self.latitude.is_some()
            || self.longitude.is_some();
        if !has_address {
            return Ok(None);
        }

        let coordinates = GeoCoordinates::from_parts(self.latitude, self.longitude)?;

        let address = Address::create(
            self.street.as_deref(),
            self.zip_code.as_deref(),
            self.city.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default(),
            self.address_details.as_deref(),
            coordinates,
        )?;
        Ok(Some(address))
    }

    fn deletion(&self) -> Result<Option<AuditStamp>, ProfileError> {
        match (self.is_deleted, self.deleted_at, &self.deleted_by) {
            (true, Some(at), Some(by)) => Ok(Some(AuditStamp::new(at, by.clone()))),
            (false, None, None) => Ok(None),
            _ => Err(ProfileError::InconsistentDeletionState),
        }
    }

    fn last_modified(&self) -> Option<AuditStamp> {
        match (self.last_modified_at, &self.last_modified_by) {
            (Some(at), Some(by)) => Some(AuditStamp::new(at, by.clone())),
            (None, None) => None,
            _ => {
                tracing::warn!(profile_id = %self.id, "Ignoring partial last-modified audit");
                None
            }
        }
    }
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ValidationError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let user_id = UserId::new(record.user_id.as_str())?;
        let email = Email::create(&record.email)?;
        let personal_info = record.personal_info()?;
        if record.created_by.trim().is_empty() {
            return Err(ProfileError::EmptyCreatedBy.into());
        }
        let deletion = record.deletion()?;
        let last_modified = record.last_modified();

        Ok(Profile::from_stored(StoredProfile {
            id: ProfileId::from(record.id),
            user_id,
            email,
            personal_info,
            created_at: record.created_at,
            created_by: record.created_by,
            last_modified,
            deletion,
        }))
    }
}

impl From<&Profile> for ProfileRecord {
    fn from(profile: &Profile) -> Self {
        let info = profile.personal_info();
        let address = info.address();
        let coordinates = address.and_then(Address::coordinates);

        Self {
            id: profile.id().as_uuid(),
            user_id: profile.user_id().to_string(),
            email: profile.email().to_string(),

            first_name: info.first_name().map(ToString::to_string),
            last_name: info.last_name().map(ToString::to_string),
            date_of_birth: info.date_of_birth().map(|d| d.date()),
            gender: info.gender().map(|g| g.to_string()),
            phone_number: info.phone_number().map(ToString::to_string),

            street: address.and_then(Address::street).map(str::to_string),
            zip_code: address.and_then(Address::zip_code).map(str::to_string),
            city: address.map(|a| a.city().to_string()),
            country: address.map(|a| a.country().to_string()),
            address_details: address.and_then(Address::details).map(str::to_string),
            latitude: coordinates.map(|c| c.latitude()),
            longitude: coordinates.map(|c| c.longitude()),

            created_at: profile.created_at(),
            created_by: profile.created_by().to_string(),
            last_modified_at: profile.last_modified_at(),
            last_modified_by: profile.last_modified_by().map(str::to_string),

            is_deleted: profile.is_deleted(),
            deleted_at: profile.deleted_at(),
            deleted_by: profile.deleted_by().map(str::to_string),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_sourcing::AggregateRoot;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn create_test_record() -> ProfileRecord {
        let created_at = Utc::now() - Duration::days(10);
        ProfileRecord {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            email: "jane@example.com".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 7, 4),
            gender: Some("Female".to_string()),
            phone_number: Some("+33612345678".to_string()),
            street: Some("10 Rue de Rivoli".to_string()),
            zip_code: Some("75001".to_string()),
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            address_details: None,
            latitude: Some(48.856614),
            longitude: Some(2.352222),
            created_at,
            created_by: "user-1".to_string(),
            last_modified_at: Some(created_at + Duration::days(1)),
            last_modified_by: Some("user-1".to_string()),
            is_deleted: false,
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[test]
    fn test_record_rehydrates_profile() {
        let record = create_test_record();
        let profile = Profile::try_from(record.clone()).unwrap();

        assert_eq!(profile.id().as_uuid(), record.id);
        assert_eq!(profile.email().as_str(), "jane@example.com");
        assert_eq!(profile.personal_info().full_name().as_deref(), Some("Jane Doe"));
        assert_eq!(profile.personal_info().gender(), Some(Gender::Female));
        assert_eq!(profile.last_modified_by(), Some("user-1"));
        assert!(profile.domain_events().is_empty());
    }

    #[test]
    fn test_profile_to_record_and_back() {
        let record = create_test_record();
        let profile = Profile::try_from(record.clone()).unwrap();

        assert_eq!(ProfileRecord::from(&profile), record);
    }

    #[test]
    fn test_deleted_record_rehydrates_deleted_profile() {
        let mut record = create_test_record();
        record.is_deleted = true;
        record.deleted_at = Some(Utc::now());
        record.deleted_by = Some("admin".to_string());

        let profile = Profile::try_from(record).unwrap();
        assert!(profile.is_deleted());
        assert_eq!(profile.deleted_by(), Some("admin"));
    }

    #[test]
    fn test_inconsistent_deletion_state_rejected() {
        let mut record = create_test_record();
        record.is_deleted = true;

        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "Profile.InconsistentDeletionState");

        let mut record = create_test_record();
        record.deleted_by = Some("admin".to_string());
        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "Profile.InconsistentDeletionState");
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let mut record = create_test_record();
        record.first_name = Some("J4ne".to_string());
        record.phone_number = Some("nonsense".to_string());
        record.city = None;

        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "FirstName.InvalidCharacters");
    }

    #[test]
    fn test_address_without_city_rejected() {
        let mut record = create_test_record();
        record.city = None;

        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "Address.City.Empty");
    }

    #[test]
    fn test_invalid_stored_values_rejected() {
        let mut record = create_test_record();
        record.user_id = String::new();
        assert_eq!(Profile::try_from(record).unwrap_err().code(), "Profile.UserId");

        let mut record = create_test_record();
        record.gender = Some("unknown".to_string());
        assert_eq!(Profile::try_from(record).unwrap_err().code(), "Gender.Invalid");

        let mut record = create_test_record();
        record.created_by = " ".to_string();
        assert_eq!(Profile::try_from(record).unwrap_err().code(), "Profile.CreatedBy");
    }

    #[test]
    fn test_birth_date_is_not_rechecked_against_today() {
        let mut record = create_test_record();
        let today = Utc::now().date_naive();
        let very_old = today - Duration::days(365 * 121 + 40);
        record.date_of_birth = Some(very_old);

        let profile = Profile::try_from(record).unwrap();
        let birth = profile.personal_info().date_of_birth().unwrap();
        assert_eq!(birth.date(), very_old);
        assert!(birth.age() > BirthDate::MAX_AGE_YEARS);
    }

    #[test]
    fn test_half_present_coordinates_rejected() {
        let mut record = create_test_record();
        record.longitude = None;
        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "GeoCoordinates.Incomplete");

        let mut record = create_test_record();
        record.latitude = None;
        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "GeoCoordinates.Incomplete");
    }

    #[test]
    fn test_coordinates_without_address_rejected() {
        let record = ProfileRecord {
            street: None,
            zip_code: None,
            city: None,
            country: None,
            address_details: None,
            ..create_test_record()
        };

        let err = Profile::try_from(record).unwrap_err();
        assert_eq!(err.code(), "Address.City.Empty");
    }

    #[test]
    fn test_partial_last_modified_audit_is_dropped() {
        let mut record = create_test_record();
        record.last_modified_by = None;

        let profile = Profile::try_from(record).unwrap();
        assert_eq!(profile.last_modified_at(), None);
        assert_eq!(profile.last_modified_by(), None);

        let mut record = create_test_record();
        record.last_modified_at = None;

        let profile = Profile::try_from(record).unwrap();
        assert_eq!(profile.last_modified_at(), None);
        assert_eq!(profile.last_modified_by(), None);
    }

    #[test]
    fn test_record_without_personal_details() {
        let record = ProfileRecord {
            first_name: None,
            last_name: None,
            date_of_birth: None,
            gender: None,
            phone_number: None,
            street: None,
            zip_code: None,
            city: None,
            country: None,
            address_details: None,
            latitude: None,
            longitude: None,
            ..create_test_record()
        };

        let profile = Profile::try_from(record).unwrap();
        assert!(profile.personal_info().is_empty());
    }
}
