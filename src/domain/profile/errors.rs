// ============================================================================
// Profile Validation Errors
// ============================================================================
//
// Every failure at this layer is a validation failure with a stable dotted
// code (`<Type>.<Reason>`) and a human-readable message (the Display impl).
// Each value object has its own error family; `ValidationError` wraps them
// all so callers can handle any failure uniformly.
//
// ============================================================================

/// Which name field a `NameError` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    First,
    Last,
}

impl NameKind {
    fn label(self) -> &'static str {
        match self {
            NameKind::First => "First name",
            NameKind::Last => "Last name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email cannot exceed {max} characters")]
    TooLong { max: usize },

    #[error("Email local part cannot exceed {max} characters")]
    LocalPartTooLong { max: usize },

    #[error("Invalid email format")]
    InvalidFormat,
}

impl EmailError {
    pub fn code(&self) -> &'static str {
        match self {
            EmailError::Empty => "Email.Empty",
            EmailError::TooLong { .. } => "Email.TooLong",
            EmailError::LocalPartTooLong { .. } => "Email.LocalPartTooLong",
            EmailError::InvalidFormat => "Email.InvalidFormat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("{} cannot be empty", .0.label())]
    Empty(NameKind),

    #[error("{} cannot exceed {max} characters", .kind.label())]
    TooLong { kind: NameKind, max: usize },

    #[error("{} can only contain letters, spaces, hyphens and apostrophes", .0.label())]
    InvalidCharacters(NameKind),
}

impl NameError {
    pub fn kind(&self) -> NameKind {
        match self {
            NameError::Empty(kind) | NameError::InvalidCharacters(kind) => *kind,
            NameError::TooLong { kind, .. } => *kind,
        }
    }

    pub fn code(&self) -> &'static str {
        match (self.kind(), self) {
            (NameKind::First, NameError::Empty(_)) => "FirstName.Empty",
            (NameKind::First, NameError::TooLong { .. }) => "FirstName.TooLong",
            (NameKind::First, NameError::InvalidCharacters(_)) => "FirstName.InvalidCharacters",
            (NameKind::Last, NameError::Empty(_)) => "LastName.Empty",
            (NameKind::Last, NameError::TooLong { .. }) => "LastName.TooLong",
            (NameKind::Last, NameError::InvalidCharacters(_)) => "LastName.InvalidCharacters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("Phone number cannot be empty")]
    Empty,

    #[error("Region code cannot be empty")]
    EmptyRegionCode,

    #[error("Unknown region code: {0}")]
    UnknownRegionCode(String),

    #[error("Invalid phone number: {0}")]
    Invalid(String),
}

impl PhoneNumberError {
    pub fn code(&self) -> &'static str {
        match self {
            PhoneNumberError::Empty => "PhoneNumber.Empty",
            PhoneNumberError::EmptyRegionCode => "PhoneNumber.RegionCode.Empty",
            PhoneNumberError::UnknownRegionCode(_) => "PhoneNumber.RegionCode.Invalid",
            PhoneNumberError::Invalid(_) => "PhoneNumber.Invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BirthDateError {
    #[error("Birth date cannot be in the future")]
    FutureDate,

    #[error("Birth date implies an age over {max_years} years")]
    TooOld { max_years: u32 },
}

impl BirthDateError {
    pub fn code(&self) -> &'static str {
        match self {
            BirthDateError::FutureDate => "BirthDate.FutureDate",
            BirthDateError::TooOld { .. } => "BirthDate.TooOld",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoCoordinatesError {
    #[error("Latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    #[error("Longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    #[error("Latitude and longitude must be given together")]
    Incomplete,
}

impl GeoCoordinatesError {
    pub fn code(&self) -> &'static str {
        match self {
            GeoCoordinatesError::InvalidLatitude(_) => "GeoCoordinates.InvalidLatitude",
            GeoCoordinatesError::InvalidLongitude(_) => "GeoCoordinates.InvalidLongitude",
            GeoCoordinatesError::Incomplete => "GeoCoordinates.Incomplete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Street cannot exceed {max} characters")]
    StreetTooLong { max: usize },

    #[error("Zip code cannot exceed {max} characters")]
    ZipCodeTooLong { max: usize },

    #[error("City cannot be empty")]
    CityEmpty,

    #[error("City cannot exceed {max} characters")]
    CityTooLong { max: usize },

    #[error("Country cannot be empty")]
    CountryEmpty,

    #[error("Country cannot exceed {max} characters")]
    CountryTooLong { max: usize },

    #[error("Address details cannot exceed {max} characters")]
    DetailsTooLong { max: usize },
}

impl AddressError {
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::StreetTooLong { .. } => "Address.Street.TooLong",
            AddressError::ZipCodeTooLong { .. } => "Address.ZipCode.TooLong",
            AddressError::CityEmpty => "Address.City.Empty",
            AddressError::CityTooLong { .. } => "Address.City.TooLong",
            AddressError::CountryEmpty => "Address.Country.Empty",
            AddressError::CountryTooLong { .. } => "Address.Country.TooLong",
            AddressError::DetailsTooLong { .. } => "Address.Details.TooLong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender: {0}")]
pub struct GenderError(pub String);

impl GenderError {
    pub fn code(&self) -> &'static str {
        "Gender.Invalid"
    }
}

// ============================================================================
// Profile Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("User id cannot be empty")]
    EmptyUserId,

    #[error("Created by cannot be empty")]
    EmptyCreatedBy,

    #[error("Cannot update a deleted profile")]
    Deleted,

    #[error("Profile is already deleted")]
    AlreadyDeleted,

    #[error("Profile is not deleted")]
    NotDeleted,

    #[error("Deleted flag does not match deletion audit fields")]
    InconsistentDeletionState,
}

impl ProfileError {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::EmptyUserId => "Profile.UserId",
            ProfileError::EmptyCreatedBy => "Profile.CreatedBy",
            ProfileError::Deleted => "Profile.Deleted",
            ProfileError::AlreadyDeleted => "Profile.AlreadyDeleted",
            ProfileError::NotDeleted => "Profile.NotDeleted",
            ProfileError::InconsistentDeletionState => "Profile.InconsistentDeletionState",
        }
    }
}

// ============================================================================
// Uniform Validation Failure
// ============================================================================

/// Any failure produced by the profile domain
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    PhoneNumber(#[from] PhoneNumberError),

    #[error(transparent)]
    BirthDate(#[from] BirthDateError),

    #[error(transparent)]
    GeoCoordinates(#[from] GeoCoordinatesError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Gender(#[from] GenderError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl ValidationError {
    /// Stable machine-readable code, e.g. `Profile.AlreadyDeleted`
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Email(e) => e.code(),
            ValidationError::Name(e) => e.code(),
            ValidationError::PhoneNumber(e) => e.code(),
            ValidationError::BirthDate(e) => e.code(),
            ValidationError::GeoCoordinates(e) => e.code(),
            ValidationError::Address(e) => e.code(),
            ValidationError::Gender(e) => e.code(),
            ValidationError::Profile(e) => e.code(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_codes_follow_field() {
        assert_eq!(NameError::Empty(NameKind::First).code(), "FirstName.Empty");
        assert_eq!(NameError::Empty(NameKind::Last).code(), "LastName.Empty");
        assert_eq!(
            NameError::TooLong { kind: NameKind::Last, max: 100 }.code(),
            "LastName.TooLong"
        );
    }

    #[test]
    fn test_name_message_mentions_field() {
        let err = NameError::InvalidCharacters(NameKind::First);
        assert_eq!(
            err.to_string(),
            "First name can only contain letters, spaces, hyphens and apostrophes"
        );
    }

    #[test]
    fn test_validation_error_delegates_code_and_message() {
        let err: ValidationError = AddressError::CityEmpty.into();
        assert_eq!(err.code(), "Address.City.Empty");
        assert_eq!(err.message(), "City cannot be empty");

        let err: ValidationError = ProfileError::NotDeleted.into();
        assert_eq!(err.code(), "Profile.NotDeleted");
    }

    #[test]
    fn test_profile_codes() {
        assert_eq!(ProfileError::EmptyUserId.code(), "Profile.UserId");
        assert_eq!(ProfileError::EmptyCreatedBy.code(), "Profile.CreatedBy");
        assert_eq!(ProfileError::Deleted.code(), "Profile.Deleted");
        assert_eq!(ProfileError::AlreadyDeleted.code(), "Profile.AlreadyDeleted");
        assert_eq!(ProfileError::Deleted.to_string(), "Cannot update a deleted profile");
    }
}
