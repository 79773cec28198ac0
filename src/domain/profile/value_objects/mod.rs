// ============================================================================
// Profile Value Objects
// ============================================================================
//
// Immutable, compared by value, validated once at construction. A factory
// (`create` / `parse`) is the only way to obtain an instance, so every live
// value is valid.
//
// ============================================================================

pub mod address;
pub mod birth_date;
pub mod email;
pub mod gender;
pub mod geo_coordinates;
pub mod name;
pub mod phone_number;

pub use address::Address;
pub use birth_date::BirthDate;
pub use email::Email;
pub use gender::Gender;
pub use geo_coordinates::GeoCoordinates;
pub use name::{FirstName, LastName, NAME_MAX_LENGTH};
pub use phone_number::{PhoneFormat, PhoneNumber};
