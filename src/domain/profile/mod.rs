// ============================================================================
// Profile Domain - Business Logic for the Profile Aggregate
// ============================================================================
//
// This module contains ALL Profile-specific code:
// - Value objects (Email, FirstName, PhoneNumber, Address, etc.)
// - PersonalInfo entity and its builder
// - Identity types (ProfileId, UserId)
// - Events (ProfileCreated, ProfileDeleted, etc.)
// - Errors (one family per value object, plus ValidationError)
// - Aggregate (Profile with its soft-delete state machine)
// - Record (flat storage shape and conversions)
//
// No I/O happens here: callers hand in primitives and drain events.
//
// ============================================================================

pub mod value_objects;
pub mod personal_info;
pub mod identity;
pub mod events;
pub mod errors;
pub mod aggregate;
pub mod record;

// Re-export for convenience
pub use value_objects::*;
pub use personal_info::*;
pub use identity::*;
pub use events::*;
pub use errors::*;
pub use aggregate::*;
pub use record::*;
