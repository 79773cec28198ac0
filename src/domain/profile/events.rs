use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_sourcing::DomainEvent;
use super::identity::{ProfileId, UserId};
use super::personal_info::PersonalInfo;
use super::value_objects::Email;

// ============================================================================
// Profile Domain Events
// ============================================================================

/// Union type for all profile events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProfileEvent {
    Created(ProfileCreated),
    EmailUpdated(ProfileEmailUpdated),
    PersonalInfoUpdated(ProfilePersonalInfoUpdated),
    Deleted(ProfileDeleted),
    Restored(ProfileRestored),
}

impl ProfileEvent {
    pub fn profile_id(&self) -> ProfileId {
        match self {
            ProfileEvent::Created(e) => e.profile_id,
            ProfileEvent::EmailUpdated(e) => e.profile_id,
            ProfileEvent::PersonalInfoUpdated(e) => e.profile_id,
            ProfileEvent::Deleted(e) => e.profile_id,
            ProfileEvent::Restored(e) => e.profile_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProfileEvent::Created(e) => e.created_at,
            ProfileEvent::EmailUpdated(e) => e.occurred_at,
            ProfileEvent::PersonalInfoUpdated(e) => e.occurred_at,
            ProfileEvent::Deleted(e) => e.occurred_at,
            ProfileEvent::Restored(e) => e.occurred_at,
        }
    }
}

impl DomainEvent for ProfileEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProfileEvent::Created(_) => "ProfileCreated",
            ProfileEvent::EmailUpdated(_) => "ProfileEmailUpdated",
            ProfileEvent::PersonalInfoUpdated(_) => "ProfilePersonalInfoUpdated",
            ProfileEvent::Deleted(_) => "ProfileDeleted",
            ProfileEvent::Restored(_) => "ProfileRestored",
        }
    }
}

// Individual event types

/// Snapshot of the profile as it was created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreated {
    pub profile_id: ProfileId,
    pub user_id: UserId,
    pub email: Email,
    pub personal_info: PersonalInfo,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEmailUpdated {
    pub profile_id: ProfileId,
    pub old_email: Email,
    pub new_email: Email,
    pub updated_by: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePersonalInfoUpdated {
    pub profile_id: ProfileId,
    pub personal_info: PersonalInfo,
    pub updated_by: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDeleted {
    pub profile_id: ProfileId,
    pub deleted_by: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRestored {
    pub profile_id: ProfileId,
    pub restored_by: String,
    pub occurred_at: DateTime<Utc>,
}
