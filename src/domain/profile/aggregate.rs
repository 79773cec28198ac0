use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_sourcing::AggregateRoot;
use super::errors::{ProfileError, ValidationError};
use super::events::*;
use super::identity::{ProfileId, UserId};
use super::personal_info::PersonalInfo;
use super::value_objects::Email;

// ============================================================================
// Profile Aggregate - Business Logic
// ============================================================================
//
// States: Active <-> Deleted (soft delete, reversible through `restore`).
//
// Invariants:
// - deleted  <=> deletion stamp present (encoded as one Option)
// - only `restore` succeeds while deleted
// - every successful mutation appends exactly one event
// - creation audit is never modified
//
// ============================================================================

/// Who did something, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub at: DateTime<Utc>,
    pub by: String,
}

impl AuditStamp {
    pub fn new(at: DateTime<Utc>, by: impl Into<String>) -> Self {
        Self { at, by: by.into() }
    }
}

/// Previously validated profile state, as handed back by storage
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub email: Email,
    pub personal_info: PersonalInfo,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub last_modified: Option<AuditStamp>,
    pub deletion: Option<AuditStamp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: ProfileId,
    user_id: UserId,
    email: Email,
    personal_info: PersonalInfo,
    created_at: DateTime<Utc>,
    created_by: String,
    last_modified: Option<AuditStamp>,
    deletion: Option<AuditStamp>,
    domain_events: Vec<ProfileEvent>,
}

impl Profile {
    /// Create a new active profile with a fresh identity
    pub fn create(
        user_id: &str,
        email: &str,
        personal_info: PersonalInfo,
        created_at: DateTime<Utc>,
        created_by: &str,
    ) -> Result<Self, ValidationError> {
        let user_id = UserId::new(user_id)?;
        let created_by = created_by.trim();
        if created_by.is_empty() {
            return Err(ProfileError::EmptyCreatedBy.into());
        }
        let email = Email::create(email)?;

        let id = ProfileId::new();
        let mut profile = Self {
            id,
            user_id,
            email,
            personal_info,
            created_at,
            created_by: created_by.to_string(),
            last_modified: None,
            deletion: None,
            domain_events: Vec::new(),
        };

        profile.record(ProfileEvent::Created(ProfileCreated {
            profile_id: id,
            user_id: profile.user_id.clone(),
            email: profile.email.clone(),
            personal_info: profile.personal_info.clone(),
            created_at,
            created_by: profile.created_by.clone(),
        }));

        tracing::debug!(profile_id = %id, user_id = %profile.user_id, "Profile created");
        Ok(profile)
    }

    /// Rehydrate from storage without running creation rules or raising events
    pub fn from_stored(stored: StoredProfile) -> Self {
        Self {
            id: stored.id,
            user_id: stored.user_id,
            email: stored.email,
            personal_info: stored.personal_info,
            created_at: stored.created_at,
            created_by: stored.created_by,
            last_modified: stored.last_modified,
            deletion: stored.deletion,
            domain_events: Vec::new(),
        }
    }

    pub fn update_email(
        &mut self,
        new_email: &str,
        at: DateTime<Utc>,
        by: &str,
    ) -> Result<(), ValidationError> {
        self.ensure_active()?;
        let new_email = Email::create(new_email)?;

        let old_email = std::mem::replace(&mut self.email, new_email.clone());
        self.touch(at, by);
        self.record(ProfileEvent::EmailUpdated(ProfileEmailUpdated {
            profile_id: self.id,
            old_email,
            new_email,
            updated_by: by.to_string(),
            occurred_at: at,
        }));

        tracing::debug!(profile_id = %self.id, "Profile email updated");
        Ok(())
    }

    pub fn update_personal_info(
        &mut self,
        personal_info: PersonalInfo,
        at: DateTime<Utc>,
        by: &str,
    ) -> Result<(), ValidationError> {
        self.ensure_active()?;

        self.personal_info = personal_info.clone();
        self.touch(at, by);
        self.record(ProfileEvent::PersonalInfoUpdated(ProfilePersonalInfoUpdated {
            profile_id: self.id,
            personal_info,
            updated_by: by.to_string(),
            occurred_at: at,
        }));

        tracing::debug!(profile_id = %self.id, "Profile personal info updated");
        Ok(())
    }

    /// Soft delete: the profile stays, flagged with who deleted it and when
    pub fn delete(&mut self, at: DateTime<Utc>, by: &str) -> Result<(), ValidationError> {
        if self.is_deleted() {
            return Err(self.reject(ProfileError::AlreadyDeleted));
        }

        self.deletion = Some(AuditStamp::new(at, by));
        self.record(ProfileEvent::Deleted(ProfileDeleted {
            profile_id: self.id,
            deleted_by: by.to_string(),
            occurred_at: at,
        }));

        tracing::debug!(profile_id = %self.id, deleted_by = by, "Profile deleted");
        Ok(())
    }

    pub fn restore(&mut self, at: DateTime<Utc>, by: &str) -> Result<(), ValidationError> {
        if !self.is_deleted() {
            return Err(self.reject(ProfileError::NotDeleted));
        }

        self.deletion = None;
        self.touch(at, by);
        self.record(ProfileEvent::Restored(ProfileRestored {
            profile_id: self.id,
            restored_by: by.to_string(),
            occurred_at: at,
        }));

        tracing::debug!(profile_id = %self.id, restored_by = by, "Profile restored");
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), ValidationError> {
        if self.is_deleted() {
            return Err(self.reject(ProfileError::Deleted));
        }
        Ok(())
    }

    fn reject(&self, error: ProfileError) -> ValidationError {
        tracing::warn!(profile_id = %self.id, code = error.code(), "{}", error);
        error.into()
    }

    fn touch(&mut self, at: DateTime<Utc>, by: &str) {
        self.last_modified = Some(AuditStamp::new(at, by));
    }

    fn record(&mut self, event: ProfileEvent) {
        self.domain_events.push(event);
    }

    // --- Accessors ---

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified.as_ref().map(|s| s.at)
    }

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified.as_ref().map(|s| s.by.as_str())
    }

    pub fn is_deleted(&self) -> bool {
        self.deletion.is_some()
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deletion.as_ref().map(|s| s.at)
    }

    pub fn deleted_by(&self) -> Option<&str> {
        self.deletion.as_ref().map(|s| s.by.as_str())
    }
}

impl AggregateRoot for Profile {
    type Id = ProfileId;
    type Event = ProfileEvent;

    fn aggregate_id(&self) -> ProfileId {
        self.id
    }

    fn domain_events(&self) -> &[ProfileEvent] {
        &self.domain_events
    }

    fn take_domain_events(&mut self) -> Vec<ProfileEvent> {
        std::mem::take(&mut self.domain_events)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
