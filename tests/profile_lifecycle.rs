use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use profile_domain::domain::profile::{
    GeoCoordinates, PersonalInfo, Profile, ProfileEvent, ProfileRecord, ValidationError,
};
use profile_domain::event_sourcing::{deserialize_event, serialize_event, AggregateRoot, DomainEvent, EventEnvelope};

const U: &str = "user-u";

#[test]
fn test_create_delete_reject_restore_scenario() {
    let now = Utc::now();

    let mut profile = Profile::create(U, "JOHN@EXAMPLE.COM", PersonalInfo::empty(), now, U).unwrap();
    assert_eq!(profile.email().as_str(), "john@example.com");
    assert_eq!(profile.domain_events().len(), 1);
    assert!(matches!(profile.domain_events()[0], ProfileEvent::Created(_)));

    profile.delete(now, U).unwrap();
    assert!(profile.is_deleted());

    let err = profile.update_email("new@x.com", now, U).unwrap_err();
    assert_eq!(err.code(), "Profile.Deleted");

    profile.restore(now, U).unwrap();
    assert!(!profile.is_deleted());

    let types: Vec<_> = profile.domain_events().iter().map(|e| e.event_type()).collect();
    assert_eq!(types, vec!["ProfileCreated", "ProfileDeleted", "ProfileRestored"]);
}

#[test]
fn test_failed_creation_raises_no_event() {
    let err = Profile::create("", "john@example.com", PersonalInfo::empty(), Utc::now(), U)
        .unwrap_err();
    assert_eq!(err.code(), "Profile.UserId");
    assert!(matches!(err, ValidationError::Profile(_)));
}

#[test]
fn test_unit_of_work_round_trip_through_storage() -> Result<(), ValidationError> {
    let created_at = Utc::now() - Duration::days(1);
    let info = PersonalInfo::builder()
        .with_first_name("Marie")?
        .with_last_name("Curie")?
        .with_phone_number_in_region("06 12 34 56 78", "FR")?
        .with_address(
            Some("11 Rue Pierre et Marie Curie"),
            Some("75005"),
            "Paris",
            "France",
            None,
            Some(GeoCoordinates::create(48.844_8, 2.344_5)?),
        )?
        .build();

    let mut profile = Profile::create(U, "marie@example.com", info, created_at, U)?;

    // persistence collaborator: write fields, then drain events into the outbox
    let record = ProfileRecord::from(&profile);
    let correlation_id = Uuid::new_v4();
    let envelopes = profile.drain_envelopes(correlation_id);
    assert_eq!(envelopes.len(), 1);
    assert!(profile.domain_events().is_empty());

    let json = serialize_event(&envelopes[0]).unwrap();
    let restored: EventEnvelope<ProfileEvent> = deserialize_event(&json).unwrap();
    assert_eq!(restored.event_type, "ProfileCreated");
    assert_eq!(restored.event_data, envelopes[0].event_data);

    // next unit of work: reload and mutate
    let mut reloaded = Profile::try_from(record)?;
    assert_eq!(reloaded.id(), profile.id());
    assert_eq!(reloaded.personal_info(), profile.personal_info());
    assert!(reloaded.domain_events().is_empty());

    reloaded.update_email("m.curie@example.com", Utc::now(), "admin")?;
    assert_eq!(reloaded.last_modified_by(), Some("admin"));
    assert_eq!(reloaded.created_at(), created_at);
    assert!(matches!(reloaded.domain_events(), [ProfileEvent::EmailUpdated(_)]));

    Ok(())
}
