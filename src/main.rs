use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use profile_domain::domain::profile::{PersonalInfo, Profile};
use profile_domain::event_sourcing::{serialize_event, AggregateRoot};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,profile_domain=debug"))
        )
        .init();

    tracing::info!("Starting profile lifecycle demo");

    let user = "user-42";
    let info = PersonalInfo::builder()
        .with_first_name("John")?
        .with_last_name("Doe")?
        .with_phone_number_in_region("06 12 34 56 78", "FR")?
        .with_address(Some("10 Rue de Rivoli"), Some("75001"), "Paris", "France", None, None)?
        .build();

    // === 1. Create ===
    let mut profile = Profile::create(user, "JOHN@EXAMPLE.COM", info, Utc::now(), user)?;
    tracing::info!(profile_id = %profile.id(), email = %profile.email(), "Created: {}", profile.personal_info());

    // === 2. Soft delete ===
    profile.delete(Utc::now(), user)?;
    tracing::info!(deleted = profile.is_deleted(), "Deleted");

    // === 3. Updates are rejected while deleted ===
    if let Err(e) = profile.update_email("new@example.com", Utc::now(), user) {
        tracing::info!(code = e.code(), "Update rejected: {}", e);
    }

    // === 4. Restore ===
    profile.restore(Utc::now(), user)?;
    tracing::info!(deleted = profile.is_deleted(), pending = profile.domain_events().len(), "Restored");

    // === 5. Hand events to the outbox ===
    let correlation_id = Uuid::new_v4();
    for envelope in profile.drain_envelopes(correlation_id) {
        let envelope = envelope.with_user(user);
        println!("{}", serialize_event(&envelope)?);
    }

    tracing::info!("Demo complete");
    Ok(())
}
