// ============================================================================
// Event Sourcing Core - Generic Infrastructure Abstractions
// ============================================================================
//
// This module contains GENERIC, reusable abstractions that work with ANY
// domain aggregate.
//
// Key Principles:
// - No domain-specific code (no Profile, PersonalInfo, etc.)
// - Generic over aggregate and event types
// - No I/O: publishing and storage belong to the persistence collaborator
//
// ============================================================================

pub mod aggregate;
pub mod event;

// Re-export core types for convenience
pub use aggregate::AggregateRoot;
pub use event::{DomainEvent, EventEnvelope, serialize_event, deserialize_event};
