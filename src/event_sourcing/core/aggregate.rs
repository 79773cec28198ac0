use uuid::Uuid;
use super::event::{DomainEvent, EventEnvelope};

// ============================================================================
// Aggregate Root Pattern - Recorded Domain Events
// ============================================================================
//
// Key Principles:
// 1. State is stored directly; events are facts recorded alongside it
// 2. Only the aggregate's own operations append to its event queue
// 3. Events are appended in call order and never mutated afterwards
// 4. The persistence collaborator drains the queue after a successful write
//
// This is the GENERIC aggregate trait that works for ANY domain aggregate.
//
// ============================================================================

/// Generic Aggregate trait - all aggregates that record events implement this
///
/// Type Parameters:
/// - `Id`: The aggregate's typed identity
/// - `Event`: The domain event type for this aggregate
pub trait AggregateRoot {
    type Id: Copy + Into<Uuid>;
    type Event: DomainEvent;

    /// Get aggregate ID
    fn aggregate_id(&self) -> Self::Id;

    /// Events raised since the last drain, oldest first
    fn domain_events(&self) -> &[Self::Event];

    /// Remove and return all pending events
    fn take_domain_events(&mut self) -> Vec<Self::Event>;

    fn clear_domain_events(&mut self) {
        self.take_domain_events();
    }

    /// Drain pending events as outbox-ready envelopes
    fn drain_envelopes(&mut self, correlation_id: Uuid) -> Vec<EventEnvelope<Self::Event>> {
        let aggregate_id = self.aggregate_id().into();
        EventEnvelope::wrap_all(aggregate_id, self.take_domain_events(), correlation_id)
    }
}
