//! Person profile domain core: validated value objects, the `PersonalInfo`
//! entity and the soft-deletable `Profile` aggregate with its domain events.

pub mod domain;
pub mod event_sourcing;
