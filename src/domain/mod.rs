// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Errors
// - Aggregate implementation
//
// This layer is completely separate from the event plumbing.
//
// ============================================================================

pub mod profile;
