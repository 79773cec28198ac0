// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic, reusable event plumbing.
// Domain-specific code is in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any aggregate)
mod core;

// Re-export core infrastructure
pub use self::core::*;
