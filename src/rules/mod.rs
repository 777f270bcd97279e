//! Production rules and their application to the plane

/// Single-tile and whole-block rule propagation
pub mod propagation;
/// Rule storage, matching, and usage-driven reordering
pub mod registry;

pub use registry::RuleRegistry;
