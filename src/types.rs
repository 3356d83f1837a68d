//! Public types for the Gramps object API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Serialized form
// ============================================================================

pub use gramps_core::Value;

// ============================================================================
// Labels and translation
// ============================================================================

pub use gramps_core::{Catalog, FieldPath, Identity, Labels, PathParseError, Translate};

// ============================================================================
// Object contracts
// ============================================================================

pub use gramps_lib::{resolve_label, Equivalence, PathNode, SecondaryObject};

// ============================================================================
// Errors
// ============================================================================

pub use gramps_core::{Error, Result};
