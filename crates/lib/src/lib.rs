//! Gramps object contracts
//!
//! This crate defines the contract shared by secondary objects: records that
//! live inside a primary object and are stored only as part of it.
//!
//! - SecondaryObject: serialize/unserialize, equality, equivalence, labels
//! - PathNode / resolve_label: dotted-path field label lookup
//! - Equivalence: outcome of an equivalence check

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod equivalence;
pub mod resolve;
pub mod secondary;

pub use equivalence::Equivalence;
pub use resolve::{resolve_label, PathNode};
pub use secondary::SecondaryObject;
