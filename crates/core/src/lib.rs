//! Core types for Gramps objects
//!
//! - Value: the ordered, primitive-only serialized form
//! - FieldPath: dotted path into an object graph
//! - Labels: field name → display label
//! - Translate / Catalog: translation context for labels
//! - Error / Result

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod labels;
pub mod path;
pub mod translate;
pub mod value;

pub use error::{Error, Result};
pub use labels::Labels;
pub use path::{FieldPath, PathParseError};
pub use translate::{Catalog, Identity, Translate};
pub use value::Value;
