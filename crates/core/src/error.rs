//! Error types for Gramps objects

use crate::path::PathParseError;
use crate::value::Value;
use thiserror::Error;

/// Errors raised by serialization, label lookup and catalog loading
#[derive(Debug, Error)]
pub enum Error {
    /// The terminal object of a field path has no label for the last segment
    #[error("{object} has no such label: '{field}'")]
    LabelNotFound {
        /// Debug rendering of the object `get_label` was called on
        object: String,
        /// The full requested field path
        field: String,
    },

    /// The field path ended on a sequence, which carries no labels
    #[error("'{segment}' in '{field}' names a sequence, not a labeled object")]
    NotLabeled {
        /// The full requested field path
        field: String,
        /// The segment that resolved to a sequence
        segment: String,
    },

    /// Segment is neither a field of the current object nor an index into a sequence
    #[error("no field '{segment}' while resolving '{field}'")]
    NotIndexable {
        /// The full requested field path
        field: String,
        /// The segment that could not be resolved
        segment: String,
    },

    /// Segment used as a sequence index is not an integer
    #[error("invalid index '{segment}' while resolving '{field}'")]
    InvalidIndex {
        /// The full requested field path
        field: String,
        /// The non-numeric segment
        segment: String,
    },

    /// Sequence index past the end
    #[error("index {index} out of range (len {len}) while resolving '{field}'")]
    IndexOutOfRange {
        /// The full requested field path
        field: String,
        /// The requested index
        index: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Field path could not be parsed
    #[error("invalid field path: {0}")]
    Path(#[from] PathParseError),

    /// Serialized data does not have the shape the object expects
    #[error("cannot unserialize: expected {expected}, found {found}")]
    Unserialize {
        /// Shape the object expected
        expected: String,
        /// Shape actually present
        found: String,
    },

    /// Byte encoding or decoding of a serialized value failed
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Translation catalog could not be parsed
    #[error("catalog error: {0}")]
    Catalog(String),

    /// I/O error reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::Unserialize`] for a value of the wrong kind
    pub fn unserialize(expected: impl Into<String>, found: &Value) -> Self {
        Error::Unserialize {
            expected: expected.into(),
            found: found.kind().to_string(),
        }
    }
}

/// Result type alias for Gramps operations
pub type Result<T> = std::result::Result<T, Error>;
