//! Dotted field paths
//!
//! A FieldPath names a field of an object, possibly through nested objects
//! and sequences: `"name"`, `"surname_list.0.surname"`, `"child.age"`.
//!
//! Segments are kept as plain strings. Whether a segment is a field name or
//! a sequence index is decided while walking the object graph, not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for field path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Path string is empty
    #[error("empty path")]
    Empty,
    /// Path contains an empty segment (`a..b`, `.a`, `a.`)
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
}

/// A dotted path into an object
///
/// # Examples
///
/// ```
/// use gramps_core::FieldPath;
///
/// let path: FieldPath = "surname_list.0.surname".parse().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), "surname");
/// assert_eq!(path.parent(), &["surname_list".to_string(), "0".to_string()]);
/// assert_eq!(path.to_string(), "surname_list.0.surname");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path
    pub fn parse(s: &str) -> Result<Self, PathParseError> {
        s.parse()
    }

    /// All segments, in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments (never true for a parsed path)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, looked up in the terminal object's labels
    pub fn last(&self) -> &str {
        // Parsing guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Every segment except the last, the steps walked before the lookup
    pub fn parent(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }

        let mut segments = Vec::new();
        for (position, part) in s.split('.').enumerate() {
            if part.is_empty() {
                return Err(PathParseError::EmptySegment(position));
            }
            segments.push(part.to_string());
        }

        Ok(FieldPath { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
