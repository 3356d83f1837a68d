//! Outcome of an equivalence check between two objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// How closely two objects match
///
/// Stronger than `Different`, weaker than structural equality: two
/// attributes of the same type and value are `Equal` even when their
/// citations differ, and `Identical` only when every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equivalence {
    /// Every serialized field matches
    Identical,
    /// The identifying fields match, other data differs
    Equal,
    /// The identifying fields differ
    Different,
}

impl Equivalence {
    /// Classify a comparison from its two checks
    ///
    /// `same_identity` compares the identifying fields, `same_data` the full
    /// serialized form. Full equality implies identity, so
    /// `(false, true)` is treated as `Different`.
    pub fn classify(same_identity: bool, same_data: bool) -> Self {
        match (same_identity, same_data) {
            (true, true) => Equivalence::Identical,
            (true, false) => Equivalence::Equal,
            (false, _) => Equivalence::Different,
        }
    }

    /// Whether the objects describe the same thing (Identical or Equal)
    pub fn is_match(self) -> bool {
        !matches!(self, Equivalence::Different)
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Equivalence::Identical => "identical",
            Equivalence::Equal => "equal",
            Equivalence::Different => "different",
        };
        write!(f, "{}", s)
    }
}
