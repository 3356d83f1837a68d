//! Field labels
//!
//! Labels map a field name to the human-readable, translated text shown in
//! editors and reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → display label
///
/// # Examples
///
/// ```
/// use gramps_core::Labels;
///
/// let labels = Labels::new().with("first_name", "Given name");
/// assert_eq!(labels.get("first_name"), Some("Given name"));
/// assert!(Labels::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    /// Create an empty label set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label (builder pattern)
    pub fn with(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(field, label);
        self
    }

    /// Add or replace a label
    pub fn insert(&mut self, field: impl Into<String>, label: impl Into<String>) {
        self.0.insert(field.into(), label.into());
    }

    /// Look up the label for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether a field has a label
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of labeled fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is labeled
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (field, label) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Labels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Labels(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
