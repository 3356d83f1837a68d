//! Translation context
//!
//! Label lookups take a translator supplied by the UI layer. It is passed
//! through to `get_labels` untouched; objects call it on each label text.
//!
//! - Translate: the context trait (closures implement it)
//! - Identity: returns the message unchanged
//! - Catalog: msgid → msgstr table loaded from TOML

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Translation function passed to label lookups
pub trait Translate {
    /// Translate a message id into display text
    fn translate(&self, msgid: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, msgid: &str) -> String {
        self(msgid)
    }
}

/// Translator that returns every message unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Message catalog
///
/// Loaded from a TOML file of the form:
///
/// ```toml
/// locale = "fr"
///
/// [messages]
/// "Given name" = "Prénom"
/// "Surname" = "Nom"
/// ```
///
/// Messages missing from the catalog translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Locale the messages are written in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// msgid → msgstr
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation (builder pattern)
    pub fn with(mut self, msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        self.messages.insert(msgid.into(), msgstr.into());
        self
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Catalog(e.to_string()))
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            locale = catalog.locale.as_deref().unwrap_or("-"),
            messages = catalog.messages.len(),
            "Loaded translation catalog"
        );
        Ok(catalog)
    }

    /// Number of translated messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, msgid: &str) -> String {
        match self.messages.get(msgid) {
            Some(msgstr) => msgstr.clone(),
            None => {
                tracing::trace!(msgid, "No translation in catalog");
                msgid.to_string()
            }
        }
    }
}
