//! Typed identifier wrappers for the two metadata providers.
//!
//! The film database hands out ids like `tt1375666`; reelscout stores only
//! the digits and re-applies the `tt` prefix wherever a URL needs it. The
//! metadata API hands out plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Film-database identifier, digits only (no `tt` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmDbId(String);

impl FilmDbId {
    /// Parse an id in either `tt1375666` or `1375666` form.
    ///
    /// Returns `None` unless what remains after the optional prefix is a
    /// non-empty run of ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let digits = raw.strip_prefix("tt").unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits.to_string()))
    }

    /// The bare digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id with the provider's `tt` prefix applied.
    #[must_use]
    pub fn prefixed(&self) -> String {
        format!("tt{}", self.0)
    }
}

impl fmt::Display for FilmDbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier from the metadata REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataId(u64);

impl MetadataId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MetadataId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
