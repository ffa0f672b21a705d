//! Row-level data model.
//!
//! A [`SearchQuery`] enters the pipeline and a [`ResultRow`] leaves it.
//! Every field derived from a network lookup is an `Option`; `None` is the
//! normal "absent" outcome and never aborts a row.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{FilmDbId, MetadataId};

/// One input row: a movie title and its release year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text movie title.
    pub title: String,
    /// Release year used to disambiguate search candidates.
    pub year: i32,
    /// Optional externally supplied URL whose page title is checked as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_url: Option<String>,
}

impl SearchQuery {
    /// Create a query without a comparison URL.
    pub fn new<S: Into<String>>(title: S, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
            comparison_url: None,
        }
    }

    /// Attach a comparison URL.
    #[must_use]
    pub fn with_comparison_url<S: Into<String>>(mut self, url: S) -> Self {
        self.comparison_url = Some(url.into());
        self
    }
}

/// The two metadata sources a row is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Film database searched by title (ids like `tt1375666`).
    FilmDb,
    /// Metadata REST API searched with an API key (numeric ids).
    MetadataApi,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilmDb => write!(f, "filmdb"),
            Self::MetadataApi => write!(f, "metadata_api"),
        }
    }
}

/// Outcome of one resolver for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMatch {
    /// Which provider produced this match.
    pub provider: Provider,
    /// Provider-specific identifier; `None` means no acceptable match.
    pub external_id: Option<String>,
}

impl ProviderMatch {
    /// Build a film-database match from an optional typed id.
    pub fn film_db(id: Option<&FilmDbId>) -> Self {
        Self {
            provider: Provider::FilmDb,
            external_id: id.map(|id| id.as_str().to_string()),
        }
    }

    /// Build a metadata-API match from an optional typed id.
    pub fn metadata(id: Option<MetadataId>) -> Self {
        Self {
            provider: Provider::MetadataApi,
            external_id: id.map(|id| id.to_string()),
        }
    }

    /// Whether the resolver found an identifier.
    pub fn is_match(&self) -> bool {
        self.external_id.is_some()
    }
}

/// Synthesized embed URL for a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedReference {
    /// `None` only when neither provider produced an identifier.
    pub url: Option<String>,
}

/// Which URL a [`TitleRecord`] was verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// The synthesized embed URL (or the identifiers behind it).
    Embed,
    /// The row's externally supplied comparison URL.
    Comparison,
}

/// A display title recovered for a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// What was verified.
    pub source: TitleSource,
    /// The trimmed title, or `None` when verification produced nothing.
    pub resolved_title: Option<String>,
}

/// One fully assembled output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// The input row, preserved verbatim.
    pub query: SearchQuery,
    /// Film-database resolver outcome.
    pub film_db: ProviderMatch,
    /// Metadata-API resolver outcome.
    pub metadata: ProviderMatch,
    /// Synthesized embed URL.
    pub embed: EmbedReference,
    /// Zero or more verified titles.
    pub titles: Vec<TitleRecord>,
}

impl ResultRow {
    /// Title recorded for the given source, if one was resolved.
    pub fn title_for(&self, source: TitleSource) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.source == source)
            .and_then(|t| t.resolved_title.as_deref())
    }
}
