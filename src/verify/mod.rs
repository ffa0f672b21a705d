//! Title verification for synthesized embed URLs and comparison URLs.
//!
//! A row's embed reference is verified with one [`VerifyStrategy`]:
//!
//! - [`VerifyStrategy::ByUrl`] fetches the embed page and reads `<title>`.
//! - [`VerifyStrategy::ById`] asks the providers for the catalog title of the
//!   row's identifiers (film database first, metadata API second).
//! - [`VerifyStrategy::EmbeddedId`] recovers an identifier from the embed URL
//!   string (see [`embedded`]) and looks that up, falling back to the row's
//!   metadata id when the URL shape is not recognized.
//!
//! Comparison URLs are always verified by URL. Every failure yields a
//! [`TitleRecord`] with `resolved_title: None`.

pub mod embedded;
pub mod page;

use clap::ValueEnum;
use reelscout_common::{EmbedReference, FilmDbId, MetadataId, TitleRecord, TitleSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http::HttpClient;
use crate::metadata::Resolvers;

pub use embedded::{extract_embedded_id, EmbeddedId};
pub use page::extract_title;

/// How a row's embed reference is turned into a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VerifyStrategy {
    /// Fetch the embed page and read its `<title>`.
    #[default]
    ByUrl,
    /// Look up the catalog title from the resolved identifiers.
    ById,
    /// Recover an identifier from the embed URL string, then look it up.
    EmbeddedId,
}

impl std::fmt::Display for VerifyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByUrl => write!(f, "by-url"),
            Self::ById => write!(f, "by-id"),
            Self::EmbeddedId => write!(f, "embedded-id"),
        }
    }
}

/// Produces [`TitleRecord`]s for a row.
#[derive(Clone)]
pub struct TitleVerifier {
    http: HttpClient,
    resolvers: Resolvers,
    strategy: VerifyStrategy,
}

impl TitleVerifier {
    pub fn new(http: HttpClient, resolvers: Resolvers, strategy: VerifyStrategy) -> Self {
        Self {
            http,
            resolvers,
            strategy,
        }
    }

    pub fn strategy(&self) -> VerifyStrategy {
        self.strategy
    }

    /// Trimmed `<title>` of the page at `url`, or `None` on any failure.
    pub async fn fetch_title(&self, url: &str) -> Option<String> {
        match page::fetch_page_title(&self.http, url).await {
            Ok(title) => {
                if title.is_none() {
                    debug!(url, "Page has no title element");
                }
                title
            }
            Err(e) => {
                warn!(url, "Title fetch failed, treating as absent: {}", e);
                None
            }
        }
    }

    /// Verify the embed reference with the configured strategy.
    pub async fn verify_embed(
        &self,
        embed: &EmbedReference,
        film_db: Option<&FilmDbId>,
        metadata: Option<MetadataId>,
    ) -> TitleRecord {
        let resolved_title = match self.strategy {
            VerifyStrategy::ByUrl => match embed.url.as_deref() {
                Some(url) => self.fetch_title(url).await,
                None => None,
            },
            VerifyStrategy::ById => self.title_from_ids(film_db, metadata).await,
            VerifyStrategy::EmbeddedId => match embed.url.as_deref() {
                Some(url) => self.title_from_embedded_id(url, metadata).await,
                None => None,
            },
        };

        TitleRecord {
            source: TitleSource::Embed,
            resolved_title,
        }
    }

    /// Verify an externally supplied comparison URL by fetching it.
    pub async fn verify_comparison(&self, url: &str) -> TitleRecord {
        TitleRecord {
            source: TitleSource::Comparison,
            resolved_title: self.fetch_title(url).await,
        }
    }

    async fn title_from_ids(
        &self,
        film_db: Option<&FilmDbId>,
        metadata: Option<MetadataId>,
    ) -> Option<String> {
        if let Some(id) = film_db {
            return self.resolvers.title_from_film_db_id(id).await;
        }
        match metadata {
            Some(id) => self.resolvers.title_from_metadata_id(id).await,
            None => None,
        }
    }

    async fn title_from_embedded_id(
        &self,
        url: &str,
        fallback_metadata: Option<MetadataId>,
    ) -> Option<String> {
        match extract_embedded_id(url) {
            Some(EmbeddedId::FilmDb(id)) => self.resolvers.title_from_film_db_id(&id).await,
            Some(EmbeddedId::Metadata(id)) => self.resolvers.title_from_metadata_id(id).await,
            None => {
                debug!(url, "No embedded id recognized, using row metadata id");
                match fallback_metadata {
                    Some(id) => self.resolvers.title_from_metadata_id(id).await,
                    None => None,
                }
            }
        }
    }
}
