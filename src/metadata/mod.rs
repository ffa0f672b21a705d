//! Identifier resolvers for the two external movie catalogs.
//!
//! # Module layout
//!
//! - [`provider`] -- The [`MovieProvider`] trait.
//! - [`providers`] -- Concrete implementations (film database, TMDB).
//!
//! [`Resolvers`] bundles one provider of each kind and applies the lenient
//! failure policy: every lookup error is logged and becomes `None`.

pub mod provider;
pub mod providers;

use std::sync::Arc;

use reelscout_common::{FilmDbId, LookupError, MetadataId, SearchQuery};
use tracing::{debug, warn};

pub use provider::MovieProvider;
pub use providers::{FilmDbProvider, TmdbProvider};

/// The pair of providers a row is resolved against.
#[derive(Clone)]
pub struct Resolvers {
    film_db: Arc<dyn MovieProvider>,
    metadata: Arc<dyn MovieProvider>,
}

impl Resolvers {
    /// Bundle a film-database provider and a metadata-API provider.
    pub fn new(film_db: Arc<dyn MovieProvider>, metadata: Arc<dyn MovieProvider>) -> Self {
        Self { film_db, metadata }
    }

    /// Film-database id for the query, or `None`.
    pub async fn resolve_film_db(&self, query: &SearchQuery) -> Option<FilmDbId> {
        let raw = absent_on_error(
            self.film_db.as_ref(),
            "resolve",
            &query.title,
            run_if_available(self.film_db.as_ref(), self.film_db.resolve(query)).await,
        )?;
        let id = FilmDbId::parse(&raw);
        if id.is_none() {
            warn!(provider = %self.film_db.kind(), id = %raw, "Discarding malformed film-database id");
        }
        id
    }

    /// Metadata-API id for the query, or `None`.
    pub async fn resolve_metadata(&self, query: &SearchQuery) -> Option<MetadataId> {
        let raw = absent_on_error(
            self.metadata.as_ref(),
            "resolve",
            &query.title,
            run_if_available(self.metadata.as_ref(), self.metadata.resolve(query)).await,
        )?;
        match raw.parse::<u64>() {
            Ok(id) => Some(MetadataId::new(id)),
            Err(_) => {
                warn!(provider = %self.metadata.kind(), id = %raw, "Discarding non-numeric metadata id");
                None
            }
        }
    }

    /// Catalog title for a film-database id, or `None`.
    pub async fn title_from_film_db_id(&self, id: &FilmDbId) -> Option<String> {
        absent_on_error(
            self.film_db.as_ref(),
            "title lookup",
            id.as_str(),
            run_if_available(self.film_db.as_ref(), self.film_db.title_for(id.as_str())).await,
        )
    }

    /// Original title for a metadata id, or `None`.
    pub async fn title_from_metadata_id(&self, id: MetadataId) -> Option<String> {
        let id = id.to_string();
        absent_on_error(
            self.metadata.as_ref(),
            "title lookup",
            &id,
            run_if_available(self.metadata.as_ref(), self.metadata.title_for(&id)).await,
        )
    }
}

/// Await `fut` only when the provider is available; otherwise report no match.
async fn run_if_available<F>(
    provider: &dyn MovieProvider,
    fut: F,
) -> Result<Option<String>, LookupError>
where
    F: std::future::Future<Output = Result<Option<String>, LookupError>>,
{
    if !provider.is_available() {
        debug!(provider = %provider.kind(), "Provider unavailable, skipping lookup");
        return Ok(None);
    }
    fut.await
}

fn absent_on_error(
    provider: &dyn MovieProvider,
    op: &str,
    subject: &str,
    outcome: Result<Option<String>, LookupError>,
) -> Option<String> {
    match outcome {
        Ok(value) => {
            if value.is_none() {
                debug!(provider = %provider.kind(), op, subject, "No match");
            }
            value
        }
        Err(e) => {
            warn!(
                provider = %provider.kind(),
                op,
                subject,
                retryable = e.is_retryable(),
                "Lookup failed, treating as absent: {}",
                e
            );
            None
        }
    }
}
