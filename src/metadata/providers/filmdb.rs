//! Film-database provider backed by its public title-suggestion endpoint.
//!
//! `GET {base}/suggestion/{first-char}/{query}.json` returns provider-ranked
//! candidates:
//!
//! ```json
//! { "d": [ { "id": "tt1375666", "l": "Inception", "y": 2010, "qid": "movie" } ] }
//! ```
//!
//! Resolution trusts the provider's ranking entirely. The only local rule is
//! the year filter: the first candidate whose `y` equals the query year wins.
//! Candidates without a year, and non-title entries (people, lists), never
//! match.

use async_trait::async_trait;
use reelscout_common::{FilmDbId, LookupError, Provider, SearchQuery};
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::http::HttpClient;
use crate::metadata::provider::MovieProvider;

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    #[serde(default)]
    d: Vec<SuggestionCandidate>,
}

#[derive(Debug, Deserialize)]
struct SuggestionCandidate {
    id: String,
    #[serde(default)]
    l: Option<String>,
    #[serde(default)]
    y: Option<i32>,
}

/// Film-database title search and id lookup.
pub struct FilmDbProvider {
    http: HttpClient,
    base_url: String,
}

impl FilmDbProvider {
    /// Create a provider rooted at `base_url` (e.g. `https://v3.sg.media-imdb.com`).
    pub fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Build the suggestion URL for a free-text query.
    fn suggestion_url(&self, query: &str) -> Result<Url, LookupError> {
        let query = query.trim();
        let bucket = query
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_lowercase().to_string())
            .unwrap_or_else(|| "x".to_string());

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::transport(format!("invalid film-database base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::transport("film-database base URL cannot hold a path"))?
            .pop_if_empty()
            .push("suggestion")
            .push(&bucket)
            .push(&format!("{query}.json"));
        Ok(url)
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<SuggestionCandidate>, LookupError> {
        let url = self.suggestion_url(query)?;
        let body: SuggestionResponse = self
            .http
            .get(url.as_str(), &[])
            .await?
            .json()
            .await
            .map_err(|e| LookupError::unexpected(format!("film-database suggestions: {e}")))?;
        Ok(body.d)
    }
}

/// First candidate, in provider order, released in `year` with a title id.
fn first_for_year(candidates: &[SuggestionCandidate], year: i32) -> Option<FilmDbId> {
    candidates
        .iter()
        .filter(|c| c.y == Some(year))
        .find_map(|c| FilmDbId::parse(&c.id).filter(|_| c.id.starts_with("tt")))
}

#[async_trait]
impl MovieProvider for FilmDbProvider {
    fn kind(&self) -> Provider {
        Provider::FilmDb
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn resolve(&self, query: &SearchQuery) -> Result<Option<String>, LookupError> {
        debug!(title = %query.title, year = query.year, "Film-database title search");
        let candidates = self.suggestions(&query.title).await?;
        let id = first_for_year(&candidates, query.year);
        debug!(
            candidates = candidates.len(),
            matched = id.is_some(),
            "Film-database year filter applied"
        );
        Ok(id.map(|id| id.as_str().to_string()))
    }

    async fn title_for(&self, id: &str) -> Result<Option<String>, LookupError> {
        let Some(id) = FilmDbId::parse(id) else {
            return Ok(None);
        };
        let prefixed = id.prefixed();
        debug!(id = %prefixed, "Film-database id lookup");

        let candidates = self.suggestions(&prefixed).await?;
        Ok(candidates
            .into_iter()
            .find(|c| c.id == prefixed)
            .and_then(|c| c.l))
    }
}
