//! TMDB (The Movie Database) metadata provider.
//!
//! Implements [`MovieProvider`] against the TMDB v3 REST API:
//!
//! - `GET /search/movie?api_key&query&year` -- the first result's `id` wins;
//!   TMDB applies the year filter server-side.
//! - `GET /movie/{id}?api_key` -- the detail's `original_title`.
//!
//! Any non-success status is reported as [`LookupError::Status`] and never
//! distinguished from "no data" further up.

use async_trait::async_trait;
use reelscout_common::{LookupError, Provider, SearchQuery};
use serde::Deserialize;
use tracing::debug;

use crate::http::HttpClient;
use crate::metadata::provider::MovieProvider;

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    results: Vec<TmdbMovieSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieSearchResult {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetail {
    original_title: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB metadata provider.
///
/// # Examples
///
/// ```no_run
/// use reelscout::http::HttpClient;
/// use reelscout::metadata::providers::TmdbProvider;
///
/// let provider = TmdbProvider::new(
///     HttpClient::default(),
///     "https://api.themoviedb.org/3".into(),
///     Some("your-api-key".into()),
/// );
/// ```
pub struct TmdbProvider {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbProvider {
    /// Create a provider rooted at `base_url` (e.g. `https://api.themoviedb.org/3`).
    pub fn new(http: HttpClient, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    /// GET `path` with the API key plus `extra_params` and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let url = format!("{}{path}", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key())];
        params.extend_from_slice(extra_params);

        self.http
            .get(&url, &params)
            .await?
            .json::<T>()
            .await
            .map_err(|e| LookupError::unexpected(format!("TMDB {path}: {e}")))
    }
}

#[async_trait]
impl MovieProvider for TmdbProvider {
    fn kind(&self) -> Provider {
        Provider::MetadataApi
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn resolve(&self, query: &SearchQuery) -> Result<Option<String>, LookupError> {
        let year = query.year.to_string();
        debug!(title = %query.title, year = query.year, "TMDB search movie");

        let body: TmdbSearchResponse = self
            .get_json(
                "/search/movie",
                &[("query", query.title.as_str()), ("year", year.as_str())],
            )
            .await?;

        Ok(body.results.first().map(|r| r.id.to_string()))
    }

    async fn title_for(&self, id: &str) -> Result<Option<String>, LookupError> {
        debug!(id, "TMDB get movie detail");
        let detail: TmdbMovieDetail = self.get_json(&format!("/movie/{id}"), &[]).await?;
        Ok(detail.original_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> TmdbProvider {
        TmdbProvider::new(
            HttpClient::default(),
            format!("{}/3/", server.uri()),
            Some("test-key".into()),
        )
    }

    #[tokio::test]
    async fn search_returns_first_result_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("query", "Inception"))
            .and(query_param("year", "2010"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 1,
                "results": [
                    { "id": 27205, "title": "Inception" },
                    { "id": 64956, "title": "Inception: The Cobol Job" }
                ]
            })))
            .mount(&server)
            .await;

        let id = provider(&server)
            .resolve(&SearchQuery::new("Inception", 2010))
            .await
            .unwrap();
        assert_eq!(id.as_deref(), Some("27205"));
    }

    #[tokio::test]
    async fn empty_results_is_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
            )
            .mount(&server)
            .await;

        let id = provider(&server)
            .resolve(&SearchQuery::new("Unknown Obscure Film XYZ", 1899))
            .await
            .unwrap();
        assert!(id.is_none());
    }

    #[tokio::test]
    async fn unauthorized_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = provider(&server)
            .resolve(&SearchQuery::new("Heat", 1995))
            .await
            .unwrap_err();
        assert_matches!(err, LookupError::Status(401));
    }

    #[tokio::test]
    async fn missing_results_field_is_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })),
            )
            .mount(&server)
            .await;

        let err = provider(&server)
            .resolve(&SearchQuery::new("Heat", 1995))
            .await
            .unwrap_err();
        assert_matches!(err, LookupError::UnexpectedResponse(_));
    }

    #[tokio::test]
    async fn detail_returns_original_title() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/129"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 129,
                "title": "Spirited Away",
                "original_title": "千と千尋の神隠し"
            })))
            .mount(&server)
            .await;

        let title = provider(&server).title_for("129").await.unwrap();
        assert_eq!(title.as_deref(), Some("千と千尋の神隠し"));
    }

    #[tokio::test]
    async fn detail_not_found_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/0"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = provider(&server).title_for("0").await.unwrap_err();
        assert_matches!(err, LookupError::Status(404));
    }

    #[test]
    fn availability_requires_key() {
        let with_key = TmdbProvider::new(HttpClient::default(), "http://x".into(), Some("k".into()));
        assert!(with_key.is_available());

        let blank = TmdbProvider::new(HttpClient::default(), "http://x".into(), Some("  ".into()));
        assert!(!blank.is_available());

        let none = TmdbProvider::new(HttpClient::default(), "http://x".into(), None);
        assert!(!none.is_available());
        assert_eq!(none.kind(), Provider::MetadataApi);
    }
}
