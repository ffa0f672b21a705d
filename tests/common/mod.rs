//! Shared test harness for integration tests.
//!
//! Provides [`MockCatalog`], a single `wiremock` server standing in for the
//! film database, the metadata API and the embed service at once, plus a
//! [`Config`] pointing every base URL at it.

#![allow(dead_code)]

use reelscout::config::Config;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// Mock server serving all three external collaborators.
pub struct MockCatalog {
    pub server: MockServer,
}

impl MockCatalog {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn embed_base(&self) -> String {
        format!("{}/embed", self.server.uri())
    }

    /// Config whose providers and embed base all target this server.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.providers.filmdb_base_url = self.uri();
        config.providers.tmdb_base_url = format!("{}/3", self.uri());
        config.providers.tmdb_api_key = Some(API_KEY.to_string());
        config.embed.base_url = self.embed_base();
        config
    }

    /// The same config rendered as TOML for CLI tests.
    pub fn config_toml(&self, out_dir: &std::path::Path) -> String {
        format!(
            r#"
[providers]
tmdb_api_key = "{API_KEY}"
tmdb_base_url = "{uri}/3"
filmdb_base_url = "{uri}"

[embed]
base_url = "{uri}/embed"

[output]
dir = "{out}"
file_stem = "results"
"#,
            uri = self.uri(),
            out = out_dir.display()
        )
    }

    /// Film-database suggestions for `query`, in the given order.
    pub async fn film_db_candidates(&self, query: &str, candidates: &[(&str, &str, i32)]) {
        let bucket = query
            .chars()
            .next()
            .map(|c| c.to_lowercase().to_string())
            .unwrap_or_else(|| "x".into());
        let d: Vec<_> = candidates
            .iter()
            .map(|(id, title, year)| json!({ "id": id, "l": title, "y": year, "qid": "movie" }))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/suggestion/{bucket}/{query}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "d": d, "v": 1 })))
            .mount(&self.server)
            .await;
    }

    /// Metadata API search results for `query`/`year`.
    pub async fn metadata_results(&self, query: &str, year: i32, ids: &[u64]) {
        let results: Vec<_> = ids.iter().map(|id| json!({ "id": id })).collect();
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("api_key", API_KEY))
            .and(query_param("query", query))
            .and(query_param("year", year.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
            .mount(&self.server)
            .await;
    }

    /// Metadata API detail with an `original_title`.
    pub async fn metadata_detail(&self, id: u64, original_title: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/3/movie/{id}")))
            .and(query_param("api_key", API_KEY))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": id, "original_title": original_title })),
            )
            .mount(&self.server)
            .await;
    }

    /// An embed page at `/embed/movie/{slug}` with the given raw HTML.
    pub async fn embed_page(&self, slug: &str, status: u16, html: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/embed/movie/{slug}")))
            .respond_with(ResponseTemplate::new(status).set_body_string(html.to_string()))
            .mount(&self.server)
            .await;
    }

    /// Any other request gets an empty-but-valid answer from each collaborator.
    pub async fn fallbacks(&self) {
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .with_priority(10)
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "v": 1 })))
            .with_priority(20)
            .mount(&self.server)
            .await;
    }
}
