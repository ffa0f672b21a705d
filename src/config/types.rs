use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::verify::VerifyStrategy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub embed: EmbedConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// API key for the metadata REST API, sent as the `api_key` query parameter.
    /// Falls back to `REELSCOUT_TMDB_API_KEY` / `TMDB_API_KEY` when unset.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,

    #[serde(default = "default_filmdb_base_url")]
    pub filmdb_base_url: String,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_filmdb_base_url() -> String {
    "https://v3.sg.media-imdb.com".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_base_url: default_tmdb_base_url(),
            filmdb_base_url: default_filmdb_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedConfig {
    /// Base of the embed service; `/movie/<id>` is appended.
    #[serde(default = "default_embed_base_url")]
    pub base_url: String,
}

fn default_embed_base_url() -> String {
    "https://vidsrc.to/embed".to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: default_embed_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds. Unset leaves the client default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra attempts for retryable failures (transport, 429, 5xx).
    /// Zero keeps every failure a plain "no data" outcome.
    #[serde(default)]
    pub max_retries: u32,
}

fn default_user_agent() -> String {
    format!("reelscout/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
            max_retries: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_title_column")]
    pub title_column: String,

    #[serde(default = "default_year_column")]
    pub year_column: String,

    /// Optional column holding a comparison URL per row.
    #[serde(default = "default_comparison_column")]
    pub comparison_column: String,
}

fn default_title_column() -> String {
    "Movie Name".to_string()
}
fn default_year_column() -> String {
    "Release Year".to_string()
}
fn default_comparison_column() -> String {
    "Comparison URL".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            title_column: default_title_column(),
            year_column: default_year_column(),
            comparison_column: default_comparison_column(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name without extension; `.html` and `.xlsx` are appended.
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_file_stem() -> String {
    "movie_search_results".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_stem: default_file_stem(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub strategy: VerifyStrategy,
}
