mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variables consulted, in order, when no API key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["REELSCOUT_TMDB_API_KEY", "TMDB_API_KEY"];

/// Upper bound on `http.max_retries`.
const MAX_RETRIES_LIMIT: u32 = 10;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./reelscout.toml",
        "./config.toml",
        "~/.config/reelscout/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Fill the API key from the environment when the file leaves it unset.
fn apply_env_overrides(config: &mut Config) {
    let configured = config
        .providers
        .tmdb_api_key
        .as_deref()
        .is_some_and(|k| !k.trim().is_empty());
    if configured {
        return;
    }

    config.providers.tmdb_api_key = API_KEY_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty());
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    for (name, url) in [
        ("providers.tmdb_base_url", &config.providers.tmdb_base_url),
        ("providers.filmdb_base_url", &config.providers.filmdb_base_url),
        ("embed.base_url", &config.embed.base_url),
    ] {
        reqwest::Url::parse(url).with_context(|| format!("{name} is not a valid URL: {url}"))?;
    }

    if config.output.file_stem.trim().is_empty() {
        anyhow::bail!("output.file_stem cannot be empty");
    }

    if config.http.max_retries > MAX_RETRIES_LIMIT {
        anyhow::bail!(
            "http.max_retries is {} but cannot exceed {}",
            config.http.max_retries,
            MAX_RETRIES_LIMIT
        );
    }

    if config.input.title_column == config.input.year_column {
        anyhow::bail!("input.title_column and input.year_column must differ");
    }

    if config.providers.tmdb_api_key.is_none() {
        tracing::warn!("No metadata API key configured; metadata lookups will be skipped");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerifyStrategy;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn clear_env() {
        for var in API_KEY_ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_to_empty_file() {
        clear_env();
        let file = write_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.embed.base_url, "https://vidsrc.to/embed");
        assert_eq!(config.input.title_column, "Movie Name");
        assert_eq!(config.input.year_column, "Release Year");
        assert_eq!(config.output.file_stem, "movie_search_results");
        assert_eq!(config.http.max_retries, 0);
        assert!(config.http.timeout_secs.is_none());
        assert!(config.providers.tmdb_api_key.is_none());
        assert_eq!(config.pipeline.strategy, VerifyStrategy::ByUrl);
    }

    #[test]
    #[serial]
    fn parses_all_sections() {
        clear_env();
        let file = write_config(
            r#"
[providers]
tmdb_api_key = "file-key"
tmdb_base_url = "http://localhost:9000/3"

[embed]
base_url = "https://embed.example/e"

[http]
timeout_secs = 15
max_retries = 2

[output]
dir = "out"
file_stem = "results"

[pipeline]
strategy = "embedded-id"
"#,
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.providers.tmdb_api_key.as_deref(), Some("file-key"));
        assert_eq!(config.providers.tmdb_base_url, "http://localhost:9000/3");
        assert_eq!(config.embed.base_url, "https://embed.example/e");
        assert_eq!(config.http.timeout_secs, Some(15));
        assert_eq!(config.http.max_retries, 2);
        assert_eq!(config.output.dir, std::path::PathBuf::from("out"));
        assert_eq!(config.pipeline.strategy, VerifyStrategy::EmbeddedId);
    }

    #[test]
    #[serial]
    fn api_key_falls_back_to_environment() {
        clear_env();
        std::env::set_var("TMDB_API_KEY", "env-key");
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        clear_env();

        assert_eq!(config.providers.tmdb_api_key.as_deref(), Some("env-key"));
    }

    #[test]
    #[serial]
    fn file_api_key_wins_over_environment() {
        clear_env();
        std::env::set_var("REELSCOUT_TMDB_API_KEY", "env-key");
        let file = write_config("[providers]\ntmdb_api_key = \"file-key\"\n");
        let config = load_config(file.path()).unwrap();
        clear_env();

        assert_eq!(config.providers.tmdb_api_key.as_deref(), Some("file-key"));
    }

    #[test]
    #[serial]
    fn rejects_invalid_base_url() {
        clear_env();
        let file = write_config("[embed]\nbase_url = \"not a url\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("embed.base_url"));
    }

    #[test]
    #[serial]
    fn rejects_excessive_retries() {
        clear_env();
        let file = write_config("[http]\nmax_retries = 50\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    #[serial]
    fn rejects_empty_file_stem() {
        clear_env();
        let file = write_config("[output]\nfile_stem = \"  \"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/reelscout.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
