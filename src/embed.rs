//! Embed URL synthesis.
//!
//! Maps a row's resolved identifiers to the embed service's movie URL. The
//! film-database id is preferred and carries the service's `tt` prefix; the
//! metadata id is used bare. No check is made that the URL resolves.

use reelscout_common::{EmbedReference, FilmDbId, MetadataId};

/// Builds embed URLs under a fixed base such as `https://vidsrc.to/embed`.
#[derive(Debug, Clone)]
pub struct EmbedSynthesizer {
    base_url: String,
}

impl EmbedSynthesizer {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/movie/tt{film_db}` if present, else `{base}/movie/{metadata}`,
    /// else `None`.
    pub fn synthesize(
        &self,
        film_db: Option<&FilmDbId>,
        metadata: Option<MetadataId>,
    ) -> EmbedReference {
        let url = match (film_db, metadata) {
            (Some(id), _) => Some(format!("{}/movie/{}", self.base_url, id.prefixed())),
            (None, Some(id)) => Some(format!("{}/movie/{}", self.base_url, id)),
            (None, None) => None,
        };
        EmbedReference { url }
    }
}
