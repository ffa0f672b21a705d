//! Identifier recovery from an embed URL string.
//!
//! This is a substring heuristic, not URL parsing. It recognizes exactly two
//! shapes and nothing else:
//!
//! - a URL ending in `tt<digits>` (e.g. `.../movie/tt1375666`), taken from the
//!   last `tt` in the string;
//! - a URL ending in `tmdb=<digits>` (e.g. `...?tmdb=27205`), taken from the
//!   last `tmdb=` in the string.
//!
//! Anything else, including trailing slashes or extra query parameters after
//! the id, is unrecognized.

use reelscout_common::{FilmDbId, MetadataId};

/// Identifier found inside a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddedId {
    FilmDb(FilmDbId),
    Metadata(MetadataId),
}

/// Recover a provider id from the tail of `url`.
pub fn extract_embedded_id(url: &str) -> Option<EmbeddedId> {
    if let Some((_, tail)) = url.rsplit_once("tt") {
        if is_digits(tail) {
            return FilmDbId::parse(tail).map(EmbeddedId::FilmDb);
        }
    }

    if let Some((_, tail)) = url.rsplit_once("tmdb=") {
        if is_digits(tail) {
            return tail.parse::<u64>().ok().map(|id| EmbeddedId::Metadata(id.into()));
        }
    }

    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
