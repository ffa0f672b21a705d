//! Trait definition for movie identifier providers.
//!
//! This module defines the [`MovieProvider`] trait that both lookup backends
//! (the film database and the metadata REST API) implement. A provider maps a
//! [`SearchQuery`] to its own identifier and an identifier back to a catalog
//! title.

use async_trait::async_trait;
use reelscout_common::{LookupError, Provider, SearchQuery};

/// Async trait that all identifier providers must implement.
///
/// `Ok(None)` means the provider answered but had no acceptable match. An
/// `Err` classifies why no answer was obtained; callers in the pipeline fold
/// both into an absent field.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Which of the two providers this is.
    fn kind(&self) -> Provider;

    /// Returns `true` when the provider is configured and ready to serve
    /// requests. Unavailable providers are never queried.
    fn is_available(&self) -> bool;

    /// Resolve a title/year pair to this provider's identifier.
    ///
    /// The returned id is in the provider's canonical bare form (film-database
    /// ids without the `tt` prefix, metadata ids as decimal strings).
    async fn resolve(&self, query: &SearchQuery) -> Result<Option<String>, LookupError>;

    /// Look up the catalog title for an identifier in the same bare form.
    async fn title_for(&self, id: &str) -> Result<Option<String>, LookupError>;
}
