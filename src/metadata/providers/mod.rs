//! Concrete provider implementations.
//!
//! Each submodule wraps a single external catalog and implements the
//! [`MovieProvider`](super::MovieProvider) trait.

pub mod filmdb;
pub mod tmdb;

pub use filmdb::FilmDbProvider;
pub use tmdb::TmdbProvider;
