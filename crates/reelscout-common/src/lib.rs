//! Reelscout-Common: Shared row types, identifiers, and errors.
//!
//! This crate provides the data model passed between reelscout's stages:
//!
//! - **Typed IDs**: [`FilmDbId`] and [`MetadataId`] so the two providers'
//!   identifiers cannot be mixed up
//! - **Row Types**: [`SearchQuery`] in, [`ResultRow`] out, with the optional
//!   per-stage values in between
//! - **Error Handling**: the lookup taxonomy ([`LookupError`]) and the
//!   boundary error type ([`Error`], [`Result`])
//!
//! # Examples
//!
//! ```
//! use reelscout_common::{FilmDbId, MetadataId, SearchQuery};
//!
//! let query = SearchQuery::new("Inception", 2010);
//! assert_eq!(query.year, 2010);
//!
//! let id = FilmDbId::parse("tt1375666").unwrap();
//! assert_eq!(id.as_str(), "1375666");
//! assert_eq!(MetadataId::new(27205).to_string(), "27205");
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, LookupError, Result};
pub use ids::*;
pub use types::*;
