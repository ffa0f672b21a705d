//! Reelscout - movie title to embed URL resolver
//!
//! This library crate exposes the resolution pipeline for the CLI and for
//! integration testing.

pub mod config;
pub mod embed;
pub mod export;
pub mod http;
pub mod input;
pub mod metadata;
pub mod pipeline;
pub mod verify;

pub use reelscout_common as common;
