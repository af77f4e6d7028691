//! # ytbridge-core
//!
//! Core types, traits, and error handling shared by the ytbridge crates.
//!
//! Everything in here is provider-agnostic: the normalized result model,
//! the lyrics model, locale resolution, and the provider capabilities that
//! catalog backends implement.

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::SearchConfig;
pub use error::{DecodeError, Error, HttpError, Result};
pub use provider::{LyricsProvider, ProviderRegistry, SearchProvider};
pub use types::*;
