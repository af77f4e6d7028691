//! # ytbridge-innertube
//!
//! `YouTube` Music `InnerTube` client for ytbridge.
//!
//! This crate builds `InnerTube` requests, hands them to an injected
//! [`Transport`], and decodes the loosely-typed responses into the closed
//! result model of `ytbridge-core`. [`YouTubeSearch`] is the search provider
//! built on top of it.

pub mod classifier;
pub mod client;
pub mod context;
pub mod endpoints;
pub mod navigator;
pub mod search;
pub mod suggest;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

#[cfg(test)]
mod fixtures;

pub use classifier::{classify_suggestions, Classification, SkipReason};
pub use client::{CallScope, InnerTubeClient};
pub use context::ClientContext;
pub use navigator::Nav;
pub use search::{YouTubeSearch, MUSIC_SEARCH_PREFIX, SEARCH_PREFIX};
pub use transport::{HttpRequest, Method, ReqwestTransport, Transport};
