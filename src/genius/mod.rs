//! # Genius Catalog Module
//!
//! This module walks the Genius API the way the collector needs it:
//!
//! ```text
//! artist name ──search──▶ CatalogArtist
//!                              │
//!                 /artists/{id}/songs?page=n
//!                              │
//!              /songs/{id} + lyrics page ──▶ SongRecord
//! ```
//!
//! ## Submodules
//!
//! - [`artists`] - Resolves an artist name to its catalog id by scanning
//!   search pages until a primary artist matches or a page comes back empty.
//! - [`songs`] - Pages through an artist's songs and hydrates them one at a
//!   time through [`SongStream`].
//! - [`lyrics`] - Pulls lyric lines out of a song's public page.
//!
//! ## Error Handling
//!
//! Exhausted retries surface as [`CatalogError::Fetch`] and end the run. An
//! artist that cannot be found is [`CatalogError::ArtistNotFound`], which the
//! caller skips. Missing lyrics are never an error.

pub mod artists;
pub mod lyrics;
pub mod songs;

use thiserror::Error;

use crate::{
    config,
    http::{FetchError, Fetcher, HttpTransport, Transport},
};

pub use songs::SongStream;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no primary artist named {0:?} in the search results")]
    ArtistNotFound(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Entry point to the Genius catalog.
///
/// Owns the [`Fetcher`] every request goes through; nothing in this module
/// keeps a session of its own.
pub struct Genius<T = HttpTransport> {
    fetcher: Fetcher<T>,
    api_url: String,
    search_page_limit: u32,
}

impl Genius<HttpTransport> {
    /// Builds a catalog client from the environment configuration.
    pub fn from_config(token: String) -> Self {
        let fetcher =
            Fetcher::new(HttpTransport::new(token)).with_attempts(config::fetch_attempts());
        Self::new(fetcher, config::genius_api_url())
            .with_search_page_limit(config::search_page_limit())
    }
}

impl<T: Transport> Genius<T> {
    pub fn new(fetcher: Fetcher<T>, api_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            search_page_limit: config::DEFAULT_SEARCH_PAGE_LIMIT,
        }
    }

    pub fn with_search_page_limit(mut self, limit: u32) -> Self {
        self.search_page_limit = limit.max(1);
        self
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
