//! Configuration management for the Genius song collector.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use thiserror::Error;

/// Base URL of the Genius API used when `GENIUS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.genius.com";

/// Number of attempts a request gets before the run is aborted.
pub const DEFAULT_FETCH_ATTEMPTS: u32 = 10;

/// Upper bound on search pages scanned while resolving one artist name.
pub const DEFAULT_SEARCH_PAGE_LIMIT: u32 = 50;

/// Artists collected when `GENIUSING_ARTISTS` is not set.
pub const DEFAULT_ARTISTS: &[&str] = &[
    "The Roots",
    "Eve",
    "DJ Jazzy Jeff & The Fresh Prince",
    "Ludacris",
    "T.I.",
    "Kanye West",
    "Chance the Rapper",
    "Common",
    "Gucci Mane",
    "Migos",
    "OutKast",
    "Twista",
    "Crucial Conflict",
    "Lupe Fiasco",
    "Digital Underground",
    "2Pac",
    "Trouble Funk",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GENIUS_ACCESS_TOKEN must be set")]
    MissingToken,
}

/// Loads environment variables from `.env` files.
///
/// Looks for `geniusing/.env` in the platform-specific local data directory
/// and for `.env` in the working directory. Both files are optional;
/// variables that are already set in the process environment are never
/// overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/geniusing/.env`
/// - macOS: `~/Library/Application Support/geniusing/.env`
/// - Windows: `%LOCALAPPDATA%/geniusing/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("geniusing/.env");
    path
}

/// Returns the bearer token for the Genius API.
///
/// # Errors
///
/// Returns [`ConfigError::MissingToken`] if `GENIUS_ACCESS_TOKEN` is unset
/// or empty. The fetch command treats this as a fatal startup error.
pub fn genius_access_token() -> Result<String, ConfigError> {
    parse_token(env::var("GENIUS_ACCESS_TOKEN").ok())
}

/// Trims a raw token value; unset and blank values are rejected.
pub fn parse_token(raw: Option<String>) -> Result<String, ConfigError> {
    match raw.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ConfigError::MissingToken),
    }
}

/// Returns the Genius API base URL without a trailing slash.
pub fn genius_api_url() -> String {
    env::var("GENIUS_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the artist names to collect.
///
/// Reads `GENIUSING_ARTISTS` as a semicolon-separated list, since artist
/// names may contain commas. Falls back to [`DEFAULT_ARTISTS`].
pub fn artists() -> Vec<String> {
    match env::var("GENIUSING_ARTISTS") {
        Ok(list) => parse_artist_list(&list),
        Err(_) => DEFAULT_ARTISTS.iter().map(|a| a.to_string()).collect(),
    }
}

/// Returns the number of attempts per request (`GENIUSING_FETCH_ATTEMPTS`).
pub fn fetch_attempts() -> u32 {
    parse_positive("GENIUSING_FETCH_ATTEMPTS").unwrap_or(DEFAULT_FETCH_ATTEMPTS)
}

/// Returns the search page cap per artist (`GENIUSING_SEARCH_PAGE_LIMIT`).
pub fn search_page_limit() -> u32 {
    parse_positive("GENIUSING_SEARCH_PAGE_LIMIT").unwrap_or(DEFAULT_SEARCH_PAGE_LIMIT)
}

pub fn parse_artist_list(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn parse_positive(key: &str) -> Option<u32> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}
