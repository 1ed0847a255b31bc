//! Configuration management for playlift.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, API
//! endpoints, and the location of the YouTube Music browser credentials.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `playlift/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playlift/.env`
/// - macOS: `~/Library/Application Support/playlift/.env`
/// - Windows: `%LOCALAPPDATA%/playlift/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlift/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. Together with
/// the client ID it authenticates the Client Credentials token request.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth token endpoint.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL where Client Credentials grants are exchanged for access tokens.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the YouTube Music API base URL.
///
/// Retrieves the `YTMUSIC_API_URL` environment variable which contains the
/// base URL for the YouTube Music endpoints used for searching songs and
/// managing playlists.
///
/// # Panics
///
/// Panics if the `YTMUSIC_API_URL` environment variable is not set.
pub fn ytmusic_apiurl() -> String {
    env::var("YTMUSIC_API_URL").expect("YTMUSIC_API_URL must be set")
}

/// Returns the path of the YouTube Music browser credentials file.
///
/// The `YTMUSIC_CREDS_FILE` environment variable overrides the default
/// location of `playlift/creds/ytm_browser.json` inside the platform-specific
/// local data directory. The file holds the request headers exported from a
/// logged-in music.youtube.com browser session.
pub fn ytmusic_creds_file() -> PathBuf {
    match env::var("YTMUSIC_CREDS_FILE") {
        Ok(file) => PathBuf::from(file),
        Err(_) => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("playlift/creds/ytm_browser.json");
            path
        }
    }
}
