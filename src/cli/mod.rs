//! # CLI Module
//!
//! User-facing command implementations for playlift. Each command wires the
//! configuration, token cache, and API clients together and presents
//! progress and results with the shared output macros.
//!
//! ## Commands
//!
//! - [`auth`] - Obtains a Spotify access token via Client Credentials and
//!   caches it in the local data directory
//! - [`migrate`] - Migrates one Spotify playlist to YouTube Music
//! - [`playlists`] - Lists the authorized Spotify account's playlists
//!
//! The clients are constructed here, at the outermost layer, and passed
//! down by reference; nothing below holds ambient global state.

mod auth;
mod migrate;
mod playlists;

pub use auth::auth;
pub use migrate::migrate;
pub use playlists::playlists;

use crate::{
    Res,
    config,
    management::{FileTokenStore, TokenManager},
    spotify::client::SpotifyClient,
    ytmusic::{client::YtMusicClient, creds::BrowserCredentials},
};

pub(crate) async fn spotify_client() -> SpotifyClient {
    let token_manager = TokenManager::load(Box::new(FileTokenStore::default())).await;
    SpotifyClient::new(token_manager)
}

pub(crate) async fn ytmusic_client() -> Res<YtMusicClient> {
    let creds = BrowserCredentials::load(&config::ytmusic_creds_file()).await?;
    Ok(YtMusicClient::new(creds))
}
