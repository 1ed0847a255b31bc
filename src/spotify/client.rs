use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config,
    management::TokenManager,
    services::SourceCatalog,
    spotify::auth::AuthError,
    types::{
        PlaylistDetailsResponse, PlaylistSummary, PlaylistTracksResponse, Track,
        UserPlaylistsResponse,
    },
};

/// Failure while fetching data from the Spotify Web API.
///
/// All variants are fatal to a migration run and propagate untranslated.
#[derive(Debug)]
pub enum SourceFetchError {
    Http(reqwest::Error),
    Auth(AuthError),
}

impl From<reqwest::Error> for SourceFetchError {
    fn from(err: reqwest::Error) -> Self {
        SourceFetchError::Http(err)
    }
}

impl From<AuthError> for SourceFetchError {
    fn from(err: AuthError) -> Self {
        SourceFetchError::Auth(err)
    }
}

impl fmt::Display for SourceFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFetchError::Http(e) => write!(f, "Spotify API request failed: {}", e),
            SourceFetchError::Auth(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SourceFetchError {}

/// Typed client for the Spotify Web API endpoints playlift reads from.
///
/// Holds the token manager handed over by the entry point; tokens are
/// renewed transparently before each request when needed.
pub struct SpotifyClient {
    http: Client,
    token: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(token_manager: TokenManager) -> Self {
        SpotifyClient {
            http: Client::new(),
            token: Mutex::new(token_manager),
        }
    }

    /// Fetches a playlist's name and description.
    pub async fn playlist_name_desc(
        &self,
        playlist_id: &str,
    ) -> Result<(String, String), SourceFetchError> {
        let url = format!(
            "{uri}/playlists/{id}?fields=name,description",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );
        let details: PlaylistDetailsResponse = self.get_json(&url).await?;
        Ok((details.name, details.description.unwrap_or_default()))
    }

    /// Fetches every track of a playlist, following `next` page URLs until
    /// the listing is exhausted. Entries whose track object is gone from the
    /// catalog (removed or region-blocked) come back as null and are not
    /// representable as a [`Track`].
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, SourceFetchError> {
        let mut url = format!(
            "{uri}/playlists/{id}/tracks?fields=next,items(track(name,album(name)))",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );

        let mut tracks: Vec<Track> = Vec::new();
        loop {
            let page: PlaylistTracksResponse = self.get_json(&url).await?;
            for item in page.items {
                if let Some(track) = item.track {
                    tracks.push(Track {
                        title: track.name,
                        album: track.album.name,
                    });
                }
            }

            match page.next {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(tracks)
    }

    /// Fetches the authorized user's playlists, paginated.
    pub async fn my_playlists(&self) -> Result<Vec<PlaylistSummary>, SourceFetchError> {
        let mut url = format!(
            "{uri}/me/playlists?limit=50",
            uri = &config::spotify_apiurl()
        );

        let mut playlists: Vec<PlaylistSummary> = Vec::new();
        loop {
            let page: UserPlaylistsResponse = self.get_json(&url).await?;
            playlists.extend(page.items);

            match page.next {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(playlists)
    }

    /// Performs an authenticated GET and decodes the JSON body.
    ///
    /// 502 Bad Gateway responses are retried after a delay; the Spotify API
    /// intermittently serves these under load.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceFetchError> {
        loop {
            let token = self.token.lock().await.get_valid_token().await?;

            let response = self.http.get(url).bearer_auth(token).send().await;

            let response = match response {
                Ok(resp) => match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err.into()); // propagate other errors
                    }
                },
                Err(err) => {
                    return Err(err.into());
                } // network or reqwest error
            };

            return Ok(response.json::<T>().await?);
        }
    }
}

#[async_trait]
impl SourceCatalog for SpotifyClient {
    async fn playlist_name_desc(
        &self,
        playlist_id: &str,
    ) -> Result<(String, String), SourceFetchError> {
        SpotifyClient::playlist_name_desc(self, playlist_id).await
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, SourceFetchError> {
        SpotifyClient::playlist_tracks(self, playlist_id).await
    }
}
