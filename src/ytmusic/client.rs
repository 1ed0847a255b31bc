use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config,
    services::DestinationCatalog,
    types::{
        AddPlaylistItemsRequest, AddPlaylistItemsResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, LibraryPlaylist, LibraryPlaylistsResponse, SearchSongsRequest,
        SearchSongsResponse,
    },
    warning,
    ytmusic::creds::BrowserCredentials,
};

/// Failure while talking to the YouTube Music API.
#[derive(Debug)]
pub enum DestinationError {
    Http(reqwest::Error),
    Api(String),
}

impl From<reqwest::Error> for DestinationError {
    fn from(err: reqwest::Error) -> Self {
        DestinationError::Http(err)
    }
}

impl fmt::Display for DestinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationError::Http(e) => write!(f, "YouTube Music request failed: {}", e),
            DestinationError::Api(msg) => write!(f, "YouTube Music request failed: {}", msg),
        }
    }
}

impl std::error::Error for DestinationError {}

/// Client for the YouTube Music endpoints playlift writes to.
///
/// Every request replays the browser session headers; there is no token
/// lifecycle on this side.
pub struct YtMusicClient {
    http: Client,
    creds: BrowserCredentials,
    api_url: String,
}

impl YtMusicClient {
    pub fn new(creds: BrowserCredentials) -> Self {
        YtMusicClient {
            http: Client::new(),
            creds,
            api_url: config::ytmusic_apiurl(),
        }
    }

    /// Fetches the playlists in the user's library.
    pub async fn library_playlists(&self) -> Result<Vec<LibraryPlaylist>, DestinationError> {
        let response: LibraryPlaylistsResponse =
            self.post_json("library/playlists", &serde_json::json!({})).await?;
        Ok(response.playlists)
    }

    /// Looks up a library playlist by exact title.
    pub async fn find_playlist_by_name(
        &self,
        name: &str,
    ) -> Result<Option<String>, DestinationError> {
        let playlists = self.library_playlists().await?;
        Ok(playlists
            .into_iter()
            .find(|playlist| playlist.title == name)
            .map(|playlist| playlist.playlist_id))
    }

    /// Creates a private playlist and returns its id.
    ///
    /// A creation failure reported by the remote service (as opposed to a
    /// transport error) yields an empty id; callers treat that as the signal
    /// that no playlist exists to work with.
    pub async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, DestinationError> {
        let request = CreatePlaylistRequest {
            title: name.to_string(),
            description: description.to_string(),
            privacy_status: "PRIVATE".to_string(),
        };

        let response: CreatePlaylistResponse =
            self.post_json("playlists/create", &request).await?;

        match response.playlist_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => {
                warning!(
                    "YouTube Music playlist creation failed. name={} error={}",
                    name,
                    response.error.unwrap_or_else(|| "unknown".to_string())
                );
                Ok(String::new())
            }
        }
    }

    /// Searches for a song and returns the first result's video id.
    ///
    /// An empty result list is a normal outcome, not an error.
    pub async fn search_track(&self, query: &str) -> Result<Option<String>, DestinationError> {
        let request = SearchSongsRequest {
            query: query.to_string(),
            filter: "songs".to_string(),
        };

        let response: SearchSongsResponse = self.post_json("search", &request).await?;
        Ok(response.results.into_iter().next().map(|r| r.video_id))
    }

    /// Adds videos to a playlist in one call.
    ///
    /// Returns whether the remote service reported success; a `false` means
    /// the playlist exists but some or all items were rejected.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        video_ids: &[String],
        allow_duplicates: bool,
    ) -> Result<bool, DestinationError> {
        let request = AddPlaylistItemsRequest {
            playlist_id: playlist_id.to_string(),
            video_ids: video_ids.to_vec(),
            duplicates: allow_duplicates,
        };

        let response: AddPlaylistItemsResponse =
            self.post_json("playlists/add_items", &request).await?;

        if response.status.to_lowercase().contains("succeed") {
            Ok(true)
        } else {
            warning!(
                "Error response from YouTube Music while adding songs to playlist: {}",
                response.status
            );
            Ok(false)
        }
    }

    /// Performs a POST with the browser session headers and decodes the
    /// JSON body.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DestinationError> {
        let url = format!("{uri}/{path}", uri = self.api_url, path = path);

        let mut request = self
            .http
            .post(&url)
            .header("Cookie", &self.creds.cookie)
            .header("Authorization", &self.creds.authorization)
            .json(body);

        if let Some(user_agent) = &self.creds.user_agent {
            request = request.header("User-Agent", user_agent);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DestinationCatalog for YtMusicClient {
    async fn find_playlist_by_name(&self, name: &str) -> Result<Option<String>, DestinationError> {
        YtMusicClient::find_playlist_by_name(self, name).await
    }

    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, DestinationError> {
        YtMusicClient::create_playlist(self, name, description).await
    }

    async fn search_track(&self, query: &str) -> Result<Option<String>, DestinationError> {
        YtMusicClient::search_track(self, query).await
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        video_ids: &[String],
        allow_duplicates: bool,
    ) -> Result<bool, DestinationError> {
        YtMusicClient::add_tracks(self, playlist_id, video_ids, allow_duplicates).await
    }
}
