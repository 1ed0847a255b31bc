use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Whether the token has expired or will expire within `buffer_secs`.
    pub fn is_expired(&self, buffer_secs: u64) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= (self.obtained_at + self.expires_in).saturating_sub(buffer_secs)
    }
}

/// A single song as it appears in a source playlist.
///
/// Immutable value type; two tracks are equal when both fields are equal.
/// The album may be empty for singles or tracks whose metadata is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub album: String,
}

// --- Spotify Web API responses ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDetailsResponse {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub name: String,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksTotal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksTotal {
    pub total: u64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub id: String,
    pub tracks: u64,
}

// --- YouTube Music API requests/responses ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSongsRequest {
    pub query: String,
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSongsResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub video_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryPlaylistsResponse {
    pub playlists: Vec<LibraryPlaylist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryPlaylist {
    pub playlist_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub title: String,
    pub description: String,
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistResponse {
    pub playlist_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlaylistItemsRequest {
    pub playlist_id: String,
    pub video_ids: Vec<String>,
    pub duplicates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlaylistItemsResponse {
    pub status: String,
}
