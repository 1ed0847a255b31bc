#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use playlift::services::{DestinationCatalog, SourceCatalog};
use playlift::spotify::auth::AuthError;
use playlift::spotify::client::SourceFetchError;
use playlift::types::Track;
use playlift::ytmusic::client::DestinationError;

/// Scripted source catalog serving a fixed playlist.
pub struct FakeSource {
    pub name: String,
    pub description: String,
    pub tracks: Vec<Track>,
    pub fail_metadata: bool,
    pub fetch_calls: Mutex<u32>,
}

impl FakeSource {
    pub fn new(name: &str, description: &str, tracks: Vec<Track>) -> Self {
        FakeSource {
            name: name.to_string(),
            description: description.to_string(),
            tracks,
            fail_metadata: false,
            fetch_calls: Mutex::new(0),
        }
    }

    pub fn fetch_count(&self) -> u32 {
        *self.fetch_calls.lock().unwrap()
    }
}

#[async_trait]
impl SourceCatalog for FakeSource {
    async fn playlist_name_desc(
        &self,
        _playlist_id: &str,
    ) -> Result<(String, String), SourceFetchError> {
        if self.fail_metadata {
            return Err(SourceFetchError::Auth(AuthError::InvalidResponse(
                "metadata unavailable".to_string(),
            )));
        }
        Ok((self.name.clone(), self.description.clone()))
    }

    async fn playlist_tracks(&self, _playlist_id: &str) -> Result<Vec<Track>, SourceFetchError> {
        *self.fetch_calls.lock().unwrap() += 1;
        Ok(self.tracks.clone())
    }
}

/// Scripted destination catalog that records every call it receives.
#[derive(Default)]
pub struct FakeDestination {
    /// query -> video id returned by search; absent queries yield no match
    pub songs: HashMap<String, String>,
    /// queries that fail with a transport-level error instead
    pub failing_queries: Vec<String>,
    pub fail_create: bool,
    pub reject_inserts: bool,
    pub state: Mutex<FakeDestinationState>,
}

#[derive(Default)]
pub struct FakeDestinationState {
    pub playlists: HashMap<String, String>,
    pub created: Vec<(String, String)>,
    pub find_calls: Vec<String>,
    pub searches: Vec<String>,
    pub inserts: Vec<(String, Vec<String>, bool)>,
}

impl FakeDestination {
    pub fn with_songs(songs: &[(&str, &str)]) -> Self {
        FakeDestination {
            songs: songs
                .iter()
                .map(|(query, id)| (query.to_string(), id.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn created_count(&self) -> usize {
        self.state.lock().unwrap().created.len()
    }

    pub fn search_count(&self) -> usize {
        self.state.lock().unwrap().searches.len()
    }

    pub fn insert_count(&self) -> usize {
        self.state.lock().unwrap().inserts.len()
    }
}

#[async_trait]
impl DestinationCatalog for FakeDestination {
    async fn find_playlist_by_name(&self, name: &str) -> Result<Option<String>, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.find_calls.push(name.to_string());
        Ok(state.playlists.get(name).cloned())
    }

    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.created.push((name.to_string(), description.to_string()));
        if self.fail_create {
            return Ok(String::new());
        }
        let id = format!("PL{:03}", state.created.len());
        state.playlists.insert(name.to_string(), id.clone());
        Ok(id)
    }

    async fn search_track(&self, query: &str) -> Result<Option<String>, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.searches.push(query.to_string());
        if self.failing_queries.iter().any(|q| q == query) {
            return Err(DestinationError::Api("search unavailable".to_string()));
        }
        Ok(self.songs.get(query).cloned())
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        video_ids: &[String],
        allow_duplicates: bool,
    ) -> Result<bool, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.inserts.push((
            playlist_id.to_string(),
            video_ids.to_vec(),
            allow_duplicates,
        ));
        Ok(!self.reject_inserts)
    }
}
