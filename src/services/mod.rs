//! # Migration Services Module
//!
//! The decision-making core of playlift: fetching a source playlist's
//! tracks, matching each one to a destination equivalent, and orchestrating
//! the end-to-end migration.
//!
//! The services talk to the catalogs exclusively through the
//! [`SourceCatalog`] and [`DestinationCatalog`] traits, implemented by the
//! HTTP clients in [`crate::spotify`] and [`crate::ytmusic`] and by scripted
//! fakes in the test suite.

mod fetcher;
mod matcher;
mod migrator;

pub use fetcher::PlaylistFetcher;
pub use matcher::TrackMatcher;
pub use matcher::build_search_query;
pub use migrator::MigrateError;
pub use migrator::PlaylistMigrator;

use async_trait::async_trait;

use crate::{spotify::client::SourceFetchError, types::Track, ytmusic::client::DestinationError};

/// Read access to the catalog a playlist is migrated from.
#[async_trait]
pub trait SourceCatalog: Send + Sync {
    /// Returns the playlist's name and description.
    async fn playlist_name_desc(
        &self,
        playlist_id: &str,
    ) -> Result<(String, String), SourceFetchError>;

    /// Returns the playlist's complete track list, in playlist order.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, SourceFetchError>;
}

/// Search and playlist write access to the catalog a playlist is migrated
/// to.
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// Returns the id of the library playlist with exactly this name, if
    /// one exists.
    async fn find_playlist_by_name(&self, name: &str) -> Result<Option<String>, DestinationError>;

    /// Creates a playlist and returns its id. A remote-reported creation
    /// failure comes back as an empty id rather than an error.
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, DestinationError>;

    /// Returns the id of the first song matching the query, or `None` when
    /// the search comes up empty.
    async fn search_track(&self, query: &str) -> Result<Option<String>, DestinationError>;

    /// Bulk-adds songs to a playlist. Returns whether the remote service
    /// reported success.
    async fn add_tracks(
        &self,
        playlist_id: &str,
        video_ids: &[String],
        allow_duplicates: bool,
    ) -> Result<bool, DestinationError>;
}
