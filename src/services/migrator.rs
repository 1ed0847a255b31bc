use std::fmt;

use crate::{
    info,
    services::{DestinationCatalog, PlaylistFetcher, SourceCatalog, TrackMatcher},
    spotify::client::SourceFetchError,
    warning,
    ytmusic::client::DestinationError,
};

/// Fatal failure of a migration run.
///
/// Carries the collaborator error untranslated; a remote-reported playlist
/// creation failure is not an error but the `Ok(None)` outcome of
/// [`PlaylistMigrator::migrate`].
#[derive(Debug)]
pub enum MigrateError {
    Source(SourceFetchError),
    Destination(DestinationError),
}

impl From<SourceFetchError> for MigrateError {
    fn from(err: SourceFetchError) -> Self {
        MigrateError::Source(err)
    }
}

impl From<DestinationError> for MigrateError {
    fn from(err: DestinationError) -> Self {
        MigrateError::Destination(err)
    }
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Source(e) => write!(f, "{}", e),
            MigrateError::Destination(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MigrateError {}

/// Orchestrates the end-to-end migration of one playlist.
///
/// The run is linear: resolve the source metadata, get-or-create the
/// destination playlist, fetch the source tracks, match them, bulk-insert
/// the matches. Exactly one destination playlist is created or reused per
/// call, and a failed insert leaves it partially populated; there is no
/// rollback.
pub struct PlaylistMigrator<'a> {
    source: &'a dyn SourceCatalog,
    destination: &'a dyn DestinationCatalog,
    fetcher: PlaylistFetcher<'a>,
    matcher: TrackMatcher<'a>,
}

impl<'a> PlaylistMigrator<'a> {
    pub fn new(source: &'a dyn SourceCatalog, destination: &'a dyn DestinationCatalog) -> Self {
        PlaylistMigrator {
            source,
            destination,
            fetcher: PlaylistFetcher::new(source),
            matcher: TrackMatcher::new(destination),
        }
    }

    /// Migrates one playlist and returns the destination playlist id.
    ///
    /// `name_override` replaces the source playlist's name on the
    /// destination side; the description always comes from the source.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(id))` - the run completed; the playlist may still be
    ///   empty or partially filled when matching or insertion fell short.
    /// - `Ok(None)` - the destination playlist could not be created; no
    ///   tracks were fetched or matched.
    /// - `Err(_)` - fetching metadata or tracks from the source failed, or
    ///   the destination was unreachable while resolving the playlist.
    pub async fn migrate(
        &self,
        spotify_playlist_id: &str,
        name_override: Option<&str>,
    ) -> Result<Option<String>, MigrateError> {
        let (fetched_name, description) =
            self.source.playlist_name_desc(spotify_playlist_id).await?;

        let name = name_override.unwrap_or(&fetched_name);

        let Some(playlist_id) = self.resolve_playlist(name, &description).await? else {
            warning!(
                "Migration aborted: failed to create or fetch the YouTube Music playlist. spotify_playlist_id={} name={}",
                spotify_playlist_id,
                name
            );
            return Ok(None);
        };

        let tracks = self.fetcher.fetch(spotify_playlist_id).await?;
        let video_ids = self.matcher.match_tracks(&tracks).await;
        info!("Matched {} of {} tracks", video_ids.len(), tracks.len());

        if !video_ids.is_empty() {
            match self
                .destination
                .add_tracks(&playlist_id, &video_ids, true)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    warning!(
                        "YouTube Music rejected adding tracks to playlist {}; it may be missing some or all of them",
                        playlist_id
                    );
                }
                Err(e) => {
                    warning!("Failed to add tracks to playlist {}: {}", playlist_id, e);
                }
            }
        }

        Ok(Some(playlist_id))
    }

    /// Resolves the destination playlist id for a name: reuse the existing
    /// playlist with exactly that name, else create a new one. Repeated runs
    /// with the same name land in the same playlist.
    async fn resolve_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Option<String>, MigrateError> {
        if let Some(existing) = self.destination.find_playlist_by_name(name).await? {
            return Ok(Some(existing));
        }

        let created = self.destination.create_playlist(name, description).await?;
        if created.is_empty() {
            return Ok(None);
        }
        Ok(Some(created))
    }
}
