use crate::{services::SourceCatalog, spotify::client::SourceFetchError, types::Track};

/// Fetches the tracks of a source playlist.
///
/// Pass-through over the source catalog's paginated track retrieval; no
/// transformation, filtering, or deduplication happens here.
pub struct PlaylistFetcher<'a> {
    source: &'a dyn SourceCatalog,
}

impl<'a> PlaylistFetcher<'a> {
    pub fn new(source: &'a dyn SourceCatalog) -> Self {
        PlaylistFetcher { source }
    }

    pub async fn fetch(&self, playlist_id: &str) -> Result<Vec<Track>, SourceFetchError> {
        self.source.playlist_tracks(playlist_id).await
    }
}
