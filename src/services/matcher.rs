use crate::{services::DestinationCatalog, types::Track, warning};

/// Builds the search query used to look a track up in the destination
/// catalog.
///
/// Titles that already carry a "from" qualifier ("Song X from Movie Y") are
/// treated as self-describing and searched verbatim; otherwise the album is
/// appended the same way to disambiguate common titles across soundtracks
/// and covers, leaning on the destination's own relevance ranking.
pub fn build_search_query(title: &str, album: &str) -> String {
    if album.is_empty() {
        return title.to_string();
    }
    if title.to_lowercase().contains("from") {
        return title.to_string();
    }
    format!("{} from {}", title, album)
}

/// Matches source tracks to destination song ids.
///
/// Best-effort by design: a track whose search comes up empty is dropped
/// from the output without a placeholder, so the result is an order-
/// preserving subsequence of the input's matches.
pub struct TrackMatcher<'a> {
    destination: &'a dyn DestinationCatalog,
}

impl<'a> TrackMatcher<'a> {
    pub fn new(destination: &'a dyn DestinationCatalog) -> Self {
        TrackMatcher { destination }
    }

    /// Searches the destination catalog for each track and collects the ids
    /// of the first hits, in input order. Never fails the run; a transport
    /// error on one search only costs that track.
    pub async fn match_tracks(&self, tracks: &[Track]) -> Vec<String> {
        let mut video_ids = Vec::new();
        for track in tracks {
            let query = build_search_query(&track.title, &track.album);
            match self.destination.search_track(&query).await {
                Ok(Some(video_id)) => video_ids.push(video_id),
                Ok(None) => {} // no match, expected outcome
                Err(e) => {
                    warning!("Search failed for \"{}\": {}", track.title, e);
                }
            }
        }
        video_ids
    }
}
