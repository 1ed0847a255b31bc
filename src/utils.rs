use std::cmp::Ordering;

use crate::types::PlaylistTableRow;

pub fn sort_playlist_table_rows(rows: &mut Vec<PlaylistTableRow>) {
    rows.sort_by(|a, b| {
        match a.name.to_lowercase().cmp(&b.name.to_lowercase()) {
            Ordering::Equal => b.tracks.cmp(&a.tracks), // secondary sort: track count descending
            other => other,
        }
    });
}
