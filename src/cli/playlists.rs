use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, types::PlaylistTableRow, utils};

pub async fn playlists() {
    let spotify = super::spotify_client().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching your playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match spotify.my_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!(
                "Failed to fetch playlists: {}\nRun playlift auth first.",
                e
            );
        }
    };
    pb.finish_and_clear();

    let mut rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|playlist| PlaylistTableRow {
            name: playlist.name,
            id: playlist.id,
            tracks: playlist.tracks.total,
        })
        .collect();

    utils::sort_playlist_table_rows(&mut rows);

    let table = Table::new(rows);
    println!("{}", table);
}
