use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, services::PlaylistMigrator, success, warning};

pub async fn migrate(playlist_id: String, name: Option<String>) {
    let spotify = super::spotify_client().await;
    let ytmusic = match super::ytmusic_client().await {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
        }
    };

    let migrator = PlaylistMigrator::new(&spotify, &ytmusic);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Migrating playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = migrator.migrate(&playlist_id, name.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(Some(destination_id)) => {
            success!(
                "Playlist migrated: https://music.youtube.com/playlist?list={}",
                destination_id
            );
        }
        Ok(None) => {
            warning!("Migration aborted before any tracks were transferred.");
        }
        Err(e) => {
            error!("Migration failed: {}", e);
        }
    }
}
