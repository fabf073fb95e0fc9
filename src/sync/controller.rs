use crate::api::error::PlaybackError;
use crate::api::models::SongEntry;
use crate::sync::sync_loop::SyncLoop;
use tracing::{info, warn};

/// User commands against the playback authority.
///
/// Every successful command is followed by a resync. Navigation (select, next,
/// prev, shuffle) asks for a progress reset; other commands only reset when the
/// current track changed underneath. A failed or rejected command leaves the
/// local state untouched.
#[derive(Clone)]
pub struct PlaylistController {
    sync: SyncLoop,
}

impl PlaylistController {
    pub fn new(sync: SyncLoop) -> Self {
        Self { sync }
    }

    pub fn sync(&self) -> &SyncLoop {
        &self.sync
    }

    pub async fn refresh(&self) -> Result<(), PlaybackError> {
        self.sync.resync(false).await
    }

    pub async fn select(&self, title: &str) -> Result<(), PlaybackError> {
        let facade = self.sync.facade();
        let response = facade.select_song(title).await?;
        if let Some(message) = response.error {
            warn!("Select {:?} rejected: {}", title, message);
            return Err(PlaybackError::Rejected(message));
        }
        info!("Selected {:?}", title);
        self.sync.resync(true).await
    }

    pub async fn delete(&self, title: &str) -> Result<(), PlaybackError> {
        self.sync.facade().delete_song(title).await?;
        self.sync.resync(false).await
    }

    pub async fn add(&self, title: &str, artist: &str) -> Result<(), PlaybackError> {
        if title.trim().is_empty() {
            return Err(PlaybackError::Rejected("Title is required".to_string()));
        }
        self.sync.facade().add_song(title, artist).await?;
        self.sync.resync(false).await
    }

    pub async fn add_by_genre(&self, genre: &str, title: Option<&str>) -> Result<(), PlaybackError> {
        self.sync.facade().add_song_by_genre(genre, title).await?;
        self.sync.resync(false).await
    }

    pub async fn toggle_play_pause(&self) -> Result<bool, PlaybackError> {
        let response = self.sync.facade().toggle_play_pause().await?;
        self.sync.resync(false).await?;
        Ok(response.is_playing)
    }

    pub async fn next(&self) -> Result<(), PlaybackError> {
        self.sync.facade().advance_next().await?;
        self.sync.resync(true).await
    }

    pub async fn prev(&self) -> Result<(), PlaybackError> {
        self.sync.facade().advance_prev().await?;
        self.sync.resync(true).await
    }

    pub async fn shuffle(&self) -> Result<(), PlaybackError> {
        self.sync.facade().shuffle().await?;
        self.sync.resync(true).await
    }

    pub async fn toggle_loop(&self) -> Result<bool, PlaybackError> {
        let response = self.sync.facade().toggle_loop().await?;
        self.sync.with_model(|m| m.set_looping(response.looping));
        self.sync.resync(false).await?;
        Ok(response.looping)
    }

    pub async fn reorder(&self, titles: &[String]) -> Result<(), PlaybackError> {
        self.sync.facade().reorder(titles).await?;
        self.sync.resync(false).await
    }

    /// Move the song at `from` to `to` and push the new order to the server.
    pub async fn move_song(&self, from: usize, to: usize) -> Result<(), PlaybackError> {
        let mut titles: Vec<String> = self.sync.songs().into_iter().map(|s| s.title).collect();
        if from >= titles.len() || from == to {
            return Ok(());
        }
        let moved = titles.remove(from);
        titles.insert(to.min(titles.len()), moved);
        self.reorder(&titles).await
    }

    pub async fn songs_by_genre(&self, genre: &str) -> Result<Vec<SongEntry>, PlaybackError> {
        self.sync.facade().songs_by_genre(genre).await
    }
}
