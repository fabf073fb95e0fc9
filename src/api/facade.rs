use crate::api::error::PlaybackError;
use crate::api::models::*;
use async_trait::async_trait;

/// Remote playback authority consumed by the synchronization core.
///
/// Every call is a request/response round trip; the local model only ever
/// changes after the response has been reconciled. Implementations are used
/// from a single UI thread, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait PlaybackFacade {
    async fn get_state(&self) -> Result<PlaylistSnapshot, PlaybackError>;

    /// A response with `error` set means the title was not found.
    async fn select_song(&self, title: &str) -> Result<SelectResponse, PlaybackError>;

    async fn delete_song(&self, title: &str) -> Result<(), PlaybackError>;

    async fn add_song(&self, title: &str, artist: &str) -> Result<(), PlaybackError>;

    async fn add_song_by_genre(
        &self,
        genre: &str,
        title: Option<&str>,
    ) -> Result<(), PlaybackError>;

    async fn toggle_play_pause(&self) -> Result<PlayPauseResponse, PlaybackError>;

    async fn advance_next(&self) -> Result<(), PlaybackError>;

    async fn advance_prev(&self) -> Result<(), PlaybackError>;

    async fn toggle_loop(&self) -> Result<LoopResponse, PlaybackError>;

    async fn shuffle(&self) -> Result<(), PlaybackError>;

    async fn reorder(&self, titles: &[String]) -> Result<(), PlaybackError>;

    async fn songs_by_genre(&self, genre: &str) -> Result<Vec<SongEntry>, PlaybackError>;
}
