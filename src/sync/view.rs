use crate::api::models::{format_duration, CurrentTrack, SongEntry};
use crate::sync::progress::ProgressModel;

/// Lifecycle of the synchronization ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Everything the view needs to paint one reconciliation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerFrame {
    pub songs: Vec<SongEntry>,
    pub current: CurrentTrack,
    pub genres: Vec<String>,
    pub elapsed: f64,
    pub elapsed_label: String,
    pub total_label: String,
    pub percent: f64,
    pub is_playing: bool,
    pub looping: bool,
    pub is_seeking: bool,
    pub loop_state: LoopState,
}

impl PlayerFrame {
    pub fn compose(
        model: &ProgressModel,
        songs: &[SongEntry],
        current: &CurrentTrack,
        genres: &[String],
        loop_state: LoopState,
    ) -> Self {
        Self {
            songs: songs.to_vec(),
            current: current.clone(),
            genres: genres.to_vec(),
            elapsed: model.elapsed(),
            elapsed_label: format_duration(model.elapsed()),
            total_label: format_duration(model.duration()),
            percent: model.percent(),
            is_playing: current.is_playing,
            looping: model.looping(),
            is_seeking: model.is_seeking(),
            loop_state,
        }
    }
}

/// Paints the player from a frame. Called on every reconciliation and tick.
pub trait ViewRenderer {
    fn render(&self, frame: PlayerFrame);
}
