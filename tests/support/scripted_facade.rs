use async_trait::async_trait;
use rustyremote::api::{
    CurrentTrack, LoopResponse, PlayPauseResponse, PlaybackError, PlaybackFacade,
    PlaylistSnapshot, SelectResponse, SongEntry,
};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Playback authority whose state the test drives directly.
///
/// `next` wraps around the song list unless loop-current is on. Counters record
/// how often the sync core asked for state or advanced.
pub struct ScriptedFacade {
    songs: RefCell<Vec<SongEntry>>,
    current: Cell<usize>,
    is_playing: Cell<bool>,
    loop_current: Cell<bool>,
    duration: Cell<Option<f64>>,
    offline: Cell<bool>,
    stalled: Cell<bool>,
    state_delay: Cell<Option<Duration>>,
    next_delay: Cell<Option<Duration>>,
    state_calls: Cell<u32>,
    next_calls: Cell<u32>,
}

impl ScriptedFacade {
    pub fn playing(titles: &[&str], duration: f64) -> Self {
        Self {
            songs: RefCell::new(
                titles
                    .iter()
                    .map(|title| SongEntry::new(*title, "Test Artist"))
                    .collect(),
            ),
            current: Cell::new(0),
            is_playing: Cell::new(true),
            loop_current: Cell::new(false),
            duration: Cell::new(Some(duration)),
            offline: Cell::new(false),
            stalled: Cell::new(false),
            state_delay: Cell::new(None),
            next_delay: Cell::new(None),
            state_calls: Cell::new(0),
            next_calls: Cell::new(0),
        }
    }

    pub fn set_playing(&self, playing: bool) {
        self.is_playing.set(playing);
    }

    pub fn set_loop_current(&self, looping: bool) {
        self.loop_current.set(looping);
    }

    pub fn set_duration(&self, duration: Option<f64>) {
        self.duration.set(duration);
    }

    /// Every request fails with a transport error while offline.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// State queries never answer while stalled.
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.set(stalled);
    }

    /// State queries answer only after `delay` of tokio time.
    pub fn set_state_delay(&self, delay: Option<Duration>) {
        self.state_delay.set(delay);
    }

    /// `advance_next` answers only after `delay` of tokio time.
    pub fn set_next_delay(&self, delay: Option<Duration>) {
        self.next_delay.set(delay);
    }

    /// Switch tracks behind the client's back, as another client would.
    pub fn jump_to(&self, index: usize) {
        self.current.set(index);
    }

    pub fn current_title(&self) -> String {
        self.songs.borrow()[self.current.get()].title.clone()
    }

    pub fn state_calls(&self) -> u32 {
        self.state_calls.get()
    }

    pub fn next_calls(&self) -> u32 {
        self.next_calls.get()
    }

    fn reachable(&self) -> Result<(), PlaybackError> {
        if self.offline.get() {
            Err(PlaybackError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn step(&self, forward: bool) {
        let len = self.songs.borrow().len();
        if len == 0 || self.loop_current.get() {
            return;
        }
        let idx = self.current.get();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.current.set(next);
    }
}

#[async_trait(?Send)]
impl PlaybackFacade for ScriptedFacade {
    async fn get_state(&self) -> Result<PlaylistSnapshot, PlaybackError> {
        self.state_calls.set(self.state_calls.get() + 1);
        if self.stalled.get() {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.state_delay.get() {
            tokio::time::sleep(delay).await;
        }
        self.reachable()?;
        let songs = self.songs.borrow().clone();
        let song = &songs[self.current.get()];
        Ok(PlaylistSnapshot {
            current: CurrentTrack {
                title: song.title.clone(),
                artist: song.artist.clone(),
                is_playing: self.is_playing.get(),
                duration_seconds: self.duration.get(),
                loop_current: self.loop_current.get(),
            },
            songs,
            genres: Vec::new(),
        })
    }

    async fn select_song(&self, title: &str) -> Result<SelectResponse, PlaybackError> {
        self.reachable()?;
        let found = self.songs.borrow().iter().position(|s| s.title == title);
        match found {
            Some(idx) => {
                self.current.set(idx);
                self.is_playing.set(true);
                Ok(SelectResponse {
                    title: Some(title.to_string()),
                    ..SelectResponse::default()
                })
            }
            None => Ok(SelectResponse {
                error: Some("Song not found".to_string()),
                ..SelectResponse::default()
            }),
        }
    }

    async fn delete_song(&self, title: &str) -> Result<(), PlaybackError> {
        self.reachable()?;
        self.songs.borrow_mut().retain(|s| s.title != title);
        let len = self.songs.borrow().len();
        if self.current.get() >= len {
            self.current.set(len.saturating_sub(1));
        }
        Ok(())
    }

    async fn add_song(&self, title: &str, artist: &str) -> Result<(), PlaybackError> {
        self.reachable()?;
        self.songs.borrow_mut().push(SongEntry::new(title, artist));
        Ok(())
    }

    async fn add_song_by_genre(
        &self,
        genre: &str,
        title: Option<&str>,
    ) -> Result<(), PlaybackError> {
        self.reachable()?;
        let title = title.unwrap_or("Genre Pick");
        self.songs.borrow_mut().push(SongEntry::new(title, genre));
        Ok(())
    }

    async fn toggle_play_pause(&self) -> Result<PlayPauseResponse, PlaybackError> {
        self.reachable()?;
        self.is_playing.set(!self.is_playing.get());
        Ok(PlayPauseResponse {
            is_playing: self.is_playing.get(),
        })
    }

    async fn advance_next(&self) -> Result<(), PlaybackError> {
        self.next_calls.set(self.next_calls.get() + 1);
        if let Some(delay) = self.next_delay.get() {
            tokio::time::sleep(delay).await;
        }
        self.reachable()?;
        self.step(true);
        Ok(())
    }

    async fn advance_prev(&self) -> Result<(), PlaybackError> {
        self.reachable()?;
        self.step(false);
        Ok(())
    }

    async fn toggle_loop(&self) -> Result<LoopResponse, PlaybackError> {
        self.reachable()?;
        self.loop_current.set(!self.loop_current.get());
        Ok(LoopResponse {
            looping: self.loop_current.get(),
        })
    }

    async fn shuffle(&self) -> Result<(), PlaybackError> {
        self.reachable()
    }

    async fn reorder(&self, titles: &[String]) -> Result<(), PlaybackError> {
        self.reachable()?;
        let current = self.current_title();
        let mut songs = self.songs.borrow_mut();
        songs.sort_by_key(|s| titles.iter().position(|t| *t == s.title).unwrap_or(usize::MAX));
        if let Some(idx) = songs.iter().position(|s| s.title == current) {
            self.current.set(idx);
        }
        Ok(())
    }

    async fn songs_by_genre(&self, _genre: &str) -> Result<Vec<SongEntry>, PlaybackError> {
        self.reachable()?;
        Ok(Vec::new())
    }
}
