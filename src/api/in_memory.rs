use crate::api::error::PlaybackError;
use crate::api::facade::PlaybackFacade;
use crate::api::models::*;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::cell::RefCell;
use tracing::debug;

/// Duration given to every song the in-memory playlist knows about.
pub const FIXED_DURATION_SECS: f64 = 30.0;

const DEMO_SONGS: &[(&str, &str)] = &[
    ("Someone Like You", "Adele"),
    ("Blinding Lights", "The Weeknd"),
    ("Perfect", "Ed Sheeran"),
    ("Believer", "Imagine Dragons"),
    ("Shape of You", "Ed Sheeran"),
    ("Rolling in the Deep", "Adele"),
    ("Counting Stars", "OneRepublic"),
    ("Let Her Go", "Passenger"),
    ("Hymn for the Weekend", "Coldplay"),
    ("Cheap Thrills", "Sia"),
];

const GENRE_CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "Pop",
        &[
            ("Levitating", "Dua Lipa"),
            ("Bad Guy", "Billie Eilish"),
            ("As It Was", "Harry Styles"),
        ],
    ),
    (
        "Rock",
        &[
            ("Bohemian Rhapsody", "Queen"),
            ("Smells Like Teen Spirit", "Nirvana"),
            ("Mr. Brightside", "The Killers"),
        ],
    ),
    (
        "Hip-Hop",
        &[
            ("Lose Yourself", "Eminem"),
            ("HUMBLE.", "Kendrick Lamar"),
            ("Sicko Mode", "Travis Scott"),
        ],
    ),
    (
        "Jazz",
        &[
            ("Take Five", "Dave Brubeck"),
            ("So What", "Miles Davis"),
            ("Feeling Good", "Nina Simone"),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq)]
struct QueuedSong {
    title: String,
    artist: String,
    duration: f64,
}

#[derive(Debug, Default)]
struct PlaylistState {
    songs: Vec<QueuedSong>,
    current: Option<usize>,
    is_playing: bool,
    loop_current: bool,
}

impl PlaylistState {
    fn position(&self, title: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.title == title)
    }

    fn push(&mut self, title: &str, artist: &str) {
        let artist = if artist.trim().is_empty() {
            UNKNOWN_ARTIST
        } else {
            artist.trim()
        };
        self.songs.push(QueuedSong {
            title: title.trim().to_string(),
            artist: artist.to_string(),
            duration: FIXED_DURATION_SECS,
        });
        if self.current.is_none() {
            self.current = Some(self.songs.len() - 1);
        }
    }

    fn current_song(&self) -> Option<&QueuedSong> {
        self.current.and_then(|idx| self.songs.get(idx))
    }

    fn snapshot(&self) -> PlaylistSnapshot {
        let current = match self.current_song() {
            Some(song) => CurrentTrack {
                title: song.title.clone(),
                artist: song.artist.clone(),
                is_playing: self.is_playing,
                duration_seconds: Some(song.duration),
                loop_current: self.loop_current,
            },
            None => CurrentTrack {
                is_playing: self.is_playing,
                duration_seconds: Some(FIXED_DURATION_SECS),
                loop_current: self.loop_current,
                ..CurrentTrack::default()
            },
        };
        PlaylistSnapshot {
            songs: self
                .songs
                .iter()
                .map(|s| SongEntry::new(s.title.clone(), s.artist.clone()))
                .collect(),
            current,
            genres: GENRE_CATALOG.iter().map(|(g, _)| g.to_string()).collect(),
        }
    }

    fn next(&mut self) {
        if self.loop_current || self.songs.is_empty() {
            return;
        }
        self.current = match self.current {
            Some(idx) if idx + 1 < self.songs.len() => Some(idx + 1),
            _ => Some(0),
        };
    }

    fn prev(&mut self) {
        if self.loop_current || self.songs.is_empty() {
            return;
        }
        self.current = match self.current {
            Some(idx) if idx > 0 => Some(idx - 1),
            _ => Some(self.songs.len() - 1),
        };
    }

    /// Removing the current song moves to its successor, else its predecessor.
    fn delete(&mut self, title: &str) -> bool {
        let Some(idx) = self.position(title) else {
            return false;
        };
        self.songs.remove(idx);
        self.current = match self.current {
            _ if self.songs.is_empty() => None,
            Some(cur) if cur == idx => Some(idx.min(self.songs.len() - 1)),
            Some(cur) if cur > idx => Some(cur - 1),
            other => other,
        };
        true
    }

    fn reorder(&mut self, titles: &[String]) {
        let current_title = self.current_song().map(|s| s.title.clone());
        let mut remaining = std::mem::take(&mut self.songs);
        let mut ordered = Vec::with_capacity(remaining.len());
        for title in titles {
            if let Some(pos) = remaining.iter().position(|s| &s.title == title) {
                ordered.push(remaining.remove(pos));
            }
        }
        ordered.extend(remaining);
        self.songs = ordered;
        self.current = current_title.and_then(|t| self.position(&t));
    }

    fn shuffle(&mut self) {
        let current_title = self.current_song().map(|s| s.title.clone());
        self.songs.shuffle(&mut rand::thread_rng());
        self.current = current_title.and_then(|t| self.position(&t));
    }
}

/// Playlist that lives inside the page.
///
/// Follows the same rules as the playlist server so the UI can run without one
/// and the synchronization core can be exercised in tests.
#[derive(Debug, Default)]
pub struct InMemoryPlaylist {
    state: RefCell<PlaylistState>,
}

impl InMemoryPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the demo songs, nothing playing.
    pub fn with_demo_songs() -> Self {
        let playlist = Self::new();
        {
            let mut state = playlist.state.borrow_mut();
            for (title, artist) in DEMO_SONGS {
                state.push(title, artist);
            }
        }
        playlist
    }

    pub fn snapshot(&self) -> PlaylistSnapshot {
        self.state.borrow().snapshot()
    }
}

fn genre_entries(genre: &str) -> Option<&'static [(&'static str, &'static str)]> {
    GENRE_CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(genre.trim()))
        .map(|(_, songs)| *songs)
}

#[async_trait(?Send)]
impl PlaybackFacade for InMemoryPlaylist {
    async fn get_state(&self) -> Result<PlaylistSnapshot, PlaybackError> {
        Ok(self.snapshot())
    }

    async fn select_song(&self, title: &str) -> Result<SelectResponse, PlaybackError> {
        let mut state = self.state.borrow_mut();
        match state.position(title) {
            Some(idx) => {
                state.current = Some(idx);
                state.is_playing = true;
                let song = &state.songs[idx];
                Ok(SelectResponse {
                    title: Some(song.title.clone()),
                    artist: Some(song.artist.clone()),
                    error: None,
                })
            }
            None => Ok(SelectResponse {
                error: Some("Song not found".to_string()),
                ..SelectResponse::default()
            }),
        }
    }

    async fn delete_song(&self, title: &str) -> Result<(), PlaybackError> {
        if !self.state.borrow_mut().delete(title) {
            debug!("delete ignored, no song titled {:?}", title);
        }
        Ok(())
    }

    async fn add_song(&self, title: &str, artist: &str) -> Result<(), PlaybackError> {
        if title.trim().is_empty() {
            return Err(PlaybackError::Rejected("Title is required".to_string()));
        }
        self.state.borrow_mut().push(title, artist);
        Ok(())
    }

    async fn add_song_by_genre(
        &self,
        genre: &str,
        title: Option<&str>,
    ) -> Result<(), PlaybackError> {
        let entries = genre_entries(genre)
            .ok_or_else(|| PlaybackError::Rejected(format!("Unknown genre: {}", genre)))?;
        let mut state = self.state.borrow_mut();
        let pick = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(wanted) => entries.iter().find(|(t, _)| t.eq_ignore_ascii_case(wanted)),
            None => entries.iter().find(|(t, _)| state.position(t).is_none()),
        };
        let (title, artist) = pick.ok_or_else(|| {
            PlaybackError::Rejected(format!("No song available in genre {}", genre))
        })?;
        state.push(title, artist);
        Ok(())
    }

    async fn toggle_play_pause(&self) -> Result<PlayPauseResponse, PlaybackError> {
        let mut state = self.state.borrow_mut();
        state.is_playing = !state.is_playing;
        Ok(PlayPauseResponse {
            is_playing: state.is_playing,
        })
    }

    async fn advance_next(&self) -> Result<(), PlaybackError> {
        self.state.borrow_mut().next();
        Ok(())
    }

    async fn advance_prev(&self) -> Result<(), PlaybackError> {
        self.state.borrow_mut().prev();
        Ok(())
    }

    async fn toggle_loop(&self) -> Result<LoopResponse, PlaybackError> {
        let mut state = self.state.borrow_mut();
        state.loop_current = !state.loop_current;
        Ok(LoopResponse {
            looping: state.loop_current,
        })
    }

    async fn shuffle(&self) -> Result<(), PlaybackError> {
        self.state.borrow_mut().shuffle();
        Ok(())
    }

    async fn reorder(&self, titles: &[String]) -> Result<(), PlaybackError> {
        self.state.borrow_mut().reorder(titles);
        Ok(())
    }

    async fn songs_by_genre(&self, genre: &str) -> Result<Vec<SongEntry>, PlaybackError> {
        let entries = genre_entries(genre)
            .ok_or_else(|| PlaybackError::Rejected(format!("Unknown genre: {}", genre)))?;
        Ok(entries
            .iter()
            .map(|(title, artist)| SongEntry::new(*title, *artist))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(playlist: &InMemoryPlaylist) -> Vec<String> {
        playlist
            .snapshot()
            .songs
            .into_iter()
            .map(|s| s.title)
            .collect()
    }

    fn current(playlist: &InMemoryPlaylist) -> String {
        playlist.snapshot().current.title
    }

    #[tokio::test]
    async fn next_and_prev_wrap_around() {
        let playlist = InMemoryPlaylist::with_demo_songs();
        assert_eq!(current(&playlist), "Someone Like You");

        playlist.advance_prev().await.unwrap();
        assert_eq!(current(&playlist), "Cheap Thrills");

        playlist.advance_next().await.unwrap();
        assert_eq!(current(&playlist), "Someone Like You");
        playlist.advance_next().await.unwrap();
        assert_eq!(current(&playlist), "Blinding Lights");
    }

    #[tokio::test]
    async fn loop_current_pins_the_song() {
        let playlist = InMemoryPlaylist::with_demo_songs();
        let looping = playlist.toggle_loop().await.unwrap();
        assert!(looping.looping);

        playlist.advance_next().await.unwrap();
        playlist.advance_prev().await.unwrap();
        assert_eq!(current(&playlist), "Someone Like You");
        assert!(playlist.snapshot().current.loop_current);
    }

    #[tokio::test]
    async fn select_unknown_title_is_an_error_field() {
        let playlist = InMemoryPlaylist::with_demo_songs();
        let response = playlist.select_song("Nope").await.unwrap();
        assert_eq!(response.error.as_deref(), Some("Song not found"));
        assert!(!playlist.snapshot().current.is_playing);

        let response = playlist.select_song("Believer").await.unwrap();
        assert!(response.error.is_none());
        let snapshot = playlist.snapshot();
        assert_eq!(snapshot.current.title, "Believer");
        assert!(snapshot.current.is_playing);
    }

    #[tokio::test]
    async fn deleting_current_moves_to_successor_then_predecessor() {
        let playlist = InMemoryPlaylist::new();
        playlist.add_song("A", "x").await.unwrap();
        playlist.add_song("B", "").await.unwrap();
        playlist.select_song("B").await.unwrap();

        playlist.delete_song("B").await.unwrap();
        assert_eq!(current(&playlist), "A");

        playlist.add_song("C", "y").await.unwrap();
        playlist.delete_song("A").await.unwrap();
        assert_eq!(current(&playlist), "C");

        playlist.delete_song("C").await.unwrap();
        let snapshot = playlist.snapshot();
        assert!(snapshot.current.is_empty());
        assert_eq!(snapshot.current.artist, UNKNOWN_ARTIST);
    }

    #[tokio::test]
    async fn reorder_keeps_current_and_appends_unmentioned() {
        let playlist = InMemoryPlaylist::new();
        for title in ["A", "B", "C", "D"] {
            playlist.add_song(title, "x").await.unwrap();
        }
        playlist.select_song("B").await.unwrap();

        playlist
            .reorder(&["C".to_string(), "B".to_string(), "Z".to_string()])
            .await
            .unwrap();
        assert_eq!(titles(&playlist), ["C", "B", "A", "D"]);
        assert_eq!(current(&playlist), "B");
    }

    #[tokio::test]
    async fn shuffle_preserves_membership_and_current() {
        let playlist = InMemoryPlaylist::with_demo_songs();
        playlist.select_song("Perfect").await.unwrap();
        playlist.shuffle().await.unwrap();

        let mut shuffled = titles(&playlist);
        shuffled.sort();
        let mut expected: Vec<String> = DEMO_SONGS.iter().map(|(t, _)| t.to_string()).collect();
        expected.sort();
        assert_eq!(shuffled, expected);
        assert_eq!(current(&playlist), "Perfect");
    }

    #[tokio::test]
    async fn genre_additions() {
        let playlist = InMemoryPlaylist::new();
        playlist.add_song_by_genre("jazz", None).await.unwrap();
        playlist.add_song_by_genre("Jazz", None).await.unwrap();
        playlist
            .add_song_by_genre("Rock", Some("Mr. Brightside"))
            .await
            .unwrap();
        assert_eq!(titles(&playlist), ["Take Five", "So What", "Mr. Brightside"]);

        let err = playlist.add_song_by_genre("Polka", None).await.unwrap_err();
        assert!(matches!(err, PlaybackError::Rejected(_)));

        let pop = playlist.songs_by_genre("Pop").await.unwrap();
        assert_eq!(pop.len(), 3);
        assert!(playlist.snapshot().genres.contains(&"Hip-Hop".to_string()));
    }
}
