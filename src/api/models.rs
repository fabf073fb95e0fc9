use serde::{Deserialize, Serialize};

/// Title reported by the server when the playlist has no current song.
pub const NO_SONG_TITLE: &str = "None";
/// Artist reported for songs added without one.
pub const UNKNOWN_ARTIST: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SongEntry {
    pub title: String,
    #[serde(default = "default_artist")]
    pub artist: String,
}

impl SongEntry {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

fn default_artist() -> String {
    UNKNOWN_ARTIST.to_string()
}

/// Descriptor of the song the server considers current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTrack {
    pub title: String,
    #[serde(default = "default_artist")]
    pub artist: String,
    #[serde(default, alias = "isPlaying")]
    pub is_playing: bool,
    #[serde(default, alias = "duration", alias = "durationSeconds")]
    pub duration_seconds: Option<f64>,
    #[serde(default, alias = "loopCurrent")]
    pub loop_current: bool,
}

impl Default for CurrentTrack {
    fn default() -> Self {
        Self {
            title: NO_SONG_TITLE.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            is_playing: false,
            duration_seconds: None,
            loop_current: false,
        }
    }
}

impl CurrentTrack {
    pub fn is_empty(&self) -> bool {
        self.title == NO_SONG_TITLE
    }

    /// Duration to animate against, falling back when the server has none.
    pub fn duration_or(&self, fallback: f64) -> f64 {
        match self.duration_seconds {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => fallback,
        }
    }
}

/// Full authoritative state as returned by `GET /get_songs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaylistSnapshot {
    #[serde(default)]
    pub songs: Vec<SongEntry>,
    #[serde(default)]
    pub current: CurrentTrack,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayPauseResponse {
    #[serde(alias = "isPlaying")]
    pub is_playing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LoopResponse {
    pub looping: bool,
}

/// Format seconds as `M:SS`. Negative and non-finite input renders as `0:00`.
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(9.0), "0:09");
        assert_eq!(format_duration(59.99), "0:59");
        assert_eq!(format_duration(60.0), "1:00");
        assert_eq!(format_duration(754.4), "12:34");
    }

    #[test]
    fn seconds_component_stays_below_sixty() {
        for tenths in 0..20_000u32 {
            let label = format_duration(tenths as f64 / 10.0);
            let (_, secs) = label.split_once(':').unwrap();
            assert_eq!(secs.len(), 2);
            assert!(secs.parse::<u32>().unwrap() < 60, "{label}");
        }
    }

    #[test]
    fn clamps_invalid_input() {
        assert_eq!(format_duration(-3.0), "0:00");
        assert_eq!(format_duration(f64::NAN), "0:00");
    }

    #[test]
    fn decodes_flask_style_payload() {
        let json = r#"{
            "songs": [{"title": "Perfect", "artist": "Ed Sheeran"}],
            "current": {
                "title": "Perfect",
                "artist": "Ed Sheeran",
                "is_playing": true,
                "duration": 30,
                "loop_current": false
            }
        }"#;
        let snapshot: PlaylistSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.songs.len(), 1);
        assert!(snapshot.current.is_playing);
        assert_eq!(snapshot.current.duration_seconds, Some(30.0));
        assert!(snapshot.genres.is_empty());
    }

    #[test]
    fn unknown_duration_falls_back() {
        let mut current = CurrentTrack::default();
        assert_eq!(current.duration_or(10.0), 10.0);
        current.duration_seconds = Some(0.0);
        assert_eq!(current.duration_or(10.0), 10.0);
        current.duration_seconds = Some(42.0);
        assert_eq!(current.duration_or(10.0), 42.0);
    }
}
