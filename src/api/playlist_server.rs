use crate::api::error::PlaybackError;
use crate::api::facade::PlaybackFacade;
use crate::api::models::*;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// HTTP/JSON client for the playlist server.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistServerClient {
    pub base_url: String,
}

#[derive(Debug, Serialize)]
struct TitleRequest<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct AddSongRequest<'a> {
    title: &'a str,
    artist: &'a str,
}

#[derive(Debug, Serialize)]
struct AddByGenreRequest<'a> {
    genre: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ReorderRequest<'a> {
    order: &'a [String],
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl PlaylistServerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PlaybackError> {
        let response = HTTP_CLIENT.get(self.url(path)).send().await?;
        let response = ensure_success(response, path).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, PlaybackError> {
        debug!("POST {}", path);
        let response = HTTP_CLIENT.post(self.url(path)).json(body).send().await?;
        ensure_success(response, path).await
    }

    async fn post_empty(&self, path: &str) -> Result<reqwest::Response, PlaybackError> {
        debug!("POST {}", path);
        let response = HTTP_CLIENT.post(self.url(path)).send().await?;
        ensure_success(response, path).await
    }
}

/// Turn a non-success status into an error, preferring the server's `error` message.
async fn ensure_success(
    response: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, PlaybackError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(rejection_from_body(status.as_u16(), path, &body))
}

fn rejection_from_body(status: u16, path: &str, body: &str) -> PlaybackError {
    match serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
    {
        Some(message) => PlaybackError::Rejected(message),
        None => PlaybackError::Status {
            status,
            path: path.to_string(),
        },
    }
}

include!("playlist_server/queue_commands.rs");
include!("playlist_server/transport_commands.rs");
include!("playlist_server/genre_browsing.rs");

#[async_trait(?Send)]
impl PlaybackFacade for PlaylistServerClient {
    async fn get_state(&self) -> Result<PlaylistSnapshot, PlaybackError> {
        self.get_json("get_songs").await
    }

    async fn select_song(&self, title: &str) -> Result<SelectResponse, PlaybackError> {
        self.select(title).await
    }

    async fn delete_song(&self, title: &str) -> Result<(), PlaybackError> {
        self.delete(title).await
    }

    async fn add_song(&self, title: &str, artist: &str) -> Result<(), PlaybackError> {
        self.add(title, artist).await
    }

    async fn add_song_by_genre(
        &self,
        genre: &str,
        title: Option<&str>,
    ) -> Result<(), PlaybackError> {
        self.add_from_genre(genre, title).await
    }

    async fn toggle_play_pause(&self) -> Result<PlayPauseResponse, PlaybackError> {
        self.play_pause().await
    }

    async fn advance_next(&self) -> Result<(), PlaybackError> {
        self.next().await
    }

    async fn advance_prev(&self) -> Result<(), PlaybackError> {
        self.prev().await
    }

    async fn toggle_loop(&self) -> Result<LoopResponse, PlaybackError> {
        self.loop_current().await
    }

    async fn shuffle(&self) -> Result<(), PlaybackError> {
        self.shuffle_queue().await
    }

    async fn reorder(&self, titles: &[String]) -> Result<(), PlaybackError> {
        self.reorder_queue(titles).await
    }

    async fn songs_by_genre(&self, genre: &str) -> Result<Vec<SongEntry>, PlaybackError> {
        self.genre_songs(genre).await
    }
}
