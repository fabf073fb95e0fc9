// Playlist membership and ordering commands.
impl PlaylistServerClient {
    /// Unknown titles come back as a 404 with an `error` body; that is reported
    /// through `SelectResponse::error` rather than as a failed request.
    pub async fn select(&self, title: &str) -> Result<SelectResponse, PlaybackError> {
        match self.post_json("select_song", &TitleRequest { title }).await {
            Ok(response) => Ok(response.json().await?),
            Err(PlaybackError::Rejected(message)) => Ok(SelectResponse {
                error: Some(message),
                ..SelectResponse::default()
            }),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self, title: &str) -> Result<(), PlaybackError> {
        self.post_json("delete_song", &TitleRequest { title })
            .await
            .map(|_| ())
    }

    pub async fn add(&self, title: &str, artist: &str) -> Result<(), PlaybackError> {
        let artist = if artist.trim().is_empty() {
            UNKNOWN_ARTIST
        } else {
            artist.trim()
        };
        self.post_json(
            "add_song",
            &AddSongRequest {
                title: title.trim(),
                artist,
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn shuffle_queue(&self) -> Result<(), PlaybackError> {
        self.post_empty("shuffle").await.map(|_| ())
    }

    pub async fn reorder_queue(&self, titles: &[String]) -> Result<(), PlaybackError> {
        self.post_json("reorder", &ReorderRequest { order: titles })
            .await
            .map(|_| ())
    }
}
