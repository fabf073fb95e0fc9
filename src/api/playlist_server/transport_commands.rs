// Play/pause, skip and loop controls.
impl PlaylistServerClient {
    pub async fn play_pause(&self) -> Result<PlayPauseResponse, PlaybackError> {
        let response = self.post_empty("playpause").await?;
        Ok(response.json().await?)
    }

    pub async fn next(&self) -> Result<(), PlaybackError> {
        self.post_empty("next").await.map(|_| ())
    }

    pub async fn prev(&self) -> Result<(), PlaybackError> {
        self.post_empty("prev").await.map(|_| ())
    }

    pub async fn loop_current(&self) -> Result<LoopResponse, PlaybackError> {
        let response = self.post_empty("toggle_loop").await?;
        Ok(response.json().await?)
    }
}
