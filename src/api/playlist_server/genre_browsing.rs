// Genre catalogue lookups and genre-driven additions.
impl PlaylistServerClient {
    pub async fn genre_songs(&self, genre: &str) -> Result<Vec<SongEntry>, PlaybackError> {
        let path = format!("songs_by_genre?genre={}", urlencoding::encode(genre.trim()));
        self.get_json(&path).await
    }

    pub async fn add_from_genre(
        &self,
        genre: &str,
        title: Option<&str>,
    ) -> Result<(), PlaybackError> {
        let title = title.map(str::trim).filter(|t| !t.is_empty());
        self.post_json(
            "add_song_by_genre",
            &AddByGenreRequest {
                genre: genre.trim(),
                title,
            },
        )
        .await
        .map(|_| ())
    }
}
