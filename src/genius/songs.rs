use std::collections::VecDeque;

use crate::{
    genius::{CatalogError, Genius},
    http::Transport,
    types::{ApiEnvelope, ArtistSongsResponse, SongRecord, SongResponse},
};

impl<T: Transport> Genius<T> {
    /// Returns a lazy stream over the songs of `artist_id`.
    ///
    /// With `primary_only` set, songs whose primary artist is someone else
    /// are skipped before they are hydrated.
    pub fn stream_songs(&self, artist_id: u64, primary_only: bool) -> SongStream<'_, T> {
        SongStream {
            genius: self,
            artist_id,
            primary_only,
            page: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Fetches the full metadata of a song, then its lyrics.
    pub async fn get_song(&self, song_id: u64) -> Result<SongRecord, CatalogError> {
        let url = self.endpoint(&format!("/songs/{}", song_id));
        let res: ApiEnvelope<SongResponse> = self.fetcher.fetch_as(&url, &[]).await?;

        let lyrics = self.get_lyrics(&res.response.song.url).await;
        Ok(SongRecord::from_detail(res.response.song, lyrics))
    }

    async fn list_song_ids(
        &self,
        artist_id: u64,
        page: u32,
    ) -> Result<Vec<(u64, u64)>, CatalogError> {
        let url = self.endpoint(&format!("/artists/{}/songs", artist_id));
        let res: ApiEnvelope<ArtistSongsResponse> = self
            .fetcher
            .fetch_as(&url, &[("page", page.to_string())])
            .await?;

        Ok(res
            .response
            .songs
            .into_iter()
            .map(|song| (song.id, song.primary_artist.id))
            .collect())
    }
}

/// Forward-only sequence of hydrated songs for one artist.
///
/// Listing pages are requested on demand and each song is hydrated only
/// when [`SongStream::next`] reaches it. The stream ends at the first empty
/// listing page, or right after it has yielded an error.
pub struct SongStream<'a, T> {
    genius: &'a Genius<T>,
    artist_id: u64,
    primary_only: bool,
    page: u32,
    pending: VecDeque<u64>,
    done: bool,
}

impl<T: Transport> SongStream<'_, T> {
    pub async fn next(&mut self) -> Option<Result<SongRecord, CatalogError>> {
        while self.pending.is_empty() {
            if self.done {
                return None;
            }

            self.page += 1;
            let songs = match self.genius.list_song_ids(self.artist_id, self.page).await {
                Ok(songs) => songs,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if songs.is_empty() {
                self.done = true;
                return None;
            }

            let (artist_id, primary_only) = (self.artist_id, self.primary_only);
            self.pending.extend(
                songs
                    .into_iter()
                    .filter(|(_, primary_id)| !primary_only || *primary_id == artist_id)
                    .map(|(id, _)| id),
            );
        }

        let song_id = self.pending.pop_front()?;
        let song = self.genius.get_song(song_id).await;
        if song.is_err() {
            self.done = true;
            self.pending.clear();
        }
        Some(song)
    }

    /// Index of the last listing page requested so far.
    pub fn page(&self) -> u32 {
        self.page
    }
}
