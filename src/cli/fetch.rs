use std::{path::PathBuf, time::Duration};

use tokio::time::sleep;

use crate::{
    Res, config, error,
    export::{self, SongsCsv, WriteMode},
    genius::{CatalogError, Genius},
    http::Transport,
    info, success, warning,
};

use super::spinner;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub output: PathBuf,
    pub lyrics_dir: PathBuf,
    pub mode: WriteMode,
    pub primary_only: bool,
    /// Pause after every song.
    pub delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("songs.csv"),
            lyrics_dir: PathBuf::from("lyrics"),
            mode: WriteMode::Truncate,
            primary_only: true,
            delay: Duration::from_millis(500),
        }
    }
}

pub async fn fetch(opts: FetchOptions) {
    let token = match config::genius_access_token() {
        Ok(token) => token,
        Err(e) => error!("{}. Set it in your environment or .env file.", e),
    };

    let genius = Genius::from_config(token);
    let artists = config::artists();

    let mut sink = match SongsCsv::create(&opts.output, opts.mode) {
        Ok(sink) => sink,
        Err(e) => error!("Cannot open song sink. Err: {}", e),
    };

    match collect(&genius, &artists, &mut sink, &opts).await {
        Ok(count) => success!(
            "Wrote {} songs for {} artists to {}",
            count,
            artists.len(),
            opts.output.display()
        ),
        Err(e) => error!("Cannot fetch songs. Err: {}", e),
    }
}

/// Collects and exports the songs of every artist in `artists`.
///
/// Artists that cannot be resolved are skipped with a warning. Any other
/// error stops the run; rows and lyric files written until then stay.
///
/// Returns the number of songs written.
pub async fn collect<T: Transport>(
    genius: &Genius<T>,
    artists: &[String],
    sink: &mut SongsCsv,
    opts: &FetchOptions,
) -> Res<usize> {
    let mut total = 0;

    for artist_name in artists {
        let pb = spinner(format!("Resolving artist {}...", artist_name));
        let resolved = genius.resolve_artist(artist_name).await;
        pb.finish_and_clear();

        let artist = match resolved {
            Ok(artist) => artist,
            Err(CatalogError::ArtistNotFound(name)) => {
                warning!("Cannot find artist {}, skipping.", name);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let mut count = 0;
        let mut songs = genius.stream_songs(artist.id, opts.primary_only);
        while let Some(song) = songs.next().await {
            let song = song?;
            info!("{} {}", artist_name, song.title);

            sink.write_row(&song)?;
            export::write_lyrics_file(&opts.lyrics_dir, &song).await?;
            count += 1;

            if !opts.delay.is_zero() {
                sleep(opts.delay).await;
            }
        }

        success!("Fetched {} songs for {}", count, artist.name);
        total += count;
    }

    Ok(total)
}
