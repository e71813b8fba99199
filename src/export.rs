//! Writers for the collector's output: one CSV row per song and one text
//! file of lyrics per song.

use std::{
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{types::SongRecord, utils};

pub const SONGS_HEADER: [&str; 7] = [
    "ID",
    "Title",
    "Artist",
    "URL",
    "Producers",
    "Featured Artists",
    "Sampled Artists",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// How an existing `songs.csv` is treated when the writer opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

/// The tabular sink for song records.
pub struct SongsCsv {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl SongsCsv {
    /// Opens `path` for writing and makes sure the header row is present.
    ///
    /// In [`WriteMode::Truncate`] the file starts empty. In
    /// [`WriteMode::Append`] rows go after the existing content and the
    /// header is only written when the file was empty.
    pub fn create(path: &Path, mode: WriteMode) -> Result<Self, ExportError> {
        let io_err = |source: io::Error| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = match mode {
            WriteMode::Truncate => File::create(path),
            WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
        }
        .map_err(io_err)?;

        let is_empty = file.metadata().map_err(io_err)?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_empty {
            writer.write_record(SONGS_HEADER)?;
            writer.flush().map_err(io_err)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    /// Appends one row for `song` and flushes it to disk.
    pub fn write_row(&mut self, song: &SongRecord) -> Result<(), ExportError> {
        self.writer.serialize(utils::song_row(song))?;
        self.writer.flush().map_err(|source| ExportError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written through this writer.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Writes the lyrics of `song` to `<lyrics_dir>/<artist>/<id>-<slug>.txt`.
///
/// Does nothing and returns `None` when the song has no lyrics. Otherwise
/// creates the artist directory if needed and returns the written path.
pub async fn write_lyrics_file(
    lyrics_dir: &Path,
    song: &SongRecord,
) -> Result<Option<PathBuf>, ExportError> {
    if song.lyrics.is_empty() {
        return Ok(None);
    }

    let dir = lyrics_dir.join(&song.primary_artist.name);
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;

    let path = dir.join(utils::lyrics_file_name(song));
    let contents: String = song.lyrics.iter().map(|line| format!("{}\n", line)).collect();
    async_fs::write(&path, contents)
        .await
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(Some(path))
}
