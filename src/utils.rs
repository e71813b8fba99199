use crate::types::{NamedArtist, SongRecord, SongRow};

/// Turns a song title into a file name fragment.
///
/// Every `/`, space and `,` becomes `-`. Nothing else is touched, so case,
/// punctuation and non-ASCII characters survive unchanged.
pub fn slugify(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | ' ' | ',' => '-',
            other => other,
        })
        .collect()
}

pub fn join_names(artists: &[NamedArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Case-insensitive exact match used to pick an artist out of search hits.
pub fn same_artist_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn lyrics_file_name(song: &SongRecord) -> String {
    format!("{}-{}.txt", song.id, slugify(&song.title))
}

pub fn song_row(song: &SongRecord) -> SongRow {
    SongRow {
        id: song.id,
        title: song.title.clone(),
        artist: song.primary_artist.name.clone(),
        url: song.url.clone(),
        producers: join_names(&song.producer_artists),
        featured_artists: join_names(&song.featured_artists),
        sampled_artists: song.sampled_artists.join(","),
    }
}

/// File name of an edge list, e.g. `artist-producers.csv`.
pub fn edge_file_name(source_column: &str, target_column: &str) -> String {
    format!("{}-{}.csv", source_column, target_column).to_lowercase()
}
