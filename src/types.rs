use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Outer envelope every Genius API payload is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: T,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub result: SearchResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub primary_artist: CatalogArtist,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistSongsResponse {
    #[serde(default)]
    pub songs: Vec<SongSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongSummary {
    pub id: u64,
    pub primary_artist: ArtistRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongResponse {
    pub song: SongDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongDetail {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub primary_artist: CatalogArtist,
    #[serde(default)]
    pub producer_artists: Option<Vec<NamedArtist>>,
    #[serde(default)]
    pub featured_artists: Option<Vec<NamedArtist>>,
    #[serde(default)]
    pub song_relationships: Option<Vec<SongRelationship>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongRelationship {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub songs: Vec<RelatedSong>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedSong {
    pub primary_artist: NamedArtist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedArtist {
    pub name: String,
}

/// A fully hydrated song: metadata from the song endpoint plus its lyrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub id: u64,
    pub title: String,
    pub primary_artist: CatalogArtist,
    pub url: String,
    pub producer_artists: Vec<NamedArtist>,
    pub featured_artists: Vec<NamedArtist>,
    pub sampled_artists: Vec<String>,
    pub lyrics: Vec<String>,
}

impl SongRecord {
    pub fn from_detail(detail: SongDetail, lyrics: Vec<String>) -> Self {
        let sampled_artists = detail
            .song_relationships
            .unwrap_or_default()
            .into_iter()
            .filter(|rel| rel.kind == "samples")
            .flat_map(|rel| rel.songs.into_iter().map(|s| s.primary_artist.name))
            .collect();

        Self {
            id: detail.id,
            title: detail.title,
            primary_artist: detail.primary_artist,
            url: detail.url,
            producer_artists: detail.producer_artists.unwrap_or_default(),
            featured_artists: detail.featured_artists.unwrap_or_default(),
            sampled_artists,
            lyrics,
        }
    }
}

/// One row of `songs.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRow {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Producers")]
    pub producers: String,
    #[serde(rename = "Featured Artists")]
    pub featured_artists: String,
    #[serde(rename = "Sampled Artists")]
    pub sampled_artists: String,
}

/// A directed, weighted edge between two CSV cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

#[derive(Tabled)]
pub struct EdgeTableRow {
    pub source: String,
    pub target: String,
    pub weight: u64,
}
