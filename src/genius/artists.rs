use crate::{
    genius::{CatalogError, Genius},
    http::Transport,
    types::{ApiEnvelope, CatalogArtist, SearchResponse},
    utils,
};

impl<T: Transport> Genius<T> {
    /// Resolves an artist name to the catalog artist it stands for.
    ///
    /// Scans `/search` pages starting at page 1 and returns the first hit
    /// whose primary artist name equals `name`, ignoring case. The scan stops
    /// at the first page without hits or after the configured page limit.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ArtistNotFound`] if no page produced a match
    /// - [`CatalogError::Fetch`] if a search page could not be fetched
    pub async fn resolve_artist(&self, name: &str) -> Result<CatalogArtist, CatalogError> {
        let url = self.endpoint("/search");

        for page in 1..=self.search_page_limit {
            let res: ApiEnvelope<SearchResponse> = self
                .fetcher
                .fetch_as(&url, &[("q", name.to_string()), ("page", page.to_string())])
                .await?;

            if res.response.hits.is_empty() {
                break;
            }

            if let Some(hit) = res
                .response
                .hits
                .into_iter()
                .find(|hit| utils::same_artist_name(&hit.result.primary_artist.name, name))
            {
                return Ok(hit.result.primary_artist);
            }
        }

        Err(CatalogError::ArtistNotFound(name.to_string()))
    }

    pub async fn resolve_artist_id(&self, name: &str) -> Result<u64, CatalogError> {
        self.resolve_artist(name).await.map(|artist| artist.id)
    }
}
