//! Movie list endpoint group (now playing, popular, top rated, upcoming).

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{ApplyDefaults, TmdbOptions, or_default};
use crate::types::{MovieResultItem, PaginatedResponse};

/// Parameters shared by all movie list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieListParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Region filter; falls back to the client default.
    pub region: Option<String>,
}

impl MovieListParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

impl ApplyDefaults for MovieListParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            region: or_default(self.region, defaults.region.as_ref()),
            ..self
        }
    }
}

/// Movie list endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/movie-now-playing-list>
#[derive(Debug, Clone, Copy)]
pub struct MovieLists<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> MovieLists<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    async fn fetch(
        &self,
        list: &str,
        params: MovieListParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        let params = params.apply_defaults(self.defaults);
        let query = Query::new()
            .push_opt("language", params.language)
            .push_opt("page", params.page)
            .push_opt("region", params.region);
        self.client.get_json(&format!("movie/{list}"), &query).await
    }

    /// Movies currently in theatres.
    ///
    /// `GET /movie/now_playing`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn now_playing(
        &self,
        params: MovieListParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        self.fetch("now_playing", params).await
    }

    /// Movies ordered by popularity.
    ///
    /// `GET /movie/popular`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn popular(
        &self,
        params: MovieListParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        self.fetch("popular", params).await
    }

    /// Movies ordered by rating.
    ///
    /// `GET /movie/top_rated`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn top_rated(
        &self,
        params: MovieListParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        self.fetch("top_rated", params).await
    }

    /// Movies being released soon.
    ///
    /// `GET /movie/upcoming`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn upcoming(
        &self,
        params: MovieListParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        self.fetch("upcoming", params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_params_take_all_configured_defaults() {
        // Arrange
        let defaults = TmdbOptions::new().language("it-IT").region("IT");

        // Act
        let merged = MovieListParams::new().apply_defaults(&defaults);

        // Assert: exactly the configured fields, nothing else
        assert_eq!(merged.language.as_deref(), Some("it-IT"));
        assert_eq!(merged.region.as_deref(), Some("IT"));
        assert!(merged.page.is_none());
    }

    #[test]
    fn test_apply_defaults_is_idempotent() {
        // Arrange
        let defaults = TmdbOptions::new().language("it-IT").region("IT");
        let params = MovieListParams::new().page(4).region("FR");

        // Act
        let once = params.apply_defaults(&defaults);
        let twice = once.clone().apply_defaults(&defaults);

        // Assert
        assert_eq!(once, twice);
        assert_eq!(once.region.as_deref(), Some("FR"));
    }
}
