//! Genre endpoint group.

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{TmdbOptions, or_default};
use crate::types::GenresResponse;

/// Genre endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/genre-movie-list>
#[derive(Debug, Clone, Copy)]
pub struct Genres<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> Genres<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    async fn fetch(&self, path: &str, language: Option<&str>) -> Result<GenresResponse> {
        let language = or_default(language.map(ToOwned::to_owned), self.defaults.language.as_ref());
        let query = Query::new().push_opt("language", language);
        self.client.get_json(path, &query).await
    }

    /// Official movie genres.
    ///
    /// `GET /genre/movie/list`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn movie_list(&self, language: Option<&str>) -> Result<GenresResponse> {
        self.fetch("genre/movie/list", language).await
    }

    /// Official TV genres.
    ///
    /// `GET /genre/tv/list`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn tv_list(&self, language: Option<&str>) -> Result<GenresResponse> {
        self.fetch("genre/tv/list", language).await
    }
}
