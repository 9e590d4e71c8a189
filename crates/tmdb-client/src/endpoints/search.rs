//! Search endpoint group.

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{ApplyDefaults, TmdbOptions, or_default};
use crate::types::{MovieResultItem, PaginatedResponse, TvResultItem};

/// Parameters for movie search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// Region filter; falls back to the client default.
    pub region: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Include adult results.
    pub include_adult: Option<bool>,
    /// Filter on any release year.
    pub year: Option<u16>,
    /// Filter on the primary release year.
    pub primary_release_year: Option<u16>,
}

impl SearchMovieParams {
    /// Creates parameters with the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the adult-results flag.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    /// Sets the release-year filter.
    #[must_use]
    pub const fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the primary-release-year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u16) -> Self {
        self.primary_release_year = Some(year);
        self
    }
}

impl ApplyDefaults for SearchMovieParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            region: or_default(self.region, defaults.region.as_ref()),
            ..self
        }
    }
}

/// Parameters for TV search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTvParams {
    /// Search query (required).
    pub query: String,
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Include adult results.
    pub include_adult: Option<bool>,
    /// Filter on any air year.
    pub year: Option<u16>,
    /// Filter on the first-air-date year.
    pub first_air_date_year: Option<u16>,
}

impl SearchTvParams {
    /// Creates parameters with the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
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

    /// Sets the adult-results flag.
    #[must_use]
    pub const fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    /// Sets the air-year filter.
    #[must_use]
    pub const fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the first-air-date-year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u16) -> Self {
        self.first_air_date_year = Some(year);
        self
    }
}

impl ApplyDefaults for SearchTvParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            ..self
        }
    }
}

/// Search endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/search-movie>
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> Search<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    /// Searches movies by original, translated and alternative titles.
    ///
    /// `GET /search/movie`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn movie(
        &self,
        params: SearchMovieParams,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        let params = params.apply_defaults(self.defaults);
        let query = Query::new()
            .push("query", params.query)
            .push_opt("language", params.language)
            .push_opt("region", params.region)
            .push_opt("page", params.page)
            .push_opt("include_adult", params.include_adult)
            .push_opt("year", params.year)
            .push_opt("primary_release_year", params.primary_release_year);
        self.client.get_json("search/movie", &query).await
    }

    /// Searches TV series by original, translated and alternative names.
    ///
    /// `GET /search/tv`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn tv(&self, params: SearchTvParams) -> Result<PaginatedResponse<TvResultItem>> {
        let params = params.apply_defaults(self.defaults);
        let query = Query::new()
            .push("query", params.query)
            .push_opt("language", params.language)
            .push_opt("page", params.page)
            .push_opt("include_adult", params.include_adult)
            .push_opt("year", params.year)
            .push_opt("first_air_date_year", params.first_air_date_year);
        self.client.get_json("search/tv", &query).await
    }
}
