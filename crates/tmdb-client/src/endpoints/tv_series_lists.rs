//! TV series list endpoint group (airing today, on the air, popular,
//! top rated).

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{ApplyDefaults, TmdbOptions, or_default};
use crate::types::{PaginatedResponse, TvResultItem};

/// Parameters shared by all TV series list endpoints.
///
/// `timezone` only matters for `airing_today`, where it defines "today";
/// the other lists ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TvListParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Timezone; falls back to the client default.
    pub timezone: Option<String>,
}

impl TvListParams {
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

    /// Sets the timezone.
    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

impl ApplyDefaults for TvListParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            timezone: or_default(self.timezone, defaults.timezone.as_ref()),
            ..self
        }
    }
}

/// TV series list endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/tv-series-airing-today-list>
#[derive(Debug, Clone, Copy)]
pub struct TvSeriesLists<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> TvSeriesLists<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    async fn fetch(
        &self,
        list: &str,
        params: TvListParams,
        with_timezone: bool,
    ) -> Result<PaginatedResponse<TvResultItem>> {
        let params = params.apply_defaults(self.defaults);
        let query = Query::new()
            .push_opt("language", params.language)
            .push_opt("page", params.page)
            .push_opt("timezone", if with_timezone { params.timezone } else { None });
        self.client.get_json(&format!("tv/{list}"), &query).await
    }

    /// TV shows airing today (in the configured or given timezone).
    ///
    /// `GET /tv/airing_today`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn airing_today(
        &self,
        params: TvListParams,
    ) -> Result<PaginatedResponse<TvResultItem>> {
        self.fetch("airing_today", params, true).await
    }

    /// TV shows airing within the next 7 days.
    ///
    /// `GET /tv/on_the_air`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn on_the_air(
        &self,
        params: TvListParams,
    ) -> Result<PaginatedResponse<TvResultItem>> {
        self.fetch("on_the_air", params, false).await
    }

    /// TV shows ordered by popularity.
    ///
    /// `GET /tv/popular`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn popular(&self, params: TvListParams) -> Result<PaginatedResponse<TvResultItem>> {
        self.fetch("popular", params, false).await
    }

    /// TV shows ordered by rating.
    ///
    /// `GET /tv/top_rated`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn top_rated(&self, params: TvListParams) -> Result<PaginatedResponse<TvResultItem>> {
        self.fetch("top_rated", params, false).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_timezone_defaulting() {
        // Arrange
        let defaults = TmdbOptions::new().timezone("Asia/Tokyo").language("ja-JP");

        // Act
        let merged = TvListParams::new().apply_defaults(&defaults);

        // Assert
        assert_eq!(merged.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(merged.language.as_deref(), Some("ja-JP"));
    }

    #[test]
    fn test_explicit_timezone_wins() {
        // Arrange
        let defaults = TmdbOptions::new().timezone("Asia/Tokyo");
        let params = TvListParams::new().timezone("Europe/Rome");

        // Act
        let merged = params.apply_defaults(&defaults);

        // Assert
        assert_eq!(merged.timezone.as_deref(), Some("Europe/Rome"));
    }
}
