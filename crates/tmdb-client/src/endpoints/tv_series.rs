//! TV series endpoint group.

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{ApplyDefaults, TmdbOptions, or_default};
use crate::types::{
    AggregateCredits, ContentRatings, Credits, EpisodeGroups, ExternalIds, ImageCollection,
    TvDetails, TvKeywords, TvSeason, VideoCollection,
};

/// Sub-resources that can be bundled into a details response via
/// `append_to_response`. Each selected value populates the matching
/// `Option` field on [`TvDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvAppend {
    /// Populates [`TvDetails::credits`].
    Credits,
    /// Populates [`TvDetails::external_ids`].
    ExternalIds,
    /// Populates [`TvDetails::images`].
    Images,
    /// Populates [`TvDetails::keywords`].
    Keywords,
    /// Populates [`TvDetails::recommendations`].
    Recommendations,
    /// Populates [`TvDetails::similar`].
    Similar,
    /// Populates [`TvDetails::videos`].
    Videos,
}

impl TvAppend {
    /// Returns the `append_to_response` token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::Keywords => "keywords",
            Self::Recommendations => "recommendations",
            Self::Similar => "similar",
            Self::Videos => "videos",
        }
    }
}

/// Parameters for TV series details.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TvDetailsParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// Sub-resources to bundle into the response.
    pub append_to_response: Vec<TvAppend>,
}

impl TvDetailsParams {
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

    /// Sets the sub-resources to append.
    #[must_use]
    pub fn append(mut self, appends: &[TvAppend]) -> Self {
        self.append_to_response = appends.to_vec();
        self
    }
}

impl ApplyDefaults for TvDetailsParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            ..self
        }
    }
}

/// TV series endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/tv-series-details>
#[derive(Debug, Clone, Copy)]
pub struct TvSeries<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> TvSeries<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    /// Language merged per the single-field defaulting rule.
    fn language(&self, explicit: Option<&str>) -> Option<String> {
        or_default(explicit.map(ToOwned::to_owned), self.defaults.language.as_ref())
    }

    /// Top-level details of a TV series.
    ///
    /// `GET /tv/{series_id}`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn details(&self, series_id: u64, params: TvDetailsParams) -> Result<TvDetails> {
        let params = params.apply_defaults(self.defaults);
        let appends: Vec<&str> = params
            .append_to_response
            .iter()
            .map(|a| a.as_str())
            .collect();
        let query = Query::new()
            .push_opt("language", params.language)
            .push_list("append_to_response", &appends);
        self.client.get_json(&format!("tv/{series_id}"), &query).await
    }

    /// Cast and crew of a TV series.
    ///
    /// `GET /tv/{series_id}/credits`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn credits(&self, series_id: u64, language: Option<&str>) -> Result<Credits> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("tv/{series_id}/credits"), &query)
            .await
    }

    /// External service ids of a TV series.
    ///
    /// `GET /tv/{series_id}/external_ids`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn external_ids(&self, series_id: u64) -> Result<ExternalIds> {
        self.client
            .get_json(&format!("tv/{series_id}/external_ids"), &Query::new())
            .await
    }

    /// Images of a TV series.
    ///
    /// `GET /tv/{series_id}/images`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn images(
        &self,
        series_id: u64,
        language: Option<&str>,
        include_image_language: Option<&str>,
    ) -> Result<ImageCollection> {
        let query = Query::new()
            .push_opt("language", self.language(language))
            .push_opt("include_image_language", include_image_language);
        self.client
            .get_json(&format!("tv/{series_id}/images"), &query)
            .await
    }

    /// Keywords of a TV series.
    ///
    /// `GET /tv/{series_id}/keywords`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn keywords(&self, series_id: u64) -> Result<TvKeywords> {
        self.client
            .get_json(&format!("tv/{series_id}/keywords"), &Query::new())
            .await
    }

    /// Videos (trailers, teasers, ...) of a TV series.
    ///
    /// `GET /tv/{series_id}/videos`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn videos(&self, series_id: u64, language: Option<&str>) -> Result<VideoCollection> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("tv/{series_id}/videos"), &query)
            .await
    }

    /// Cast and crew aggregated across all episodes and seasons.
    ///
    /// `GET /tv/{series_id}/aggregate_credits`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn aggregate_credits(
        &self,
        series_id: u64,
        language: Option<&str>,
    ) -> Result<AggregateCredits> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("tv/{series_id}/aggregate_credits"), &query)
            .await
    }

    /// Content ratings of a TV series, by country.
    ///
    /// `GET /tv/{series_id}/content_ratings`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn content_ratings(&self, series_id: u64) -> Result<ContentRatings> {
        self.client
            .get_json(&format!("tv/{series_id}/content_ratings"), &Query::new())
            .await
    }

    /// Alternative episode groupings of a TV series.
    ///
    /// `GET /tv/{series_id}/episode_groups`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn episode_groups(&self, series_id: u64) -> Result<EpisodeGroups> {
        self.client
            .get_json(&format!("tv/{series_id}/episode_groups"), &Query::new())
            .await
    }

    /// A season with its full episode list.
    ///
    /// `GET /tv/{series_id}/season/{season_number}`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn season(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<TvSeason> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("tv/{series_id}/season/{season_number}"), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_append_tokens() {
        // Arrange & Act & Assert
        assert_eq!(TvAppend::ExternalIds.as_str(), "external_ids");
        assert_eq!(TvAppend::Videos.as_str(), "videos");
    }

    #[test]
    fn test_details_params_defaulting_is_idempotent() {
        // Arrange
        let defaults = TmdbOptions::new().language("ja-JP");
        let params = TvDetailsParams::new().append(&[TvAppend::Credits, TvAppend::Images]);

        // Act
        let once = params.apply_defaults(&defaults);
        let twice = once.clone().apply_defaults(&defaults);

        // Assert
        assert_eq!(once.language.as_deref(), Some("ja-JP"));
        assert_eq!(once, twice);
    }
}
