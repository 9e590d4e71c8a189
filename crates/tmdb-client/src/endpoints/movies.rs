//! Movie endpoint group.

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{ApplyDefaults, TmdbOptions, or_default};
use crate::types::{
    Changes, Credits, ExternalIds, ImageCollection, MovieAlternativeTitles, MovieDetails,
    MovieKeywords, MovieReleaseDates, MovieResultItem, PaginatedResponse, Review, Translations,
    VideoCollection, WatchProviders,
};

/// Sub-resources that can be bundled into a details response via
/// `append_to_response`. Each selected value populates the matching
/// `Option` field on [`MovieDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieAppend {
    /// Populates [`MovieDetails::alternative_titles`].
    AlternativeTitles,
    /// Populates [`MovieDetails::credits`].
    Credits,
    /// Populates [`MovieDetails::external_ids`].
    ExternalIds,
    /// Populates [`MovieDetails::images`].
    Images,
    /// Populates [`MovieDetails::keywords`].
    Keywords,
    /// Populates [`MovieDetails::recommendations`].
    Recommendations,
    /// Populates [`MovieDetails::release_dates`].
    ReleaseDates,
    /// Populates [`MovieDetails::similar`].
    Similar,
    /// Populates [`MovieDetails::translations`].
    Translations,
    /// Populates [`MovieDetails::videos`].
    Videos,
}

impl MovieAppend {
    /// Returns the `append_to_response` token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlternativeTitles => "alternative_titles",
            Self::Credits => "credits",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::Keywords => "keywords",
            Self::Recommendations => "recommendations",
            Self::ReleaseDates => "release_dates",
            Self::Similar => "similar",
            Self::Translations => "translations",
            Self::Videos => "videos",
        }
    }
}

/// Parameters for movie details.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDetailsParams {
    /// Response language; falls back to the client default.
    pub language: Option<String>,
    /// Sub-resources to bundle into the response.
    pub append_to_response: Vec<MovieAppend>,
}

impl MovieDetailsParams {
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
    pub fn append(mut self, appends: &[MovieAppend]) -> Self {
        self.append_to_response = appends.to_vec();
        self
    }
}

impl ApplyDefaults for MovieDetailsParams {
    fn apply_defaults(self, defaults: &TmdbOptions) -> Self {
        Self {
            language: or_default(self.language, defaults.language.as_ref()),
            ..self
        }
    }
}

/// Movie endpoints.
///
/// Reference: <https://developer.themoviedb.org/reference/movie-details>
#[derive(Debug, Clone, Copy)]
pub struct Movies<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> Movies<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    /// Language merged per the single-field defaulting rule.
    fn language(&self, explicit: Option<&str>) -> Option<String> {
        or_default(explicit.map(ToOwned::to_owned), self.defaults.language.as_ref())
    }

    /// Top-level details of a movie.
    ///
    /// `GET /movie/{movie_id}`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn details(&self, movie_id: u64, params: MovieDetailsParams) -> Result<MovieDetails> {
        let params = params.apply_defaults(self.defaults);
        let appends: Vec<&str> = params
            .append_to_response
            .iter()
            .map(|a| a.as_str())
            .collect();
        let query = Query::new()
            .push_opt("language", params.language)
            .push_list("append_to_response", &appends);
        self.client.get_json(&format!("movie/{movie_id}"), &query).await
    }

    /// Alternative titles of a movie, optionally filtered by country.
    ///
    /// `GET /movie/{movie_id}/alternative_titles`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
    ) -> Result<MovieAlternativeTitles> {
        let query = Query::new().push_opt("country", country);
        self.client
            .get_json(&format!("movie/{movie_id}/alternative_titles"), &query)
            .await
    }

    /// Cast and crew of a movie.
    ///
    /// `GET /movie/{movie_id}/credits`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn credits(&self, movie_id: u64, language: Option<&str>) -> Result<Credits> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("movie/{movie_id}/credits"), &query)
            .await
    }

    /// External service ids of a movie.
    ///
    /// `GET /movie/{movie_id}/external_ids`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn external_ids(&self, movie_id: u64) -> Result<ExternalIds> {
        self.client
            .get_json(&format!("movie/{movie_id}/external_ids"), &Query::new())
            .await
    }

    /// Images of a movie.
    ///
    /// `GET /movie/{movie_id}/images`
    ///
    /// `include_image_language` is a comma-separated list of ISO 639-1
    /// tags (`null` selects images without a language).
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn images(
        &self,
        movie_id: u64,
        language: Option<&str>,
        include_image_language: Option<&str>,
    ) -> Result<ImageCollection> {
        let query = Query::new()
            .push_opt("language", self.language(language))
            .push_opt("include_image_language", include_image_language);
        self.client
            .get_json(&format!("movie/{movie_id}/images"), &query)
            .await
    }

    /// Keywords of a movie.
    ///
    /// `GET /movie/{movie_id}/keywords`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn keywords(&self, movie_id: u64) -> Result<MovieKeywords> {
        self.client
            .get_json(&format!("movie/{movie_id}/keywords"), &Query::new())
            .await
    }

    /// Recommendations for a movie.
    ///
    /// `GET /movie/{movie_id}/recommendations`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn recommendations(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        let query = Query::new()
            .push_opt("language", self.language(language))
            .push_opt("page", page);
        self.client
            .get_json(&format!("movie/{movie_id}/recommendations"), &query)
            .await
    }

    /// Release dates and certifications of a movie.
    ///
    /// `GET /movie/{movie_id}/release_dates`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn release_dates(&self, movie_id: u64) -> Result<MovieReleaseDates> {
        self.client
            .get_json(&format!("movie/{movie_id}/release_dates"), &Query::new())
            .await
    }

    /// Movies similar to the given one.
    ///
    /// `GET /movie/{movie_id}/similar`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn similar(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<MovieResultItem>> {
        let query = Query::new()
            .push_opt("language", self.language(language))
            .push_opt("page", page);
        self.client
            .get_json(&format!("movie/{movie_id}/similar"), &query)
            .await
    }

    /// Translations of a movie.
    ///
    /// `GET /movie/{movie_id}/translations`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn translations(&self, movie_id: u64) -> Result<Translations> {
        self.client
            .get_json(&format!("movie/{movie_id}/translations"), &Query::new())
            .await
    }

    /// Videos (trailers, teasers, ...) of a movie.
    ///
    /// `GET /movie/{movie_id}/videos`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn videos(&self, movie_id: u64, language: Option<&str>) -> Result<VideoCollection> {
        let query = Query::new().push_opt("language", self.language(language));
        self.client
            .get_json(&format!("movie/{movie_id}/videos"), &query)
            .await
    }

    /// User reviews of a movie.
    ///
    /// `GET /movie/{movie_id}/reviews`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn reviews(
        &self,
        movie_id: u64,
        language: Option<&str>,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<Review>> {
        let query = Query::new()
            .push_opt("language", self.language(language))
            .push_opt("page", page);
        self.client
            .get_json(&format!("movie/{movie_id}/reviews"), &query)
            .await
    }

    /// Streaming, rental and purchase providers of a movie, by country.
    ///
    /// `GET /movie/{movie_id}/watch/providers`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn watch_providers(&self, movie_id: u64) -> Result<WatchProviders> {
        self.client
            .get_json(&format!("movie/{movie_id}/watch/providers"), &Query::new())
            .await
    }

    /// The most recently created movie.
    ///
    /// `GET /movie/latest`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn latest(&self) -> Result<MovieDetails> {
        self.client.get_json("movie/latest", &Query::new()).await
    }

    /// Recent edits of a movie. Dates are `YYYY-MM-DD`; the window may be
    /// at most 14 days.
    ///
    /// `GET /movie/{movie_id}/changes`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn changes(
        &self,
        movie_id: u64,
        start_date: Option<&str>,
        end_date: Option<&str>,
        page: Option<u32>,
    ) -> Result<Changes> {
        let query = Query::new()
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date)
            .push_opt("page", page);
        self.client
            .get_json(&format!("movie/{movie_id}/changes"), &query)
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
        assert_eq!(MovieAppend::Credits.as_str(), "credits");
        assert_eq!(MovieAppend::AlternativeTitles.as_str(), "alternative_titles");
        assert_eq!(MovieAppend::ReleaseDates.as_str(), "release_dates");
    }

    #[test]
    fn test_details_params_defaulting() {
        // Arrange
        let defaults = TmdbOptions::new().language("de-DE");
        let params = MovieDetailsParams::new().append(&[MovieAppend::Credits]);

        // Act
        let merged = params.apply_defaults(&defaults);

        // Assert
        assert_eq!(merged.language.as_deref(), Some("de-DE"));
        assert_eq!(merged.append_to_response, vec![MovieAppend::Credits]);
    }

    #[test]
    fn test_details_params_explicit_language_wins() {
        // Arrange
        let defaults = TmdbOptions::new().language("de-DE");
        let params = MovieDetailsParams::new().language("en-US");

        // Act
        let merged = params.apply_defaults(&defaults);

        // Assert
        assert_eq!(merged.language.as_deref(), Some("en-US"));
    }
}
