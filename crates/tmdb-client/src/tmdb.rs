//! `Tmdb` - the top-level client and its builder.

use reqwest::Client;
use url::Url;

use crate::client::ApiClient;
use crate::endpoints::{
    Configuration, Genres, MovieLists, Movies, Search, TvSeries, TvSeriesLists,
};
use crate::error::{Result, TmdbError};
use crate::images::ImageUrls;
use crate::options::TmdbOptions;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("tmdb-client/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Holds the HTTP pipeline and the immutable client-wide defaults; all
/// endpoint groups are reached through the accessor methods. The client
/// is cheap to share behind an `Arc` and safe to use from concurrent
/// tasks - every call is independent.
#[derive(Debug)]
pub struct Tmdb {
    /// HTTP pipeline.
    client: ApiClient,
    /// Client-wide defaults, read-only for the client's lifetime.
    options: TmdbOptions,
}

/// Builder for [`Tmdb`].
#[derive(Debug, Default)]
pub struct TmdbBuilder {
    base_url: Option<Url>,
    access_token: Option<String>,
    user_agent: Option<String>,
    options: Option<TmdbOptions>,
}

impl TmdbBuilder {
    /// Sets the API bearer access token (required, must be non-empty).
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the client-wide default options.
    #[must_use]
    pub fn options(mut self, options: TmdbOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] (library-originated) if the access token
    /// is missing or empty, or if the HTTP client cannot be built.
    /// Token validation happens here, never deferred to the first call.
    pub fn build(self) -> Result<Tmdb> {
        let access_token = match self.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(TmdbError::library(String::from(
                    "TMDB requires a valid access token, please provide one.",
                )));
            }
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TmdbError::library(format!("invalid default base URL: {e}")))?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(|e| TmdbError::library(format!("failed to build HTTP client: {e}")))?;

        Ok(Tmdb {
            client: ApiClient::new(http_client, base_url, access_token),
            options: self.options.unwrap_or_default(),
        })
    }
}

impl Tmdb {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> TmdbBuilder {
        TmdbBuilder::default()
    }

    /// Creates a client with the given access token and default options.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the token is empty.
    pub fn new(access_token: impl Into<String>, options: TmdbOptions) -> Result<Self> {
        Self::builder()
            .access_token(access_token)
            .options(options)
            .build()
    }

    /// The client-wide default options.
    #[must_use]
    pub const fn options(&self) -> &TmdbOptions {
        &self.options
    }

    /// Movie endpoints.
    #[must_use]
    pub const fn movies(&self) -> Movies<'_> {
        Movies::new(&self.client, &self.options)
    }

    /// Movie list endpoints.
    #[must_use]
    pub const fn movie_lists(&self) -> MovieLists<'_> {
        MovieLists::new(&self.client, &self.options)
    }

    /// TV series endpoints.
    #[must_use]
    pub const fn tv_series(&self) -> TvSeries<'_> {
        TvSeries::new(&self.client, &self.options)
    }

    /// TV series list endpoints.
    #[must_use]
    pub const fn tv_series_lists(&self) -> TvSeriesLists<'_> {
        TvSeriesLists::new(&self.client, &self.options)
    }

    /// Search endpoints.
    #[must_use]
    pub const fn search(&self) -> Search<'_> {
        Search::new(&self.client, &self.options)
    }

    /// Genre endpoints.
    #[must_use]
    pub const fn genres(&self) -> Genres<'_> {
        Genres::new(&self.client, &self.options)
    }

    /// Configuration endpoints.
    #[must_use]
    pub const fn configuration(&self) -> Configuration<'_> {
        Configuration::new(&self.client, &self.options)
    }

    /// Image URL builder (local, no HTTP).
    #[must_use]
    pub const fn images(&self) -> ImageUrls<'_> {
        ImageUrls::new(&self.options.images)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::endpoints::{MovieAppend, MovieDetailsParams, SearchMovieParams, TvDetailsParams};
    use crate::error::{LIBRARY_ERROR_CODE, catalog_entry};

    fn test_tmdb(mock_server: &MockServer, options: TmdbOptions) -> Tmdb {
        let base_url = format!("{}/3/", mock_server.uri());
        Tmdb::builder()
            .access_token("test-token")
            .base_url(base_url.parse().unwrap())
            .options(options)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_access_token_fails_at_construction() {
        // Arrange & Act
        let result = Tmdb::builder().access_token("").build();

        // Assert: no network involved, the builder rejects it outright
        let err = result.unwrap_err();
        assert_eq!(err.tmdb_status_code, LIBRARY_ERROR_CODE);
        assert!(err.message.contains("access token"));
    }

    #[test]
    fn test_missing_access_token_fails_at_construction() {
        // Arrange & Act
        let result = Tmdb::builder().build();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_token_builds() {
        // Arrange & Act
        let result = Tmdb::builder().access_token("test-token").build();

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_configured_defaults_flow_into_search() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/search_movie_fight_club.json");

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Fight Club"))
            .and(query_param("language", "it-IT"))
            .and(query_param("region", "IT"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = TmdbOptions::new().language("it-IT").region("IT");
        let tmdb = test_tmdb(&mock_server, options);

        // Act
        let response = tmdb
            .search()
            .movie(SearchMovieParams::new("Fight Club"))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.page, 1);
        assert_eq!(response.results[0].id, 550);
        assert_eq!(response.results[0].title, "Fight Club");
    }

    #[tokio::test]
    async fn test_explicit_language_overrides_configured_default() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/search_movie_fight_club.json");

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("language", "en"))
            .and(query_param("region", "IT"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = TmdbOptions::new().language("it-IT").region("IT");
        let tmdb = test_tmdb(&mock_server, options);

        // Act & Assert (mock expect(1) verifies language=en went out)
        tmdb.search()
            .movie(SearchMovieParams::new("Fight Club").language("en"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unconfigured_fields_are_absent_from_request() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/search_movie_fight_club.json");

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Fight Club"))
            .and(query_param_is_missing("language"))
            .and(query_param_is_missing("region"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act & Assert
        tmdb.search()
            .movie(SearchMovieParams::new("Fight Club"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_movie_details_with_appends() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/movie_details_550_appended.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("append_to_response", "credits,images"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());
        let params = MovieDetailsParams::new().append(&[MovieAppend::Credits, MovieAppend::Images]);

        // Act
        let details = tmdb.movies().details(550, params).await.unwrap();

        // Assert
        assert_eq!(details.id, 550);
        assert_eq!(details.title, "Fight Club");
        // explicit null in the fixture arrives as absent
        assert!(details.homepage.is_none());
        let credits = details.credits.unwrap();
        assert_eq!(credits.cast[0].name, "Edward Norton");
        assert!(!details.images.unwrap().posters.is_empty());
        assert!(details.videos.is_none());
    }

    #[tokio::test]
    async fn test_movie_details_not_found_maps_catalog_entry() {
        // Arrange
        let mock_server = MockServer::start().await;
        let entry = catalog_entry(34).unwrap();

        Mock::given(method("GET"))
            .and(path("/3/movie/999999999"))
            .respond_with(
                ResponseTemplate::new(entry.http_status).set_body_string(format!(
                    r#"{{"success":false,"status_code":34,"status_message":"{}"}}"#,
                    entry.message
                )),
            )
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let result = tmdb
            .movies()
            .details(999_999_999, MovieDetailsParams::new())
            .await;

        // Assert: both codes match the documented "not found" mapping
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code, entry.http_status);
        assert_eq!(err.tmdb_status_code, 34);
        assert_eq!(err.message, entry.message);
    }

    #[tokio::test]
    async fn test_tv_details_with_season_list() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/tv_details_1399.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1399"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let details = tmdb
            .tv_series()
            .details(1399, TvDetailsParams::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(details.id, 1399);
        assert_eq!(details.name, "Game of Thrones");
        assert!(!details.seasons.is_empty());
        assert!(details.number_of_seasons >= 8);
    }

    #[tokio::test]
    async fn test_tv_season_episode_list() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/tv_season_1399_1.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1399/season/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let season = tmdb.tv_series().season(1399, 1, None).await.unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert_eq!(season.episodes[0].episode_number, 1);
    }

    #[tokio::test]
    async fn test_movie_watch_providers_by_country() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/movie_watch_providers_550.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/550/watch/providers"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let providers = tmdb.movies().watch_providers(550).await.unwrap();

        // Assert
        let italy = providers.results.get("IT").unwrap();
        assert_eq!(italy.flatrate[0].provider_name, "Amazon Prime Video");
        assert_eq!(italy.buy.len(), 2);
        // absent monetization groups decode as empty
        assert!(providers.results.get("US").unwrap().rent.is_empty());
    }

    #[tokio::test]
    async fn test_tv_aggregate_credits_roles_and_jobs() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/tv_aggregate_credits_1399.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1399/aggregate_credits"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let credits = tmdb.tv_series().aggregate_credits(1399, None).await.unwrap();

        // Assert
        assert_eq!(
            credits.cast[0].roles[0].character.as_deref(),
            Some("Tyrion Lannister")
        );
        assert_eq!(credits.cast[0].total_episode_count, Some(73));
        assert_eq!(credits.crew[0].jobs[0].job.as_deref(), Some("Writer"));
    }

    #[tokio::test]
    async fn test_genres_use_language_default() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/genre_movie_list.json");

        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
            .and(query_param("language", "it-IT"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = TmdbOptions::new().language("it-IT");
        let tmdb = test_tmdb(&mock_server, options);

        // Act
        let genres = tmdb.genres().movie_list(None).await.unwrap();

        // Assert
        assert!(genres.genres.iter().any(|g| g.id == 18));
    }

    #[tokio::test]
    async fn test_configuration_details() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/configuration.json");

        Mock::given(method("GET"))
            .and(path("/3/configuration"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let tmdb = test_tmdb(&mock_server, TmdbOptions::new());

        // Act
        let config = tmdb.configuration().details().await.unwrap();

        // Assert
        assert_eq!(config.images.secure_base_url, "https://image.tmdb.org/t/p/");
        assert!(config.images.poster_sizes.contains(&String::from("w500")));
    }

    #[tokio::test]
    async fn test_movie_list_with_region_default() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/search_movie_fight_club.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/now_playing"))
            .and(query_param("region", "IT"))
            .and(query_param_is_missing("timezone"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = TmdbOptions::new().region("IT");
        let tmdb = test_tmdb(&mock_server, options);

        // Act & Assert
        tmdb.movie_lists()
            .now_playing(crate::endpoints::MovieListParams::new())
            .await
            .unwrap();
    }
}
