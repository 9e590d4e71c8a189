//! Configuration endpoint group.

use crate::client::{ApiClient, Query};
use crate::error::Result;
use crate::options::{TmdbOptions, or_default};
use crate::types::{ApiConfiguration, Country, Job, LanguageItem, Timezone};

/// Configuration endpoints: static metadata needed to integrate the API,
/// such as valid image sizes and the image base URLs.
///
/// Reference: <https://developer.themoviedb.org/reference/configuration-details>
#[derive(Debug, Clone, Copy)]
pub struct Configuration<'a> {
    client: &'a ApiClient,
    defaults: &'a TmdbOptions,
}

impl<'a> Configuration<'a> {
    pub(crate) const fn new(client: &'a ApiClient, defaults: &'a TmdbOptions) -> Self {
        Self { client, defaults }
    }

    /// API-wide configuration details.
    ///
    /// `GET /configuration`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn details(&self) -> Result<ApiConfiguration> {
        self.client.get_json("configuration", &Query::new()).await
    }

    /// Countries (ISO 3166-1) used throughout TMDB.
    ///
    /// `GET /configuration/countries`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn countries(&self, language: Option<&str>) -> Result<Vec<Country>> {
        let language = or_default(language.map(ToOwned::to_owned), self.defaults.language.as_ref());
        let query = Query::new().push_opt("language", language);
        self.client.get_json("configuration/countries", &query).await
    }

    /// Jobs and departments used throughout TMDB.
    ///
    /// `GET /configuration/jobs`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        self.client.get_json("configuration/jobs", &Query::new()).await
    }

    /// Languages (ISO 639-1) used throughout TMDB.
    ///
    /// `GET /configuration/languages`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn languages(&self) -> Result<Vec<LanguageItem>> {
        self.client
            .get_json("configuration/languages", &Query::new())
            .await
    }

    /// Officially supported translations (IETF tags).
    ///
    /// `GET /configuration/primary_translations`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn primary_translations(&self) -> Result<Vec<String>> {
        self.client
            .get_json("configuration/primary_translations", &Query::new())
            .await
    }

    /// Timezones used throughout TMDB.
    ///
    /// `GET /configuration/timezones`
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`](crate::TmdbError) if the request fails or
    /// the response cannot be decoded.
    pub async fn timezones(&self) -> Result<Vec<Timezone>> {
        self.client
            .get_json("configuration/timezones", &Query::new())
            .await
    }
}
