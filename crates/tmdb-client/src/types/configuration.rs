//! Configuration endpoint response shapes.

use serde::Deserialize;

/// Response of `GET /configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfiguration {
    /// Image hosting configuration.
    pub images: ImageConfiguration,
    /// Keys tracked by the changes endpoints.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// Image hosting details: base URLs and the size tokens currently valid
/// on the provider side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Valid backdrop size tokens.
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Valid logo size tokens.
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    /// Valid poster size tokens.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Valid profile size tokens.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    /// Valid still size tokens.
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

/// A country used throughout TMDB (ISO 3166-1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// English name.
    pub english_name: String,
    /// Name localized to the request language.
    #[serde(default)]
    pub native_name: Option<String>,
}

/// A department and its job titles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    /// Department name.
    pub department: String,
    /// Job titles within the department.
    #[serde(default)]
    pub jobs: Vec<String>,
}

/// A language used throughout TMDB (ISO 639-1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageItem {
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// English name.
    pub english_name: String,
    /// Native name (may be empty).
    #[serde(default)]
    pub name: Option<String>,
}

/// Timezones of one country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timezone {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Timezone names (e.g. `Europe/Rome`).
    #[serde(default)]
    pub zones: Vec<String>,
}
